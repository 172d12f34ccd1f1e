// Composition root for the work order service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the record store and the request translator.
// - Wire them into the HTTP router.

pub mod config;
pub mod http;
pub mod state;
