// Runtime configuration read from the process environment.
//
// Every variable is optional. Invalid values fail startup instead of falling back silently.

use std::net::SocketAddr;
use thiserror::Error;

use crate::shared::core::record::KeyColumn;
use crate::shared::infrastructure::record_store::{NameComparison, StoreOptions};

pub const ADDR_VAR: &str = "WORK_ORDERS_ADDR";
pub const SEED_EXAMPLES_VAR: &str = "WORK_ORDERS_SEED_EXAMPLES";
pub const NAME_COMPARISON_VAR: &str = "WORK_ORDERS_NAME_COMPARISON";
pub const KEY_COLUMN_VAR: &str = "WORK_ORDERS_KEY_COLUMN";

const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} must be true or false, got {value}")]
    InvalidBool { var: &'static str, value: String },

    #[error("{var} must be case-sensitive or case-insensitive, got {value}")]
    InvalidNameComparison { var: &'static str, value: String },

    #[error("{var} must be Integer64ID or StringID, got {value}")]
    InvalidKeyColumn { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub seed_examples: bool,
    pub store: StoreOptions,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |var: &str| lookup(var).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let addr = read(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr.parse().map_err(|_| ConfigError::InvalidAddr {
            var: ADDR_VAR,
            value: addr.clone(),
        })?;

        let seed_examples = match read(SEED_EXAMPLES_VAR) {
            None => true,
            Some(value) => parse_bool(&value).ok_or(ConfigError::InvalidBool {
                var: SEED_EXAMPLES_VAR,
                value,
            })?,
        };

        let name_comparison = match read(NAME_COMPARISON_VAR) {
            None => NameComparison::default(),
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "case-sensitive" => NameComparison::CaseSensitive,
                "case-insensitive" => NameComparison::CaseInsensitive,
                _ => {
                    return Err(ConfigError::InvalidNameComparison {
                        var: NAME_COMPARISON_VAR,
                        value,
                    });
                }
            },
        };

        let key_column = match read(KEY_COLUMN_VAR) {
            None => KeyColumn::Integer64Id,
            Some(value) => value
                .parse::<KeyColumn>()
                .map_err(|_| ConfigError::InvalidKeyColumn {
                    var: KEY_COLUMN_VAR,
                    value,
                })?,
        };

        Ok(Self {
            addr,
            seed_examples,
            store: StoreOptions {
                key_column,
                name_comparison,
                ..StoreOptions::default()
            },
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
