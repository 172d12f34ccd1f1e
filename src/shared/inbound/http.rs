use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::shared::inbound::translator::TranslatedResponse;

impl IntoResponse for TranslatedResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.body)).into_response()
    }
}
