//! HTTP layer for the screening agent

pub mod http;
pub mod logbook;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sakina_core::Error;
use serde_json::json;
use thiserror::Error;

pub use http::{create_router, AppState};
pub use logbook::Logbook;

/// Errors surfaced to HTTP clients
#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    Engine(#[from] Error),

    #[error("unknown user: {0}")]
    UnknownUser(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServerError::Engine(Error::EmptyInput) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ServerError::Engine(Error::ClassifierUnavailable(_)) => {
                (StatusCode::SERVICE_UNAVAILABLE, self.to_string())
            }
            ServerError::UnknownUser(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ServerError::Engine(_) => {
                tracing::error!(error = %self, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
