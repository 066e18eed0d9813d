//! Error types for the careers openings service.
//!
//! This module contains the error enum shared by the token exchange, the
//! paginated requisition fetch and the HTTP handler. It provides:
//! - `CareersError`: every failure the request flow can surface
//! - Conversion to an axum response carrying a fixed `{ "error": ... }` body
//!
//! Upstream details are logged where the failure happens and never reach
//! the response body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Variants hold only status codes and fixed messages so a failed
/// computation can be cloned out of the shared cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CareersError {
    #[error("Failed to retrieve access token")]
    Authentication { status: Option<StatusCode> },

    #[error("Failed to fetch job requisitions")]
    Fetch { status: StatusCode },

    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CareersError {
    /// Best-known HTTP status for this failure, 500 when upstream gave none.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Authentication { status } => status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Self::Fetch { status } => *status,
            Self::MissingConfig(_) | Self::InvalidConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds a fetch error from an optional upstream status.
    pub fn fetch(status: Option<StatusCode>) -> Self {
        Self::Fetch {
            status: status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl IntoResponse for CareersError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            // Configuration problems are operator-facing only.
            Self::MissingConfig(_) | Self::InvalidConfig(_) => "Internal server error".to_string(),
            Self::Authentication { .. } | Self::Fetch { .. } => self.to_string(),
        };

        tracing::error!(%status, error = %self, "openings request failed");
        (status, Json(json!({ "error": message }))).into_response()
    }
}
