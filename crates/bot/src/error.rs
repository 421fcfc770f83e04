//! Unified error handling for the webhook surface.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::slack::SlackError;

/// Application-level error type for the webhook handlers.
///
/// Slack retries callbacks that fail with a 5xx, so the status mapping
/// decides which failures get retried: undecodable payloads and outbound
/// delivery failures do; signature mismatches and requests missing
/// required tokens do not.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request signature did not match the signing secret.
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Request is missing required tokens or actions.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Request body could not be decoded.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// Outbound Slack delivery failed.
    #[error("Delivery failed: {0}")]
    Delivery(#[from] SlackError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(
            self,
            Self::MalformedPayload(_) | Self::Delivery(_) | Self::Internal(_)
        ) {
            tracing::error!(error = %self, "Webhook request error");
        }

        let status = match &self {
            Self::AuthenticationFailed(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::MalformedPayload(_) | Self::Delivery(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::AuthenticationFailed(_) | Self::BadRequest(_) => self.to_string(),
            _ => "Internal server error".to_string(),
        };

        (status, message).into_response()
    }
}
