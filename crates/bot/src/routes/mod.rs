//! HTTP route handlers for the Slack webhook surface.
//!
//! # Route Structure
//!
//! ```text
//! # Slack webhooks (signed)
//! POST /slack/events   - Events API callbacks and the URL handshake
//! POST /slack/actions  - Interactive component callbacks
//! ```
//!
//! Both Slack routes verify the request signature before decoding the
//! body. The deployment workflow spans three callbacks with no
//! server-side session: the mention produces the version menu, the menu
//! selection produces the confirmation prompt (addressed through the
//! `response_url`), and the confirmation launches the detached
//! deployment. Each callback carries everything its step needs, so a
//! process restart between steps strands nothing.

pub mod actions;
pub mod events;

use axum::{Router, http::HeaderMap, routing::post};

use crate::error::AppError;
use crate::slack::SlackError;
use crate::state::AppState;

/// Create the Slack webhook router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/slack/events", post(events::handle_event))
        .route("/slack/actions", post(actions::handle_interaction))
}

/// Verify the Slack signature on an inbound webhook request.
///
/// Missing or malformed signing headers and stale timestamps are server
/// errors; only a genuine signature mismatch is the client's fault.
pub(crate) fn verify_slack_request(
    state: &AppState,
    headers: &HeaderMap,
    body: &str,
) -> Result<(), AppError> {
    let timestamp = headers
        .get("X-Slack-Request-Timestamp")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Internal("Missing timestamp header".into()))?;

    let signature = headers
        .get("X-Slack-Signature")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Internal("Missing signature header".into()))?;

    state
        .slack()
        .verify_signature(timestamp, body, signature)
        .map_err(|e| match e {
            SlackError::InvalidSignature(msg) => AppError::AuthenticationFailed(msg),
            other => AppError::Internal(other.to_string()),
        })?;

    Ok(())
}
