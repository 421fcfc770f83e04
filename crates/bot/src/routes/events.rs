//! Events API webhook handler.
//!
//! Answers the URL verification handshake and dispatches `app_mention`
//! commands; every other event type is acknowledged and dropped.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, info, instrument};

use crate::error::AppError;
use crate::slack::{CallbackEvent, EventEnvelope, FALLBACK_TEXT, build_version_select_message};
use crate::state::AppState;

use super::verify_slack_request;

/// Handle an Events API callback.
///
/// Responds with the literal challenge token for handshake requests and
/// an empty 200 for everything that is acknowledged without action.
#[instrument(skip(state, headers, body))]
pub async fn handle_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<Response, AppError> {
    verify_slack_request(&state, &headers, &body)?;

    let envelope: EventEnvelope = serde_json::from_str(&body)
        .map_err(|e| AppError::MalformedPayload(format!("Failed to parse event: {e}")))?;

    match envelope {
        EventEnvelope::UrlVerification { challenge } => {
            debug!("Answering URL verification handshake");
            Ok(challenge.into_response())
        }
        EventEnvelope::EventCallback { event } => match event {
            CallbackEvent::AppMention {
                channel,
                user,
                text,
            } => {
                handle_mention(&state, &channel, &user, &text).await?;
                Ok(StatusCode::OK.into_response())
            }
            CallbackEvent::Unsupported => Ok(StatusCode::OK.into_response()),
        },
        EventEnvelope::Unsupported => Ok(StatusCode::OK.into_response()),
    }
}

/// Dispatch a mention to its command handler.
///
/// The first token of the text is the mention itself; the second is the
/// command name. Unrecognized commands are acknowledged without a reply.
async fn handle_mention(
    state: &AppState,
    channel: &str,
    user: &str,
    text: &str,
) -> Result<(), AppError> {
    let mut tokens = text.split_whitespace();
    let _mention = tokens.next();
    let Some(command) = tokens.next() else {
        return Err(AppError::BadRequest("Mention carries no command".into()));
    };

    match command {
        "deploy" => {
            info!(%channel, %user, "Sending version select menu");
            state
                .slack()
                .post_ephemeral(
                    channel,
                    user,
                    build_version_select_message(),
                    Some(FALLBACK_TEXT),
                )
                .await?;
            Ok(())
        }
        other => {
            debug!(command = %other, "Ignoring unrecognized command");
            Ok(())
        }
    }
}
