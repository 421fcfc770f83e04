//! Interactive component webhook handler.
//!
//! Routes menu selections and button presses by the ID of the block that
//! produced them: the version select menu leads to the confirmation
//! prompt, the confirmation buttons lead to deployment or dismissal.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use tracing::{debug, info, instrument, warn};

use crate::error::AppError;
use crate::services::deploy::{DeployService, DeploymentRequest, is_version_value};
use crate::slack::{
    CONFIRM_DEPLOYMENT_BLOCK_ID, FALLBACK_TEXT, InteractionAction, InteractionPayload,
    SELECT_VERSION_BLOCK_ID, build_confirmation_message,
};
use crate::state::AppState;

use super::verify_slack_request;

/// Handle an interactive component callback.
///
/// The body is form-encoded with a single JSON-valued `payload` field.
/// Only `block_actions` payloads are processed; other interaction types
/// are acknowledged and dropped.
#[instrument(skip(state, headers, body))]
pub async fn handle_interaction(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<impl IntoResponse, AppError> {
    verify_slack_request(&state, &headers, &body)?;

    let payload_str = body
        .strip_prefix("payload=")
        .ok_or_else(|| AppError::MalformedPayload("Missing payload field".into()))?;

    let payload_decoded = urlencoding::decode(payload_str)
        .map_err(|e| AppError::MalformedPayload(format!("Failed to decode payload: {e}")))?;

    let payload: InteractionPayload = serde_json::from_str(&payload_decoded)
        .map_err(|e| AppError::MalformedPayload(format!("Failed to parse payload: {e}")))?;

    if payload.interaction_type != "block_actions" {
        debug!(interaction_type = %payload.interaction_type, "Ignoring interaction type");
        return Ok(StatusCode::OK);
    }

    // Exactly one action is expected per callback in this workflow.
    let action = payload
        .actions
        .first()
        .ok_or_else(|| AppError::BadRequest("No actions in payload".into()))?;

    match action.block_id.as_deref() {
        Some(SELECT_VERSION_BLOCK_ID) => handle_version_selected(&state, &payload, action).await?,
        Some(CONFIRM_DEPLOYMENT_BLOCK_ID) => handle_confirmation(&state, &payload, action).await?,
        other => {
            warn!(block_id = ?other, "Interaction from unknown block");
        }
    }

    Ok(StatusCode::OK)
}

/// Replace the select menu with a confirmation prompt for the chosen
/// version, keeping a single evolving message per interaction.
async fn handle_version_selected(
    state: &AppState,
    payload: &InteractionPayload,
    action: &InteractionAction,
) -> Result<(), AppError> {
    let version = action
        .selected_option
        .as_ref()
        .map(|o| o.value.as_str())
        .ok_or_else(|| {
            AppError::MalformedPayload("Select action without selected option".into())
        })?;

    let response_url = payload
        .response_url
        .as_deref()
        .ok_or_else(|| AppError::MalformedPayload("Interaction without response_url".into()))?;

    info!(%version, "Asking for deployment confirmation");
    state
        .slack()
        .replace_original(
            response_url,
            build_confirmation_message(version),
            Some(FALLBACK_TEXT),
        )
        .await?;

    Ok(())
}

/// Launch the deployment if the button value names a version, then
/// delete the prompt either way so the UI returns to a clean state
/// immediately.
async fn handle_confirmation(
    state: &AppState,
    payload: &InteractionPayload,
    action: &InteractionAction,
) -> Result<(), AppError> {
    let value = action.value.as_deref().unwrap_or_default();

    if is_version_value(value) {
        let channel = payload
            .channel
            .as_ref()
            .ok_or_else(|| AppError::MalformedPayload("Interaction without channel".into()))?;

        let deploy = DeployService::new(state.slack().clone(), state.config().deploy.duration);
        deploy.start(DeploymentRequest {
            version: value.to_string(),
            user_id: payload.user.id.clone(),
            channel_id: channel.id.clone(),
        });
    } else {
        info!(%value, "Deployment denied, dismissing prompt");
    }

    let response_url = payload
        .response_url
        .as_deref()
        .ok_or_else(|| AppError::MalformedPayload("Interaction without response_url".into()))?;

    state.slack().delete_original(response_url).await?;

    Ok(())
}
