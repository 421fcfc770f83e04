//! Slack Block Kit types for building interactive messages.
//!
//! These types represent the subset of the Slack Block Kit specification
//! needed for the version select menu and the confirmation prompt, plus
//! the payload types Slack sends back when a user acts on them.
//!
//! See: <https://api.slack.com/block-kit>

use serde::{Deserialize, Serialize};

/// A Slack message with blocks.
#[derive(Debug, Clone, Serialize)]
pub struct SlackMessage {
    /// Channel ID to post to.
    pub channel: String,
    /// Message blocks.
    pub blocks: Vec<Block>,
    /// Optional plain text fallback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Block Kit block types.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Section block with text.
    Section { text: Text },
    /// Actions block with interactive elements.
    ///
    /// The block ID is echoed back in interaction payloads and is the
    /// routing key for the workflow step that produced the block.
    Actions {
        #[serde(skip_serializing_if = "Option::is_none")]
        block_id: Option<String>,
        elements: Vec<ActionElement>,
    },
}

/// Text object types.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Text {
    /// Plain text (no formatting).
    PlainText { text: String, emoji: bool },
    /// Markdown text (supports formatting).
    Mrkdwn { text: String },
}

impl Text {
    /// Create a plain text object.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText {
            text: text.into(),
            emoji: true,
        }
    }

    /// Create a markdown text object.
    #[must_use]
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self::Mrkdwn { text: text.into() }
    }
}

/// Plain text object (for button labels and menu placeholders).
#[derive(Debug, Clone, Serialize)]
pub struct PlainText {
    #[serde(rename = "type")]
    pub text_type: &'static str,
    pub text: String,
    pub emoji: bool,
}

impl PlainText {
    /// Create a new plain text object.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text_type: "plain_text",
            text: text.into(),
            emoji: true,
        }
    }
}

/// Action block elements.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionElement {
    /// Interactive button.
    Button {
        text: PlainText,
        value: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        style: Option<ButtonStyle>,
    },
    /// Single-select menu with a static option list.
    StaticSelect {
        placeholder: PlainText,
        options: Vec<SelectOption>,
    },
}

/// An entry in a static select menu.
#[derive(Debug, Clone, Serialize)]
pub struct SelectOption {
    pub text: PlainText,
    pub value: String,
}

/// Button style (affects color).
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    /// Green primary button.
    Primary,
    /// Red danger button.
    Danger,
}

// =============================================================================
// Response Types
// =============================================================================

/// Response from posting a channel message.
#[derive(Debug, Clone, Deserialize)]
pub struct PostMessageResponse {
    /// Whether the request was successful.
    pub ok: bool,
    /// Channel ID where the message was posted.
    #[serde(default)]
    pub channel: Option<String>,
    /// Message timestamp (unique ID).
    #[serde(default)]
    pub ts: Option<String>,
    /// Error message if not ok.
    #[serde(default)]
    pub error: Option<String>,
}

/// Response from posting an ephemeral message.
#[derive(Debug, Clone, Deserialize)]
pub struct PostEphemeralResponse {
    /// Whether the request was successful.
    pub ok: bool,
    /// Timestamp of the ephemeral message.
    #[serde(default)]
    pub message_ts: Option<String>,
    /// Error message if not ok.
    #[serde(default)]
    pub error: Option<String>,
}

// =============================================================================
// Interaction Payloads
// =============================================================================

/// Slack interaction payload from menu selections and button presses.
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionPayload {
    /// Type of interaction (only `block_actions` is handled).
    #[serde(rename = "type")]
    pub interaction_type: String,
    /// User who triggered the interaction.
    pub user: InteractionUser,
    /// Channel where the interaction occurred.
    #[serde(default)]
    pub channel: Option<InteractionChannel>,
    /// Actions that were triggered.
    #[serde(default)]
    pub actions: Vec<InteractionAction>,
    /// Capability URL for replacing or deleting the original message.
    #[serde(default)]
    pub response_url: Option<String>,
}

/// User who triggered an interaction.
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionUser {
    /// Slack user ID.
    pub id: String,
    /// Username.
    #[serde(default)]
    pub username: Option<String>,
}

/// Channel where an interaction occurred.
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionChannel {
    /// Channel ID.
    pub id: String,
    /// Channel name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Action that was triggered.
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionAction {
    /// Block ID containing this action.
    #[serde(default)]
    pub block_id: Option<String>,
    /// Value attached to a button.
    #[serde(default)]
    pub value: Option<String>,
    /// Option chosen in a select menu.
    #[serde(default)]
    pub selected_option: Option<SelectedOption>,
    /// Action type (e.g., `button`, `static_select`).
    #[serde(rename = "type")]
    pub action_type: String,
}

/// Option chosen in a select menu.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectedOption {
    /// The option's value.
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_actions_block_serializes_block_id() {
        let block = Block::Actions {
            block_id: Some("select-version".to_string()),
            elements: vec![ActionElement::StaticSelect {
                placeholder: PlainText::new("Select version"),
                options: vec![SelectOption {
                    text: PlainText::new("v1.0.0"),
                    value: "v1.0.0".to_string(),
                }],
            }],
        };

        let value = serde_json::to_value(&block).expect("serializable block");
        assert_eq!(value["type"], "actions");
        assert_eq!(value["block_id"], "select-version");
        assert_eq!(value["elements"][0]["type"], "static_select");
        assert_eq!(value["elements"][0]["options"][0]["value"], "v1.0.0");
    }

    #[test]
    fn test_button_styles_serialize_lowercase() {
        let button = ActionElement::Button {
            text: PlainText::new("Do it"),
            value: "v1.1.0".to_string(),
            style: Some(ButtonStyle::Primary),
        };

        let value = serde_json::to_value(&button).expect("serializable button");
        assert_eq!(value["type"], "button");
        assert_eq!(value["style"], "primary");
        assert_eq!(value["value"], "v1.1.0");
    }

    #[test]
    fn test_interaction_payload_deserializes_select_action() {
        let payload: InteractionPayload = serde_json::from_value(json!({
            "type": "block_actions",
            "user": { "id": "U061F7AUR", "username": "deployer" },
            "channel": { "id": "C024BE91L", "name": "releases" },
            "response_url": "https://hooks.slack.com/actions/T0/1/abc",
            "actions": [{
                "type": "static_select",
                "block_id": "select-version",
                "selected_option": { "value": "v1.1.0" }
            }]
        }))
        .expect("valid payload");

        assert_eq!(payload.interaction_type, "block_actions");
        assert_eq!(payload.user.id, "U061F7AUR");
        let action = payload.actions.first().expect("one action");
        assert_eq!(action.block_id.as_deref(), Some("select-version"));
        assert_eq!(
            action.selected_option.as_ref().map(|o| o.value.as_str()),
            Some("v1.1.0")
        );
    }

    #[test]
    fn test_interaction_payload_tolerates_missing_optionals() {
        let payload: InteractionPayload = serde_json::from_value(json!({
            "type": "block_actions",
            "user": { "id": "U061F7AUR" }
        }))
        .expect("valid payload");

        assert!(payload.actions.is_empty());
        assert!(payload.channel.is_none());
        assert!(payload.response_url.is_none());
    }
}
