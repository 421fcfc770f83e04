//! Slack integration for the deployment approval flow.
//!
//! This module provides:
//! - [`SlackClient`] for sending, replacing, and deleting messages
//! - Block Kit types for building interactive messages
//! - Typed decoding of Events API callbacks and interaction payloads
//! - Message builders for the select and confirm prompts
//! - Webhook signature verification
//!
//! # Flow
//!
//! 1. A user mentions the bot with the `deploy` command
//! 2. The bot sends an ephemeral version select menu
//! 3. Selecting a version replaces the menu with a confirmation prompt
//! 4. Confirming launches the deployment and deletes the prompt
//! 5. Start and completion messages are posted to the channel

mod client;
mod error;
mod events;
mod messages;
mod types;

pub use client::{SLACK_API_BASE, SlackClient};
pub use error::SlackError;
pub use events::{CallbackEvent, EventEnvelope};
pub use messages::{
    CONFIRM_DEPLOYMENT_BLOCK_ID, FALLBACK_TEXT, SELECT_VERSION_BLOCK_ID,
    build_confirmation_message, build_version_select_message,
};
pub use types::{
    ActionElement, Block, ButtonStyle, InteractionAction, InteractionChannel, InteractionPayload,
    InteractionUser, PlainText, PostEphemeralResponse, PostMessageResponse, SelectOption,
    SelectedOption, SlackMessage, Text,
};
