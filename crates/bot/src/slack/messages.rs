//! Slack message builders for the deployment approval flow.
//!
//! Provides factory functions for building Block Kit messages for:
//! - The ephemeral version select menu
//! - The deploy/deny confirmation prompt

use crate::services::deploy::{DENY_VALUE, VERSION_CATALOG};

use super::types::{ActionElement, Block, ButtonStyle, PlainText, SelectOption, Text};

/// Block ID of the version select menu. Interactions carrying it route
/// to the confirmation step.
pub const SELECT_VERSION_BLOCK_ID: &str = "select-version";

/// Block ID of the confirmation buttons. Interactions carrying it route
/// to deployment execution.
pub const CONFIRM_DEPLOYMENT_BLOCK_ID: &str = "confirm-deployment";

/// Fallback text for clients that cannot render blocks.
pub const FALLBACK_TEXT: &str = "This client is not supported.";

/// Build the version select menu.
///
/// Lists the configured versions in catalog order in a single-select
/// menu. Sent as an ephemeral message so only the requesting user sees
/// it.
#[must_use]
pub fn build_version_select_message() -> Vec<Block> {
    let options = VERSION_CATALOG
        .iter()
        .map(|version| SelectOption {
            text: PlainText::new(version.label),
            value: version.value.to_string(),
        })
        .collect();

    vec![
        Block::Section {
            text: Text::mrkdwn("Please select *version*."),
        },
        Block::Actions {
            block_id: Some(SELECT_VERSION_BLOCK_ID.to_string()),
            elements: vec![ActionElement::StaticSelect {
                placeholder: PlainText::new("Select version"),
                options,
            }],
        },
    ]
}

/// Build the confirmation prompt for a selected version (replaces the
/// select menu in place).
///
/// The confirm button carries the version string as its value; the deny
/// button carries the deny sentinel.
#[must_use]
pub fn build_confirmation_message(version: &str) -> Vec<Block> {
    vec![
        Block::Section {
            text: Text::mrkdwn(format!("Could I deploy `{version}`?")),
        },
        Block::Actions {
            block_id: Some(CONFIRM_DEPLOYMENT_BLOCK_ID.to_string()),
            elements: vec![
                ActionElement::Button {
                    text: PlainText::new("Do it"),
                    value: version.to_string(),
                    style: Some(ButtonStyle::Primary),
                },
                ActionElement::Button {
                    text: PlainText::new("Stop"),
                    value: DENY_VALUE.to_string(),
                    style: Some(ButtonStyle::Danger),
                },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::deploy::is_version_value;

    #[test]
    fn test_select_menu_lists_catalog_in_order() {
        let blocks = build_version_select_message();
        assert_eq!(blocks.len(), 2);

        let Some(Block::Actions { block_id, elements }) = blocks.get(1) else {
            panic!("Expected Actions block");
        };
        assert_eq!(block_id.as_deref(), Some(SELECT_VERSION_BLOCK_ID));

        let Some(ActionElement::StaticSelect { options, .. }) = elements.first() else {
            panic!("Expected StaticSelect element");
        };

        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        let catalog: Vec<&str> = VERSION_CATALOG.iter().map(|v| v.value).collect();
        assert_eq!(values, catalog);
    }

    #[test]
    fn test_confirmation_embeds_version_verbatim() {
        let blocks = build_confirmation_message("v1.1.0");

        let Some(Block::Section {
            text: Text::Mrkdwn { text },
        }) = blocks.first()
        else {
            panic!("Expected Section block");
        };
        assert_eq!(text, "Could I deploy `v1.1.0`?");
    }

    #[test]
    fn test_confirm_button_round_trips_every_catalog_version() {
        for version in VERSION_CATALOG {
            let blocks = build_confirmation_message(version.value);

            let Some(Block::Actions { block_id, elements }) = blocks.get(1) else {
                panic!("Expected Actions block");
            };
            assert_eq!(block_id.as_deref(), Some(CONFIRM_DEPLOYMENT_BLOCK_ID));

            let Some(ActionElement::Button { value, style, .. }) = elements.first() else {
                panic!("Expected confirm button");
            };
            assert_eq!(value, version.value);
            assert!(matches!(style, Some(ButtonStyle::Primary)));
        }
    }

    #[test]
    fn test_deny_button_carries_sentinel() {
        let blocks = build_confirmation_message("v1.0.0");

        let Some(Block::Actions { elements, .. }) = blocks.get(1) else {
            panic!("Expected Actions block");
        };
        let Some(ActionElement::Button { value, style, .. }) = elements.get(1) else {
            panic!("Expected deny button");
        };

        assert_eq!(value, DENY_VALUE);
        assert!(matches!(style, Some(ButtonStyle::Danger)));
        assert!(!is_version_value(value));
    }
}
