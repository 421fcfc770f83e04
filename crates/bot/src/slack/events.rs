//! Typed decoding of Slack Events API callbacks.
//!
//! Two envelope shapes arrive on the events endpoint: the one-time URL
//! verification handshake and event callbacks wrapping an inner event.
//! Unrecognized outer or inner types decode to the fallthrough variants;
//! deciding to ignore them is the route handler's job, not a decode
//! error.

use serde::Deserialize;

/// Outer Events API envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventEnvelope {
    /// One-time endpoint ownership handshake.
    UrlVerification { challenge: String },
    /// A subscribed workspace event.
    EventCallback { event: CallbackEvent },
    /// Any other envelope type.
    #[serde(other)]
    Unsupported,
}

/// Inner event of an `event_callback` envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CallbackEvent {
    /// The bot was mentioned in a channel.
    AppMention {
        channel: String,
        user: String,
        text: String,
    },
    /// Any other inner event type.
    #[serde(other)]
    Unsupported,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_url_verification() {
        let envelope: EventEnvelope = serde_json::from_value(json!({
            "token": "Jhj5dZrVaK7ZwHHjRyZWjbDl",
            "type": "url_verification",
            "challenge": "3eZbrw1aBm2rZgRNFdxV2595E9CY3gmdALWMmHkvFXO7tYXAYM8P"
        }))
        .expect("valid handshake");

        match envelope {
            EventEnvelope::UrlVerification { challenge } => {
                assert_eq!(challenge, "3eZbrw1aBm2rZgRNFdxV2595E9CY3gmdALWMmHkvFXO7tYXAYM8P");
            }
            other => panic!("Expected UrlVerification, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_app_mention() {
        let envelope: EventEnvelope = serde_json::from_value(json!({
            "type": "event_callback",
            "team_id": "T061EG9R6",
            "event": {
                "type": "app_mention",
                "user": "U061F7AUR",
                "text": "<@U0LAN0Z89> deploy",
                "ts": "1515449522.000016",
                "channel": "C0LAN2Q65",
                "event_ts": "1515449522000016"
            }
        }))
        .expect("valid callback");

        match envelope {
            EventEnvelope::EventCallback {
                event: CallbackEvent::AppMention { channel, user, text },
            } => {
                assert_eq!(channel, "C0LAN2Q65");
                assert_eq!(user, "U061F7AUR");
                assert_eq!(text, "<@U0LAN0Z89> deploy");
            }
            other => panic!("Expected AppMention, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_inner_event_falls_through() {
        let envelope: EventEnvelope = serde_json::from_value(json!({
            "type": "event_callback",
            "event": {
                "type": "reaction_added",
                "user": "U061F7AUR",
                "reaction": "thumbsup"
            }
        }))
        .expect("valid callback");

        assert!(matches!(
            envelope,
            EventEnvelope::EventCallback {
                event: CallbackEvent::Unsupported
            }
        ));
    }

    #[test]
    fn test_unknown_outer_type_falls_through() {
        let envelope: EventEnvelope = serde_json::from_value(json!({
            "type": "app_rate_limited",
            "minute_rate_limited": 1518467820
        }))
        .expect("decodable envelope");

        assert!(matches!(envelope, EventEnvelope::Unsupported));
    }

    #[test]
    fn test_missing_type_is_an_error() {
        let result: Result<EventEnvelope, _> =
            serde_json::from_value(json!({ "challenge": "abc" }));
        assert!(result.is_err());
    }
}
