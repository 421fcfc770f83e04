//! Deployment execution service.
//!
//! Deployments run detached from the triggering webhook request: the
//! handler schedules the work and responds to Slack immediately, while
//! the spawned task posts start and completion messages to the
//! originating channel. The task has no cancellation hook and no result
//! channel; its outcome is observable only through those messages and
//! the logs.

use std::time::Duration;

use tracing::{error, info, instrument};

use crate::slack::SlackClient;

/// A selectable deployment target.
#[derive(Debug, Clone, Copy)]
pub struct VersionOption {
    /// Value round-tripped through the select menu and the confirm button.
    pub value: &'static str,
    /// Label shown in the menu.
    pub label: &'static str,
}

/// Deployable versions, in menu order.
pub const VERSION_CATALOG: &[VersionOption] = &[
    VersionOption {
        value: "v1.0.0",
        label: "v1.0.0",
    },
    VersionOption {
        value: "v1.1.0",
        label: "v1.1.0",
    },
    VersionOption {
        value: "v1.1.1",
        label: "v1.1.1",
    },
];

/// Button value that cancels a pending confirmation.
pub const DENY_VALUE: &str = "deny";

/// Whether a confirm-button value names a version rather than the deny
/// sentinel.
///
/// Versions are recognized by their `v` prefix only; a future sentinel
/// or version that collides in prefix would be misrouted.
#[must_use]
pub fn is_version_value(value: &str) -> bool {
    value.starts_with('v')
}

/// A confirmed deployment, carrying owned copies of everything the
/// detached task needs.
#[derive(Debug, Clone)]
pub struct DeploymentRequest {
    /// Version to deploy.
    pub version: String,
    /// User who confirmed the deployment.
    pub user_id: String,
    /// Channel the confirmation came from; progress is posted there.
    pub channel_id: String,
}

/// Deployment service posting progress to the originating channel.
pub struct DeployService {
    slack: SlackClient,
    duration: Duration,
}

impl DeployService {
    /// Create a new deployment service.
    #[must_use]
    pub const fn new(slack: SlackClient, duration: Duration) -> Self {
        Self { slack, duration }
    }

    /// Schedule a deployment on a detached task and return immediately.
    pub fn start(&self, request: DeploymentRequest) {
        let slack = self.slack.clone();
        let duration = self.duration;

        info!(
            version = %request.version,
            user = %request.user_id,
            "Scheduling deployment"
        );

        tokio::spawn(async move {
            let start_text = format!(
                "<@{}> OK, I will deploy `{}`.",
                request.user_id, request.version
            );
            if let Err(e) = slack.post_text(&request.channel_id, &start_text).await {
                error!(error = %e, "Failed to post deployment start message");
            }

            execute(&request.version, duration).await;

            let done_text = format!("`{}` deployment completed!", request.version);
            if let Err(e) = slack.post_text(&request.channel_id, &done_text).await {
                error!(error = %e, "Failed to post deployment completion message");
            }
        });
    }
}

/// Run the deployment itself.
///
/// Stands in for an external rollout: takes non-trivial wall-clock time
/// and reports nothing back.
#[instrument]
async fn execute(version: &str, duration: Duration) {
    info!(%version, "deploy");
    tokio::time::sleep(duration).await;
}
