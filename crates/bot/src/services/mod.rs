//! Business logic services.
//!
//! # Services
//!
//! - `deploy` - Detached deployment execution with channel progress messages

pub mod deploy;

pub use deploy::{
    DENY_VALUE, DeployService, DeploymentRequest, VERSION_CATALOG, VersionOption, is_version_value,
};
