//! Errors raised by state machine operations.

use crate::config::error::describe;
use crate::config::{ConfigError, ConfigIssue};
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Errors that can occur when constructing or driving a machine
#[derive(Debug, Error)]
pub enum MachineError {
    #[error("Configuration is missing")]
    ConfigMissing,

    #[error("Invalid configuration: {}", describe(.0))]
    InvalidConfig(NonEmptyVec<ConfigIssue>),

    /// The configuration could not be read or parsed
    #[error(transparent)]
    Config(ConfigError),

    #[error("State '{state}' doesn't exist")]
    UnknownState { state: String },

    #[error("Event '{event}' is not defined for state '{state}'")]
    NoSuchTransition { state: String, event: String },
}

impl From<ConfigError> for MachineError {
    fn from(error: ConfigError) -> Self {
        match error {
            ConfigError::Missing => Self::ConfigMissing,
            ConfigError::Invalid(issues) => Self::InvalidConfig(issues),
            other => Self::Config(other),
        }
    }
}
