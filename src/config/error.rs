//! Configuration error types.

use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single problem found while validating a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigIssue {
    #[error("Initial state '{state}' is not declared")]
    UnknownInitialState { state: String },

    #[error("State '{state}' is declared more than once")]
    DuplicateState { state: String },

    #[error("Event '{event}' is declared more than once in state '{state}'")]
    DuplicateEvent { state: String, event: String },

    #[error("Transition '{event}' in state '{state}' targets undeclared state '{target}'")]
    UnknownTarget {
        state: String,
        event: String,
        target: String,
    },
}

/// Errors that can occur when loading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration was supplied (absent value, empty or `null` document)
    #[error("Configuration is missing")]
    Missing,

    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to read configuration from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File extension is none of `json`, `yaml`, `yml`
    #[error("Unsupported configuration format: {path}")]
    UnsupportedFormat { path: String },

    /// Every issue found during validation, not just the first
    #[error("Invalid configuration: {}", describe(.0))]
    Invalid(NonEmptyVec<ConfigIssue>),
}

pub(crate) fn describe(issues: &NonEmptyVec<ConfigIssue>) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
