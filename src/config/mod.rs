//! Machine configuration: the transition table and its loaders.
//!
//! A configuration is parsed once, validated once, and never changes for the
//! lifetime of the machine built from it. The document shape is
//!
//! ```json
//! {
//!   "initial": "off",
//!   "states": {
//!     "off": { "transitions": { "turnOn": "on" } },
//!     "on":  { "transitions": { "turnOff": "off" } }
//!   }
//! }
//! ```
//!
//! with an optional `"redo_policy"` of `"clear_on_forward"` (default) or
//! `"preserve"`. Key order in `states` and `transitions` is preserved.

pub mod error;
mod ordered;
mod validate;

pub use error::{ConfigError, ConfigIssue};

use crate::core::{Event, State};
use serde::{Deserialize, Serialize};
use std::path::Path;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Whether forward moves invalidate the redo buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedoPolicy {
    /// `change_state` and `trigger` drop every state waiting for redo.
    #[default]
    ClearOnForward,

    /// Forward moves keep the redo buffer. A later undo makes the stale
    /// entries replayable again.
    Preserve,
}

/// Outgoing transitions of one state, in declaration order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "", deny_unknown_fields)]
pub struct StateDefinition<S: State, E: Event> {
    /// Event → target state
    #[serde(default, with = "ordered")]
    pub transitions: Vec<(E, S)>,
}

impl<S: State, E: Event> Default for StateDefinition<S, E> {
    fn default() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }
}

impl<S: State, E: Event> StateDefinition<S, E> {
    /// Target of `event`, if this state defines it.
    pub fn target(&self, event: &E) -> Option<&S> {
        self.transitions
            .iter()
            .find(|(candidate, _)| candidate == event)
            .map(|(_, target)| target)
    }

    /// Whether this state defines a transition for `event`.
    pub fn handles(&self, event: &E) -> bool {
        self.target(event).is_some()
    }
}

/// Complete machine configuration.
///
/// # Example
///
/// ```rust
/// use rewind::config::MachineConfig;
///
/// let config: MachineConfig = MachineConfig::from_json(
///     r#"{
///         "initial": "off",
///         "states": {
///             "off": { "transitions": { "turnOn": "on" } },
///             "on": { "transitions": { "turnOff": "off" } }
///         }
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.initial, "off");
/// assert_eq!(config.state_ids().collect::<Vec<_>>(), ["off", "on"]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "", deny_unknown_fields)]
pub struct MachineConfig<S: State = String, E: Event = String> {
    /// State the machine starts in and returns to on reset
    pub initial: S,

    /// Declared states in declaration order
    #[serde(with = "ordered")]
    pub states: Vec<(S, StateDefinition<S, E>)>,

    #[serde(default)]
    pub redo_policy: RedoPolicy,
}

impl<S: State, E: Event> MachineConfig<S, E> {
    /// Parse a configuration from a JSON document.
    ///
    /// An empty document or a literal `null` is reported as
    /// [`ConfigError::Missing`]. The result is not validated yet.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        if input.trim().is_empty() {
            return Err(ConfigError::Missing);
        }
        serde_json::from_str::<Option<Self>>(input)?.ok_or(ConfigError::Missing)
    }

    /// Parse a configuration from a YAML document.
    ///
    /// Same rules as [`MachineConfig::from_json`].
    pub fn from_yaml(input: &str) -> Result<Self, ConfigError> {
        if input.trim().is_empty() {
            return Err(ConfigError::Missing);
        }
        serde_yaml::from_str::<Option<Self>>(input)?.ok_or(ConfigError::Missing)
    }

    /// Read a configuration file, choosing the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let shown = path.display().to_string();

        debug!(path = %shown, "Loading machine configuration");

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, ConfigError> = match extension.as_deref() {
            Some("json") => Self::from_json,
            Some("yaml" | "yml") => Self::from_yaml,
            _ => return Err(ConfigError::UnsupportedFormat { path: shown }),
        };

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: shown,
            source,
        })?;

        parse(&contents)
    }

    /// Check the configuration, collecting every issue.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigIssue>> {
        validate::validate(self)
    }

    /// Validate and hand the configuration back, or fail with all issues.
    pub fn validated(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(issues) => Err(ConfigError::Invalid(issues)),
        }
    }

    /// Declared state identifiers in declaration order.
    pub fn state_ids(&self) -> impl Iterator<Item = &S> {
        self.states.iter().map(|(state, _)| state)
    }

    /// Definition of `state`, if declared.
    pub fn definition(&self, state: &S) -> Option<&StateDefinition<S, E>> {
        self.states
            .iter()
            .find(|(candidate, _)| candidate == state)
            .map(|(_, definition)| definition)
    }
}
