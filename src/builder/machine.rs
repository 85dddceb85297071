//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::config::{MachineConfig, RedoPolicy, StateDefinition};
use crate::core::{Event, State};
use crate::machine::StateMachine;

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```
/// use rewind::builder::{MachineBuilder, StateBuilder};
///
/// let mut machine = MachineBuilder::<String, String>::new()
///     .initial("off")
///     .state(StateBuilder::new("off").on("turnOn", "on"))
///     .state(StateBuilder::new("on").on("turnOff", "off"))
///     .build()
///     .unwrap();
///
/// machine.trigger(&"turnOn".to_string()).unwrap();
/// assert_eq!(machine.state(), "on");
/// ```
pub struct MachineBuilder<S: State, E: Event> {
    initial: Option<S>,
    states: Vec<(S, StateDefinition<S, E>)>,
    redo_policy: RedoPolicy,
}

impl<S: State, E: Event> MachineBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
            redo_policy: RedoPolicy::default(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<S>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state. Declaration order is kept.
    pub fn state(mut self, builder: StateBuilder<S, E>) -> Self {
        self.states.push(builder.build());
        self
    }

    /// Declare multiple states at once.
    pub fn states(mut self, builders: Vec<StateBuilder<S, E>>) -> Self {
        self.states
            .extend(builders.into_iter().map(StateBuilder::build));
        self
    }

    /// Choose whether forward moves invalidate redo.
    pub fn redo_policy(mut self, policy: RedoPolicy) -> Self {
        self.redo_policy = policy;
        self
    }

    /// Produce the configuration without building a machine.
    /// The configuration is not validated.
    pub fn config(self) -> Result<MachineConfig<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        Ok(MachineConfig {
            initial,
            states: self.states,
            redo_policy: self.redo_policy,
        })
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing or the
    /// configuration does not validate.
    pub fn build(self) -> Result<StateMachine<S, E>, BuildError> {
        let config = self.config()?;
        Ok(StateMachine::new(config)?)
    }
}

impl<S: State, E: Event> Default for MachineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
