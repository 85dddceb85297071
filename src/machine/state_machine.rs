//! Event-driven state machine with linear undo/redo.

use crate::config::{MachineConfig, RedoPolicy};
use crate::core::{Event, Operation, State, StateHistory};
use crate::machine::error::MachineError;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Finite-state machine driven by named events, with undo/redo over the
/// states it has visited.
///
/// The configuration is validated at construction, so the current state is
/// always a declared one. Every mutating method either commits completely or
/// returns an error before touching anything.
///
/// # Example
///
/// ```rust
/// use rewind::StateMachine;
///
/// let mut machine: StateMachine = StateMachine::from_json(
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
/// assert_eq!(machine.trigger(&"turnOn".to_string()).unwrap(), "on");
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "off");
/// assert!(machine.redo());
/// assert_eq!(machine.state(), "on");
/// assert_eq!(machine.states_with_event(&"turnOn".to_string()), [&"off".to_string()]);
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine<S: State = String, E: Event = String> {
    config: MachineConfig<S, E>,
    index: HashMap<S, usize>,
    history: StateHistory<S>,
    last_operation: Operation,
}

impl<S: State, E: Event> StateMachine<S, E> {
    /// Create a machine from a configuration, validating it first.
    pub fn new(config: MachineConfig<S, E>) -> Result<Self, MachineError> {
        let config = config.validated().map_err(|error| {
            warn!(error = %error, "Rejected machine configuration");
            MachineError::from(error)
        })?;

        let index = config
            .states
            .iter()
            .enumerate()
            .map(|(position, (state, _))| (state.clone(), position))
            .collect();

        debug!(
            initial = config.initial.name(),
            states = config.states.len(),
            "State machine created"
        );

        Ok(Self {
            history: StateHistory::new(config.initial.clone()),
            config,
            index,
            last_operation: Operation::None,
        })
    }

    /// Create a machine from a configuration that may be absent.
    pub fn try_from_config(config: Option<MachineConfig<S, E>>) -> Result<Self, MachineError> {
        Self::new(config.ok_or(MachineError::ConfigMissing)?)
    }

    /// Create a machine from a JSON configuration document.
    pub fn from_json(input: &str) -> Result<Self, MachineError> {
        Self::new(MachineConfig::from_json(input)?)
    }

    /// Create a machine from a YAML configuration document.
    pub fn from_yaml(input: &str) -> Result<Self, MachineError> {
        Self::new(MachineConfig::from_yaml(input)?)
    }

    /// Current state (pure)
    pub fn state(&self) -> &S {
        self.history.current()
    }

    /// State the machine starts in and returns to on reset (pure)
    pub fn initial(&self) -> &S {
        &self.config.initial
    }

    /// The configuration this machine was built from (pure)
    pub fn config(&self) -> &MachineConfig<S, E> {
        &self.config
    }

    /// Visit history and redo buffer (pure)
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Kind of the last mutating call (pure)
    pub fn last_operation(&self) -> Operation {
        self.last_operation
    }

    /// Go directly to `target`, bypassing the transition table.
    pub fn change_state(&mut self, target: S) -> Result<(), MachineError> {
        if !self.index.contains_key(&target) {
            debug!(state = target.name(), "Refused change to undeclared state");
            return Err(MachineError::UnknownState {
                state: target.name().to_string(),
            });
        }

        debug!(
            from = self.state().name(),
            to = target.name(),
            "Changing state"
        );

        self.advance(target, Operation::Change);
        Ok(())
    }

    /// Follow the transition for `event` out of the current state.
    ///
    /// Returns the new current state.
    pub fn trigger(&mut self, event: &E) -> Result<&S, MachineError> {
        let current = self.state();
        let target = self
            .index
            .get(current)
            .and_then(|&position| self.config.states[position].1.target(event))
            .cloned()
            .ok_or_else(|| MachineError::NoSuchTransition {
                state: current.name().to_string(),
                event: event.name().to_string(),
            })?;

        debug!(
            from = current.name(),
            to = target.name(),
            event = event.name(),
            "Triggered transition"
        );

        self.advance(target, Operation::Trigger);
        Ok(self.state())
    }

    /// Return to the initial state, forgetting history and redo.
    ///
    /// Returns the new current state.
    pub fn reset(&mut self) -> &S {
        debug!(from = self.state().name(), "Resetting state machine");
        self.restart();
        self.state()
    }

    /// Declared states in declaration order.
    pub fn states(&self) -> Vec<&S> {
        self.config.state_ids().collect()
    }

    /// Declared states that define a transition for `event`, in declaration
    /// order. Unknown events yield an empty list.
    pub fn states_with_event(&self, event: &E) -> Vec<&S> {
        self.config
            .states
            .iter()
            .filter(|(_, definition)| definition.handles(event))
            .map(|(state, _)| state)
            .collect()
    }

    /// Whether `undo` would succeed (pure)
    pub fn can_undo(&self) -> bool {
        self.history.can_step_back()
    }

    /// Whether `redo` would succeed (pure)
    pub fn can_redo(&self) -> bool {
        self.last_operation.allows_redo() && self.history.can_step_forward()
    }

    /// Step back to the previously visited state.
    ///
    /// Returns `false` without changing anything when there is nothing to
    /// go back to.
    pub fn undo(&mut self) -> bool {
        let from = self.state().clone();
        match self.history.step_back() {
            Some(to) => {
                debug!(from = from.name(), to = to.name(), "Undo");
                self.last_operation = Operation::Undo;
                true
            }
            None => {
                debug!(state = from.name(), "Nothing to undo");
                false
            }
        }
    }

    /// Replay the most recently undone state.
    ///
    /// Only available right after an undo, or after a redo that itself
    /// followed one. Returns `false` without changing anything otherwise.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            debug!(
                state = self.state().name(),
                last_operation = %self.last_operation,
                "Nothing to redo"
            );
            return false;
        }

        let from = self.state().clone();
        match self.history.step_forward() {
            Some(to) => {
                debug!(from = from.name(), to = to.name(), "Redo");
                self.last_operation = Operation::Redo;
                true
            }
            None => false,
        }
    }

    /// Return to the initial state and drop all recorded visits.
    ///
    /// The history afterwards holds only the initial state, exactly as after
    /// [`StateMachine::reset`].
    pub fn clear_history(&mut self) {
        debug!(
            visits = self.history.len(),
            "Clearing state machine history"
        );
        self.restart();
    }

    fn advance(&mut self, target: S, operation: Operation) {
        if self.config.redo_policy == RedoPolicy::ClearOnForward {
            self.history.clear_redo();
        }
        self.history.record(target);
        self.last_operation = operation;
    }

    fn restart(&mut self) {
        self.history.restart(self.config.initial.clone());
        self.last_operation = Operation::None;
    }
}

impl<S: State, E: Event> TryFrom<MachineConfig<S, E>> for StateMachine<S, E> {
    type Error = MachineError;

    fn try_from(config: MachineConfig<S, E>) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}
