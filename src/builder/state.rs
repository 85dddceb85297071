//! Builder for a single state definition.

use crate::config::StateDefinition;
use crate::core::{Event, State};

/// Builder for one state and its outgoing transitions.
pub struct StateBuilder<S: State, E: Event> {
    id: S,
    transitions: Vec<(E, S)>,
}

impl<S: State, E: Event> StateBuilder<S, E> {
    /// Start declaring the state `id`.
    pub fn new(id: impl Into<S>) -> Self {
        Self {
            id: id.into(),
            transitions: Vec::new(),
        }
    }

    /// Add a transition: `event` in this state leads to `target`.
    pub fn on(mut self, event: impl Into<E>, target: impl Into<S>) -> Self {
        self.transitions.push((event.into(), target.into()));
        self
    }

    /// Finish the declaration.
    pub fn build(self) -> (S, StateDefinition<S, E>) {
        (
            self.id,
            StateDefinition {
                transitions: self.transitions,
            },
        )
    }
}
