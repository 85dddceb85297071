//! Linear visit history with a redo buffer.
//!
//! The history always holds at least one visit: the state the machine was
//! started (or restarted) in. Stepping back moves the newest visit into the
//! redo buffer; stepping forward replays the most recently undone state.

use super::state::State;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Record of a single visit to a state.
#[derive(Clone, Debug, PartialEq)]
pub struct Visit<S: State> {
    /// The state that was entered
    pub state: S,
    /// When the state was entered
    pub timestamp: DateTime<Utc>,
}

impl<S: State> Visit<S> {
    /// Record a visit to `state` happening now.
    pub fn now(state: S) -> Self {
        Self {
            state,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of visited states plus the redo buffer.
///
/// # Example
///
/// ```rust
/// use rewind::core::StateHistory;
///
/// let mut history = StateHistory::new("off".to_string());
/// history.record("on".to_string());
/// assert_eq!(history.current(), "on");
///
/// assert_eq!(history.step_back().map(String::as_str), Some("off"));
/// assert_eq!(history.redo_buffer(), ["on".to_string()]);
///
/// assert_eq!(history.step_forward().map(String::as_str), Some("on"));
/// assert_eq!(history.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct StateHistory<S: State> {
    root: Visit<S>,
    visits: Vec<Visit<S>>,
    redo: Vec<S>,
}

impl<S: State> StateHistory<S> {
    /// Create a history seeded with a single visit to `initial`.
    pub fn new(initial: S) -> Self {
        Self {
            root: Visit::now(initial),
            visits: Vec::new(),
            redo: Vec::new(),
        }
    }

    /// The newest visited state.
    pub fn current(&self) -> &S {
        &self.visits.last().unwrap_or(&self.root).state
    }

    /// Append a visit to `state`.
    ///
    /// The redo buffer is left untouched; callers decide whether a forward
    /// move invalidates it.
    pub fn record(&mut self, state: S) {
        self.visits.push(Visit::now(state));
    }

    /// Move the newest visit into the redo buffer.
    ///
    /// Returns the state that is current afterwards, or `None` when only the
    /// seed visit remains.
    pub fn step_back(&mut self) -> Option<&S> {
        let undone = self.visits.pop()?;
        self.redo.push(undone.state);
        Some(self.current())
    }

    /// Replay the most recently undone state.
    ///
    /// Returns the state that is current afterwards, or `None` when the redo
    /// buffer is empty.
    pub fn step_forward(&mut self) -> Option<&S> {
        let state = self.redo.pop()?;
        self.visits.push(Visit::now(state));
        Some(self.current())
    }

    /// Drop every state waiting in the redo buffer.
    pub fn clear_redo(&mut self) {
        self.redo.clear();
    }

    /// Discard all visits and the redo buffer, reseeding with `initial`.
    pub fn restart(&mut self, initial: S) {
        self.root = Visit::now(initial);
        self.visits.clear();
        self.redo.clear();
    }

    /// Whether there is an earlier visit to step back to.
    pub fn can_step_back(&self) -> bool {
        !self.visits.is_empty()
    }

    /// Whether the redo buffer holds anything.
    pub fn can_step_forward(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of recorded visits, including the seed. Never zero.
    pub fn len(&self) -> usize {
        self.visits.len() + 1
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All visits, oldest first.
    pub fn visits(&self) -> impl Iterator<Item = &Visit<S>> {
        std::iter::once(&self.root).chain(self.visits.iter())
    }

    /// The path of visited states, oldest first.
    pub fn get_path(&self) -> Vec<&S> {
        self.visits().map(|visit| &visit.state).collect()
    }

    /// States available for redo, most recently undone last.
    pub fn redo_buffer(&self) -> &[S] {
        &self.redo
    }

    /// Time elapsed between the oldest and the newest visit.
    pub fn duration(&self) -> Duration {
        let last = self.visits.last().unwrap_or(&self.root);
        last.timestamp
            .signed_duration_since(self.root.timestamp)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }
}
