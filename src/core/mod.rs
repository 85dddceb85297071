//! Core state machine types.
//!
//! This module contains the building blocks the machine is assembled from:
//! - State and event identifiers via the `State` and `Event` traits
//! - The visit history with its redo buffer
//! - The tag of the last mutating operation

mod history;
mod operation;
mod state;

pub use history::{StateHistory, Visit};
pub use operation::Operation;
pub use state::{Event, State};
