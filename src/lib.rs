//! Rewind: a configurable finite-state machine with undo/redo
//!
//! A machine is built once from a transition table and then driven by named
//! events or direct state assignment. Every visited state is recorded, so the
//! machine can step back through its history and replay undone steps.
//!
//! # Core Concepts
//!
//! - **State / Event**: Opaque identifiers via the `State` and `Event` traits
//! - **Configuration**: Validated transition table, loaded from JSON, YAML or a builder
//! - **History**: Linear record of visits with a redo buffer
//!
//! # Example
//!
//! ```rust
//! use rewind::StateMachine;
//!
//! let mut machine: StateMachine = StateMachine::from_json(
//!     r#"{
//!         "initial": "off",
//!         "states": {
//!             "off": { "transitions": { "turnOn": "on" } },
//!             "on": { "transitions": { "turnOff": "off" } }
//!         }
//!     }"#,
//! )
//! .unwrap();
//!
//! machine.trigger(&"turnOn".to_string()).unwrap();
//! assert_eq!(machine.state(), "on");
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "off");
//!
//! assert!(machine.redo());
//! assert_eq!(machine.state(), "on");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder, StateBuilder};
pub use config::{ConfigError, ConfigIssue, MachineConfig, RedoPolicy, StateDefinition};
pub use crate::core::{Event, Operation, State, StateHistory, Visit};
pub use machine::{MachineError, StateMachine};
