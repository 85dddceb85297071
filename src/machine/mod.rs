//! The state machine and its errors.
//!
//! All operations are synchronous, in-memory mutations on a single value.
//! Exclusive access is enforced by `&mut self`; callers sharing a machine
//! across threads wrap it themselves.

mod error;
mod state_machine;

pub use error::MachineError;
pub use state_machine::StateMachine;
