//! State engine
//!
//! Contains the core state architecture:
//! - Actions: What can happen
//! - State: What is true right now
//! - Reducer: Pure function (State, Action) -> State
//!
//! Every mutation of users, words or the selected user goes through
//! [`reduce`]; snapshots are plain values that can be kept around and
//! compared without defensive copies.

pub mod actions;
pub mod reducer;
pub mod state;

pub use actions::Action;
pub use reducer::reduce;
pub use state::AppState;
