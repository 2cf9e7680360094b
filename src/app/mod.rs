//! Application-level modules for the cascade viewer.
//!
//! Contains centralized state and the coordinator that applies header
//! interactions to it.

mod app_state;
mod coordinator;

pub use app_state::AppState;
pub use coordinator::ApplicationCoordinator;
