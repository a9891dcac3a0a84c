//! Application module
//!
//! This module re-exports the main application type from the frontend module.

pub use crate::frontend::SuperhetApp;

// Re-export commonly used types for convenience
pub use crate::frontend::{AppAction, ReceiverState};
