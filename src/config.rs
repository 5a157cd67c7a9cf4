//! Configuration module for rundown
//!
//! This module provides configuration constants, default values, and configuration types
//! for the rundown schedule conversion and viewing application.

mod constants;
mod types;

// Re-export all constants and types
pub use constants::*;
pub use types::*;
