//! Shared types and constants
//!
//! This module contains the error types and constants used throughout
//! the hashing core.

pub mod constants;
pub mod error;

// Re-export shared components
pub use constants::*;
pub use error::*;
