//! Constants for the hashing core
//!
//! This module contains constants used throughout the hashing core.

// Allocation limits
// Length-like parameters above these limits are rejected before any buffer
// is allocated. Legitimate parameterizations sit far below them.
pub const MAX_SALT_LENGTH: usize = 1024;
pub const MAX_OUTPUT_LENGTH: usize = 1024;

// Canonical algorithm tags
pub const DEFAULT_ALGORITHM: &str = "Argon2";
pub const ALGORITHM_TAGS: &[&str] = &[
    "Plain Hash",
    "Plain Hash+Salt",
    "HMAC",
    "PBKDF2",
    "BCrypt",
    "SCrypt",
    "Argon2",
];
