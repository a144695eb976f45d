//! Error handling for the hashing core
//!
//! This module defines the error types used throughout the hashing core.

use thiserror::Error;

/// Hashing error type
#[derive(Error, Debug, Clone)]
pub enum HashError {
    #[error("Invalid hash format: {0}")]
    InvalidHashFormat(String),

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Invalid digest algorithm: {0}")]
    InvalidDigestAlgorithm(String),

    #[error("Primitive failure: {0}")]
    PrimitiveFailure(String),

    #[error("Invalid preferences: {0}")]
    InvalidPreferences(String),
}

/// Result type used throughout the hashing core
pub type HashResult<T> = Result<T, HashError>;

impl HashError {
    /// Create an invalid hash format error
    pub fn invalid_hash_format(message: impl Into<String>) -> Self {
        Self::InvalidHashFormat(message.into())
    }

    /// Create an unknown algorithm error
    pub fn unknown_algorithm(identifier: impl Into<String>) -> Self {
        Self::UnknownAlgorithm(identifier.into())
    }

    /// Create an invalid digest algorithm error
    pub fn invalid_digest_algorithm(name: impl Into<String>) -> Self {
        Self::InvalidDigestAlgorithm(name.into())
    }

    /// Create a primitive failure error
    pub fn primitive_failure(message: impl Into<String>) -> Self {
        Self::PrimitiveFailure(message.into())
    }

    /// Create an invalid preferences error
    pub fn invalid_preferences(message: impl Into<String>) -> Self {
        Self::InvalidPreferences(message.into())
    }
}

// Cryptographic error conversions
impl From<argon2::Error> for HashError {
    fn from(err: argon2::Error) -> Self {
        Self::primitive_failure(format!("Argon2 error: {}", err))
    }
}

impl From<argon2::password_hash::Error> for HashError {
    fn from(err: argon2::password_hash::Error) -> Self {
        Self::primitive_failure(format!("Password hash error: {}", err))
    }
}

impl From<bcrypt::BcryptError> for HashError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::primitive_failure(format!("Bcrypt error: {}", err))
    }
}

impl From<sha2::digest::InvalidLength> for HashError {
    fn from(err: sha2::digest::InvalidLength) -> Self {
        Self::primitive_failure(format!("Mac key error: {}", err))
    }
}

impl From<tokio::task::JoinError> for HashError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::primitive_failure(format!("Task join error: {}", err))
    }
}
