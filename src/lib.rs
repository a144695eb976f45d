//! Passmux
//!
//! Password hashing multiplexer.
//! One facade over seven password hashing schemes, each emitting a
//! self-describing hash string that carries everything needed to verify it.
//!
//! ## Architecture
//!
//! - **Preferences**: partial and resolved parameter records for every scheme
//! - **Codec**: encoding and decoding of the `$`-delimited hash formats
//! - **Hasher**: salt generation and key derivation
//! - **Verifier**: constant-time password checks
//! - **Api**: async entry points that schedule KDF work on the blocking pool
//!
//! ## Security Notes
//!
//! - Passwords and hash material never reach the log output
//! - Derived key buffers are zeroized after use
//! - Comparisons of computed hashes run in constant time
//!
//! ## Usage
//!
//! ```rust
//! use passmux::{HashPreferences, Pbkdf2Preferences};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let preferences = HashPreferences::Pbkdf2(Pbkdf2Preferences {
//!     iterations: Some(1000),
//!     ..Default::default()
//! });
//!
//! let hash = passmux::hash_password("secret", Some(&preferences)).await?;
//! assert!(passmux::verify_password("secret", &hash, None).await?);
//! assert!(!passmux::needs_rehash(&hash, Some(&preferences), None)?);
//! # Ok::<(), passmux::HashError>(())
//! # }).unwrap();
//! ```

// Re-export main modules for easy access
pub mod api;
pub mod codec;
pub mod hasher;
pub mod preferences;
pub mod rehash;
pub mod shared;
pub mod verifier;

// Re-export the facade operations
pub use api::{decode_preferences, hash_password, needs_rehash, verify_password};

// Re-export the preference types
pub use preferences::{
    Argon2Preferences, Argon2Type, Argon2Version, BcryptMinorVersion, BcryptPreferences,
    DigestAlgorithm, HashPreferences, HmacPreferences, Pbkdf2Preferences, PlainHashPreferences,
    PlainHashSaltPreferences, ResolvedHashPreferences, ScryptPreferences, validate_preferences,
};

// Re-export shared types
pub use shared::error::{HashError, HashResult};

/// Initialize logging for binaries and tests that want it
pub fn init() {
    let _ = env_logger::try_init();
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_information() {
        assert_eq!(NAME, "passmux");
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_init_is_repeatable() {
        init();
        init();
    }
}
