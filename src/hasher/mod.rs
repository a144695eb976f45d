//! Hashing module
//!
//! The public entry point is [`hash_password`]; the raw key derivation
//! routines live in [`primitives`].

pub mod password_hasher;
pub mod primitives;

pub use password_hasher::*;
