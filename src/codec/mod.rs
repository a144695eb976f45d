//! Encoded hash formats
//!
//! Writing and reading the self-describing `$`-separated hash strings. Every
//! hash opens with an algorithm identifier and carries the parameters needed
//! to verify a password against it without external metadata.

pub mod base64;
pub mod decode;
pub mod encode;
pub mod phc;

// Re-export the decoding entry points
pub use decode::decode_preferences;
pub use phc::PhcString;
