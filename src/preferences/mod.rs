//! Hash preference model
//!
//! Partial, caller-authored preference records; the defaults and published
//! bounds behind them; and the fully-resolved records that are embedded in
//! and recovered from encoded hashes.

pub mod bounds;
pub mod defaults;
pub mod digest_algorithm;
pub mod resolved;
pub mod variants;

// Re-export the preference vocabulary
pub use bounds::*;
pub use defaults::*;
pub use digest_algorithm::*;
pub use resolved::*;
pub use variants::*;
