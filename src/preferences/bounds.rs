//! Published parameter bounds
//!
//! The closed per-algorithm bound tables callers can validate preference
//! objects against before hashing. Resolution itself never consults these;
//! hashing surfaces narrower primitive-level limits as primitive failures.

use super::variants::HashPreferences;
use crate::shared::error::{HashError, HashResult};

/// Inclusive numeric range for one preference field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bound {
    pub min: u64,
    pub max: u64,
}

impl Bound {
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u64) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const SALT_LENGTH_BOUND: Bound = Bound::new(0, i32::MAX as u64);

pub const PBKDF2_ITERATIONS_BOUND: Bound = Bound::new(1, u32::MAX as u64);
pub const PBKDF2_HASH_LENGTH_BOUND: Bound = Bound::new(0, u32::MAX as u64);

pub const BCRYPT_ROUNDS_BOUND: Bound = Bound::new(1, 31);

pub const SCRYPT_HASH_LENGTH_BOUND: Bound = Bound::new(0, u32::MAX as u64);
pub const SCRYPT_COST_BOUND: Bound = Bound::new(0, u32::MAX as u64);
pub const SCRYPT_BLOCK_SIZE_BOUND: Bound = Bound::new(0, u32::MAX as u64);
pub const SCRYPT_PARALLELIZATION_BOUND: Bound = Bound::new(0, u32::MAX as u64);

pub const ARGON2_HASH_LENGTH_BOUND: Bound = Bound::new(4, u32::MAX as u64);
pub const ARGON2_SALT_LENGTH_BOUND: Bound = Bound::new(8, i32::MAX as u64);
pub const ARGON2_MEMORY_COST_BOUND: Bound = Bound::new(2048, u32::MAX as u64);
pub const ARGON2_TIME_COST_BOUND: Bound = Bound::new(2, u32::MAX as u64);
pub const ARGON2_PARALLELISM_BOUND: Bound = Bound::new(1, (1 << 24) - 1);

/// Check every field a preference object sets against its published bound
pub fn validate_preferences(preferences: &HashPreferences) -> HashResult<()> {
    match preferences {
        HashPreferences::PlainHash(_) => Ok(()),
        HashPreferences::PlainHashSalt(p) => {
            check_opt("saltLength", p.salt_length.map(|v| v as u64), SALT_LENGTH_BOUND)
        }
        HashPreferences::Hmac(p) => {
            check_opt("saltLength", p.salt_length.map(|v| v as u64), SALT_LENGTH_BOUND)
        }
        HashPreferences::Pbkdf2(p) => {
            check_opt("saltLength", p.salt_length.map(|v| v as u64), SALT_LENGTH_BOUND)?;
            check_opt("iterations", p.iterations.map(u64::from), PBKDF2_ITERATIONS_BOUND)?;
            check_opt("hashLength", p.hash_length.map(|v| v as u64), PBKDF2_HASH_LENGTH_BOUND)
        }
        HashPreferences::Bcrypt(p) => {
            check_opt("rounds", p.rounds.map(u64::from), BCRYPT_ROUNDS_BOUND)
        }
        HashPreferences::Scrypt(p) => {
            check_opt("hashLength", p.hash_length.map(|v| v as u64), SCRYPT_HASH_LENGTH_BOUND)?;
            check_opt("cost", p.cost.map(u64::from), SCRYPT_COST_BOUND)?;
            check_opt("blockSize", p.block_size.map(u64::from), SCRYPT_BLOCK_SIZE_BOUND)?;
            check_opt(
                "parallelization",
                p.parallelization.map(u64::from),
                SCRYPT_PARALLELIZATION_BOUND,
            )?;
            check_opt("saltLength", p.salt_length.map(|v| v as u64), SALT_LENGTH_BOUND)
        }
        HashPreferences::Argon2(p) => {
            check_opt("hashLength", p.hash_length.map(|v| v as u64), ARGON2_HASH_LENGTH_BOUND)?;
            check_opt("saltLength", p.salt_length.map(|v| v as u64), ARGON2_SALT_LENGTH_BOUND)?;
            check_opt("memoryCost", p.memory_cost.map(u64::from), ARGON2_MEMORY_COST_BOUND)?;
            check_opt("timeCost", p.time_cost.map(u64::from), ARGON2_TIME_COST_BOUND)?;
            check_opt("parallelism", p.parallelism.map(u64::from), ARGON2_PARALLELISM_BOUND)
        }
    }
}

fn check_opt(field: &str, value: Option<u64>, bound: Bound) -> HashResult<()> {
    match value {
        Some(value) if !bound.contains(value) => Err(HashError::invalid_preferences(format!(
            "{} must be between {} and {}, got {}",
            field, bound.min, bound.max, value
        ))),
        _ => Ok(()),
    }
}
