//! Resolved hash preferences
//!
//! The fully-populated counterparts of the partial preference records.
//! `HashPreferences::resolve` merges caller values over the defaults and is
//! infallible; decoding an encoded hash also yields these records.

use serde::{Deserialize, Serialize};

use super::defaults::*;
use super::digest_algorithm::DigestAlgorithm;
use super::variants::{Argon2Type, Argon2Version, BcryptMinorVersion, HashPreferences};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPlainHashPreferences {
    pub digest_algorithm: DigestAlgorithm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPlainHashSaltPreferences {
    pub digest_algorithm: DigestAlgorithm,
    pub salt_length: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedHmacPreferences {
    pub digest_algorithm: DigestAlgorithm,
    pub salt_length: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPbkdf2Preferences {
    pub digest_algorithm: DigestAlgorithm,
    pub salt_length: usize,
    pub iterations: u32,
    pub hash_length: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedBcryptPreferences {
    pub minor_version: BcryptMinorVersion,
    pub rounds: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedScryptPreferences {
    pub hash_length: usize,
    pub cost: u32,
    pub block_size: u32,
    pub parallelization: u32,
    pub salt_length: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedArgon2Preferences {
    #[serde(rename = "type")]
    pub kind: Argon2Type,
    pub version: Argon2Version,
    pub hash_length: usize,
    pub salt_length: usize,
    pub memory_cost: u32,
    pub time_cost: u32,
    pub parallelism: u32,
}

/// Fully-resolved hash preferences
///
/// Uses the same `algorithm`-tagged JSON shape as [`HashPreferences`], with
/// every field present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm")]
pub enum ResolvedHashPreferences {
    #[serde(rename = "Plain Hash")]
    PlainHash(ResolvedPlainHashPreferences),
    #[serde(rename = "Plain Hash+Salt")]
    PlainHashSalt(ResolvedPlainHashSaltPreferences),
    #[serde(rename = "HMAC")]
    Hmac(ResolvedHmacPreferences),
    #[serde(rename = "PBKDF2")]
    Pbkdf2(ResolvedPbkdf2Preferences),
    #[serde(rename = "BCrypt")]
    Bcrypt(ResolvedBcryptPreferences),
    #[serde(rename = "SCrypt")]
    Scrypt(ResolvedScryptPreferences),
    #[serde(rename = "Argon2")]
    Argon2(ResolvedArgon2Preferences),
}

impl ResolvedHashPreferences {
    /// Canonical algorithm tag, matching the serialized `algorithm` field
    pub fn algorithm(&self) -> &'static str {
        match self {
            Self::PlainHash(_) => "Plain Hash",
            Self::PlainHashSalt(_) => "Plain Hash+Salt",
            Self::Hmac(_) => "HMAC",
            Self::Pbkdf2(_) => "PBKDF2",
            Self::Bcrypt(_) => "BCrypt",
            Self::Scrypt(_) => "SCrypt",
            Self::Argon2(_) => "Argon2",
        }
    }
}

impl HashPreferences {
    /// Fill every omitted field with its default value
    pub fn resolve(&self) -> ResolvedHashPreferences {
        match self {
            Self::PlainHash(p) => ResolvedHashPreferences::PlainHash(ResolvedPlainHashPreferences {
                digest_algorithm: p.digest_algorithm.unwrap_or(DEFAULT_DIGEST_ALGORITHM),
            }),
            Self::PlainHashSalt(p) => {
                ResolvedHashPreferences::PlainHashSalt(ResolvedPlainHashSaltPreferences {
                    digest_algorithm: p.digest_algorithm.unwrap_or(DEFAULT_DIGEST_ALGORITHM),
                    salt_length: p.salt_length.unwrap_or(DEFAULT_SALT_LENGTH),
                })
            }
            Self::Hmac(p) => ResolvedHashPreferences::Hmac(ResolvedHmacPreferences {
                digest_algorithm: p.digest_algorithm.unwrap_or(DEFAULT_DIGEST_ALGORITHM),
                salt_length: p.salt_length.unwrap_or(DEFAULT_SALT_LENGTH),
            }),
            Self::Pbkdf2(p) => {
                let digest_algorithm = p.digest_algorithm.unwrap_or(DEFAULT_DIGEST_ALGORITHM);
                ResolvedHashPreferences::Pbkdf2(ResolvedPbkdf2Preferences {
                    digest_algorithm,
                    salt_length: p.salt_length.unwrap_or(DEFAULT_SALT_LENGTH),
                    iterations: p.iterations.unwrap_or(DEFAULT_PBKDF2_ITERATIONS),
                    hash_length: p.hash_length.unwrap_or_else(|| digest_algorithm.output_len()),
                })
            }
            Self::Bcrypt(p) => ResolvedHashPreferences::Bcrypt(ResolvedBcryptPreferences {
                minor_version: p.minor_version.unwrap_or(DEFAULT_BCRYPT_MINOR_VERSION),
                rounds: p.rounds.unwrap_or(DEFAULT_BCRYPT_ROUNDS),
            }),
            Self::Scrypt(p) => ResolvedHashPreferences::Scrypt(ResolvedScryptPreferences {
                hash_length: p.hash_length.unwrap_or(DEFAULT_SCRYPT_HASH_LENGTH),
                cost: p.cost.unwrap_or(DEFAULT_SCRYPT_COST),
                block_size: p.block_size.unwrap_or(DEFAULT_SCRYPT_BLOCK_SIZE),
                parallelization: p.parallelization.unwrap_or(DEFAULT_SCRYPT_PARALLELIZATION),
                salt_length: p.salt_length.unwrap_or(DEFAULT_SALT_LENGTH),
            }),
            Self::Argon2(p) => ResolvedHashPreferences::Argon2(ResolvedArgon2Preferences {
                kind: p.kind.unwrap_or(DEFAULT_ARGON2_TYPE),
                version: p.version.unwrap_or(DEFAULT_ARGON2_VERSION),
                hash_length: p.hash_length.unwrap_or(DEFAULT_ARGON2_HASH_LENGTH),
                salt_length: p.salt_length.unwrap_or(DEFAULT_ARGON2_SALT_LENGTH),
                memory_cost: p.memory_cost.unwrap_or(DEFAULT_ARGON2_MEMORY_COST),
                time_cost: p.time_cost.unwrap_or(DEFAULT_ARGON2_TIME_COST),
                parallelism: p.parallelism.unwrap_or(DEFAULT_ARGON2_PARALLELISM),
            }),
        }
    }
}
