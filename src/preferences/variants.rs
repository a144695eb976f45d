//! Caller-authored hash preferences
//!
//! Each algorithm has a partial preference record whose fields are all
//! optional; resolution fills the gaps from the defaults. The tagged
//! `HashPreferences` union is the JSON contract callers speak, keyed by the
//! `algorithm` field.

use serde::{Deserialize, Serialize};

use super::digest_algorithm::DigestAlgorithm;

/// Bcrypt minor version, the letter after `$2` in the encoded hash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BcryptMinorVersion {
    #[serde(rename = "a")]
    A,
    #[serde(rename = "b")]
    B,
}

impl BcryptMinorVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
        }
    }
}

/// Argon2 variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Argon2Type {
    #[serde(rename = "d")]
    D,
    #[serde(rename = "i")]
    I,
    #[serde(rename = "id")]
    Id,
}

impl Argon2Type {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::D => "d",
            Self::I => "i",
            Self::Id => "id",
        }
    }

    /// Look up a variant from the suffix of an `argon2*` identifier
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "d" => Some(Self::D),
            "i" => Some(Self::I),
            "id" => Some(Self::Id),
            _ => None,
        }
    }
}

/// Argon2 version, written as `v=16` or `v=19` in the encoded hash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Argon2Version {
    #[serde(rename = "1.0")]
    V1_0,
    #[serde(rename = "1.3")]
    V1_3,
}

impl Argon2Version {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1_0 => "1.0",
            Self::V1_3 => "1.3",
        }
    }

    /// Numeric version code carried in the encoded hash
    pub fn number(&self) -> u32 {
        match self {
            Self::V1_0 => 0x10,
            Self::V1_3 => 0x13,
        }
    }

    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            0x10 => Some(Self::V1_0),
            0x13 => Some(Self::V1_3),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlainHashPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest_algorithm: Option<DigestAlgorithm>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlainHashSaltPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest_algorithm: Option<DigestAlgorithm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salt_length: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HmacPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest_algorithm: Option<DigestAlgorithm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salt_length: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pbkdf2Preferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest_algorithm: Option<DigestAlgorithm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salt_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterations: Option<u32>,
    /// Derived key length in bytes; defaults to the digest's output length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_length: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BcryptPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minor_version: Option<BcryptMinorVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounds: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScryptPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_length: Option<usize>,
    /// CPU and memory cost, must be a power of two
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallelization: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salt_length: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Argon2Preferences {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<Argon2Type>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<Argon2Version>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salt_length: Option<usize>,
    /// Memory cost in kibibytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_cost: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_cost: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallelism: Option<u32>,
}

/// Hash preferences for one of the seven supported algorithms
///
/// Serializes as a JSON object tagged by its `algorithm` field, for example
/// `{"algorithm": "PBKDF2", "iterations": 1000}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm")]
pub enum HashPreferences {
    #[serde(rename = "Plain Hash")]
    PlainHash(PlainHashPreferences),
    #[serde(rename = "Plain Hash+Salt")]
    PlainHashSalt(PlainHashSaltPreferences),
    #[serde(rename = "HMAC")]
    Hmac(HmacPreferences),
    #[serde(rename = "PBKDF2")]
    Pbkdf2(Pbkdf2Preferences),
    #[serde(rename = "BCrypt")]
    Bcrypt(BcryptPreferences),
    #[serde(rename = "SCrypt")]
    Scrypt(ScryptPreferences),
    #[serde(rename = "Argon2")]
    Argon2(Argon2Preferences),
}

impl HashPreferences {
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

impl Default for HashPreferences {
    /// Argon2 with no overrides
    fn default() -> Self {
        Self::Argon2(Argon2Preferences::default())
    }
}
