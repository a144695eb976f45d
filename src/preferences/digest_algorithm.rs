//! Digest algorithm selection
//!
//! The four digests the plain, salted, HMAC, and PBKDF2 schemes can run on,
//! together with the two string mappings the encoded formats use: the short
//! identifier that opens a plain or salted hash, and the lowercase name
//! embedded in `hmac-` and `pbkdf2-` identifiers.

use serde::{Deserialize, Serialize};

/// Message digest algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DigestAlgorithm {
    #[serde(rename = "MD5")]
    Md5,
    #[serde(rename = "SHA1")]
    Sha1,
    #[serde(rename = "SHA256")]
    Sha256,
    #[serde(rename = "SHA512")]
    Sha512,
}

impl DigestAlgorithm {
    /// Every supported digest, in identifier-table order
    pub const ALL: [DigestAlgorithm; 4] = [
        DigestAlgorithm::Md5,
        DigestAlgorithm::Sha1,
        DigestAlgorithm::Sha256,
        DigestAlgorithm::Sha512,
    ];

    /// Short identifier opening a plain or salted hash string
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::Md5 => "1",
            Self::Sha1 => "sha1",
            Self::Sha256 => "5",
            Self::Sha512 => "6",
        }
    }

    /// Look up a digest by its short identifier
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        match identifier {
            "1" => Some(Self::Md5),
            "sha1" => Some(Self::Sha1),
            "5" => Some(Self::Sha256),
            "6" => Some(Self::Sha512),
            _ => None,
        }
    }

    /// Lowercase name embedded in `hmac-` and `pbkdf2-` identifiers
    pub fn name(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }

    /// Look up a digest by name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "md5" => Some(Self::Md5),
            "sha1" => Some(Self::Sha1),
            "sha256" => Some(Self::Sha256),
            "sha512" => Some(Self::Sha512),
            _ => None,
        }
    }

    /// Digest output length in bytes
    pub fn output_len(&self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha512 => 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_round_trip() {
        for digest in DigestAlgorithm::ALL {
            assert_eq!(DigestAlgorithm::from_identifier(digest.identifier()), Some(digest));
        }
    }

    #[test]
    fn test_name_round_trip() {
        for digest in DigestAlgorithm::ALL {
            assert_eq!(DigestAlgorithm::from_name(digest.name()), Some(digest));
        }
    }

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(DigestAlgorithm::from_name("SHA256"), Some(DigestAlgorithm::Sha256));
        assert_eq!(DigestAlgorithm::from_name("Sha512"), Some(DigestAlgorithm::Sha512));
        assert_eq!(DigestAlgorithm::from_name("MD5"), Some(DigestAlgorithm::Md5));
    }

    #[test]
    fn test_unknown_lookups() {
        assert_eq!(DigestAlgorithm::from_identifier("2"), None);
        assert_eq!(DigestAlgorithm::from_identifier("sha256"), None);
        assert_eq!(DigestAlgorithm::from_name("whirlpool"), None);
    }

    #[test]
    fn test_output_lengths() {
        assert_eq!(DigestAlgorithm::Md5.output_len(), 16);
        assert_eq!(DigestAlgorithm::Sha1.output_len(), 20);
        assert_eq!(DigestAlgorithm::Sha256.output_len(), 32);
        assert_eq!(DigestAlgorithm::Sha512.output_len(), 64);
    }

    #[test]
    fn test_serde_names_are_uppercase() {
        let json = serde_json::to_string(&DigestAlgorithm::Sha256).unwrap();
        assert_eq!(json, "\"SHA256\"");

        let parsed: DigestAlgorithm = serde_json::from_str("\"MD5\"").unwrap();
        assert_eq!(parsed, DigestAlgorithm::Md5);
    }
}
