//! PHC-style string parsing
//!
//! The scrypt and Argon2 families encode as
//! `$<id>[$v=<version>][$<k=v,...>]$<salt>$<hash>`. This parser produces an
//! owned view of such a string; decoding and verification read parameters,
//! salt, and hash bytes from it.

use super::base64;
use crate::shared::error::{HashError, HashResult};

/// Owned view of one PHC-style hash string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhcString {
    pub id: String,
    pub version: Option<u32>,
    pub params: Vec<(String, String)>,
    pub salt: Option<Vec<u8>>,
    pub hash: Option<Vec<u8>>,
}

impl PhcString {
    pub fn parse(text: &str) -> HashResult<Self> {
        let body = text
            .strip_prefix('$')
            .ok_or_else(|| HashError::invalid_hash_format("hash must start with '$'"))?;
        let mut segments = body.split('$');
        let id = segments
            .next()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| HashError::invalid_hash_format("hash is missing its identifier"))?
            .to_owned();

        let mut version = None;
        let mut params = Vec::new();
        let mut salt = None;
        let mut hash = None;

        for segment in segments {
            let head = version.is_none() && params.is_empty() && salt.is_none();
            if head && segment.starts_with("v=") && !segment.contains(',') {
                let value = &segment[2..];
                version = Some(value.parse::<u32>().map_err(|_| {
                    HashError::invalid_hash_format(format!("unparsable version '{}'", value))
                })?);
            } else if salt.is_none() && segment.contains('=') {
                if !params.is_empty() {
                    return Err(HashError::invalid_hash_format(
                        "hash carries more than one parameter segment",
                    ));
                }
                params = parse_params(segment)?;
            } else if salt.is_none() {
                salt = Some(base64::decode(segment)?);
            } else if hash.is_none() {
                hash = Some(base64::decode(segment)?);
            } else {
                return Err(HashError::invalid_hash_format("hash has too many segments"));
            }
        }

        Ok(Self { id, version, params, salt, hash })
    }

    /// Numeric parameter lookup; absent or non-numeric values are `None`
    pub fn param_u32(&self, key: &str) -> Option<u32> {
        self.params
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .and_then(|(_, v)| v.parse().ok())
    }
}

fn parse_params(segment: &str) -> HashResult<Vec<(String, String)>> {
    let mut params = Vec::new();
    for pair in segment.split(',') {
        let (key, value) = pair.split_once('=').ok_or_else(|| {
            HashError::invalid_hash_format(format!("malformed parameter pair '{}'", pair))
        })?;
        params.push((key.to_owned(), value.to_owned()));
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scrypt_style() {
        let salt = base64::encode(&[1u8; 16]);
        let hash = base64::encode(&[2u8; 32]);
        let parsed = PhcString::parse(&format!("$s2$n=16384,r=8,p=1${}${}", salt, hash)).unwrap();

        assert_eq!(parsed.id, "s2");
        assert_eq!(parsed.version, None);
        assert_eq!(parsed.param_u32("n"), Some(16384));
        assert_eq!(parsed.param_u32("r"), Some(8));
        assert_eq!(parsed.param_u32("p"), Some(1));
        assert_eq!(parsed.salt.as_deref(), Some(&[1u8; 16][..]));
        assert_eq!(parsed.hash.as_deref(), Some(&[2u8; 32][..]));
    }

    #[test]
    fn test_parse_argon2_style() {
        let salt = base64::encode(&[3u8; 16]);
        let hash = base64::encode(&[4u8; 32]);
        let parsed =
            PhcString::parse(&format!("$argon2id$v=19$m=65536,t=3,p=4${}${}", salt, hash)).unwrap();

        assert_eq!(parsed.id, "argon2id");
        assert_eq!(parsed.version, Some(19));
        assert_eq!(parsed.param_u32("m"), Some(65536));
        assert_eq!(parsed.param_u32("t"), Some(3));
        assert_eq!(parsed.param_u32("p"), Some(4));
    }

    #[test]
    fn test_missing_segments_stay_none() {
        let parsed = PhcString::parse("$argon2id$v=19$m=65536,t=3,p=4").unwrap();
        assert_eq!(parsed.salt, None);
        assert_eq!(parsed.hash, None);
    }

    #[test]
    fn test_missing_dollar_prefix() {
        let error = PhcString::parse("argon2id$v=19").unwrap_err();
        assert!(matches!(error, HashError::InvalidHashFormat(_)));
    }

    #[test]
    fn test_unparsable_version() {
        let error = PhcString::parse("$argon2id$v=abc$m=1,t=1,p=1").unwrap_err();
        assert!(matches!(error, HashError::InvalidHashFormat(_)));
    }

    #[test]
    fn test_param_lookup_misses() {
        let parsed = PhcString::parse("$s2$n=16384,r=8,p=1$AAAA$AAAA").unwrap();
        assert_eq!(parsed.param_u32("m"), None);
    }

    #[test]
    fn test_too_many_segments() {
        let error = PhcString::parse("$s2$n=1,r=1,p=1$AAAA$AAAA$AAAA").unwrap_err();
        assert!(matches!(error, HashError::InvalidHashFormat(_)));
    }
}
