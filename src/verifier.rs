//! Password verification
//!
//! Recomputes the stored hash from the salt and parameters embedded in the
//! encoded string and compares in constant time. BCrypt and Argon2 hashes
//! are checked through their own crates, which carry native constant-time
//! comparisons.

use argon2::password_hash::PasswordHash;
use argon2::{Argon2, PasswordVerifier};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::codec::decode::{self, decode_preferences};
use crate::codec::{base64, PhcString};
use crate::hasher::primitives;
use crate::preferences::ResolvedHashPreferences;
use crate::shared::constants::MAX_OUTPUT_LENGTH;
use crate::shared::error::{HashError, HashResult};

/// Check a password against an encoded hash
///
/// When `known` preferences are given they are trusted over the identifier
/// in the hash; otherwise the hash is decoded first. The salt and the
/// expected bytes always come from the hash string itself.
pub fn verify_password(
    password: &str,
    hash: &str,
    known: Option<&ResolvedHashPreferences>,
) -> HashResult<bool> {
    let stored = match known {
        Some(preferences) => *preferences,
        None => decode_preferences(hash)?,
    };
    log::debug!("verifying password against {}", stored.algorithm());

    match stored {
        ResolvedHashPreferences::PlainHash(p) => {
            let parts = decode::segments(hash)?;
            let expected = base64::decode(decode::segment(&parts, 1)?)?;
            let mut computed = primitives::digest(p.digest_algorithm, password.as_bytes());
            let matches = constant_time_eq(&computed, &expected);
            computed.zeroize();
            Ok(matches)
        }
        ResolvedHashPreferences::PlainHashSalt(p) => {
            let parts = decode::segments(hash)?;
            let salt = base64::decode(decode::segment(&parts, 1)?)?;
            let expected = base64::decode(decode::segment(&parts, 2)?)?;
            let mut computed =
                primitives::salted_digest(p.digest_algorithm, password.as_bytes(), &salt);
            let matches = constant_time_eq(&computed, &expected);
            computed.zeroize();
            Ok(matches)
        }
        ResolvedHashPreferences::Hmac(p) => {
            let parts = decode::segments(hash)?;
            let salt = base64::decode(decode::segment(&parts, 1)?)?;
            let expected = base64::decode(decode::segment(&parts, 2)?)?;
            let mut computed =
                primitives::hmac_tag(p.digest_algorithm, &salt, password.as_bytes())?;
            let matches = constant_time_eq(&computed, &expected);
            computed.zeroize();
            Ok(matches)
        }
        ResolvedHashPreferences::Pbkdf2(p) => {
            let parts = decode::segments(hash)?;
            let salt = base64::decode(decode::segment(&parts, 2)?)?;
            let expected = base64::decode(decode::segment(&parts, 3)?)?;
            check_stored_length(expected.len())?;
            let mut computed = primitives::pbkdf2_key(
                p.digest_algorithm,
                password.as_bytes(),
                &salt,
                p.iterations,
                expected.len(),
            )?;
            let matches = constant_time_eq(&computed, &expected);
            computed.zeroize();
            Ok(matches)
        }
        ResolvedHashPreferences::Bcrypt(_) => Ok(bcrypt::verify(password, hash)?),
        ResolvedHashPreferences::Scrypt(p) => {
            let phc = PhcString::parse(hash)?;
            let salt = phc.salt.ok_or_else(|| {
                HashError::invalid_hash_format("scrypt hash is missing its salt segment")
            })?;
            let expected = phc.hash.ok_or_else(|| {
                HashError::invalid_hash_format("scrypt hash is missing its key segment")
            })?;
            check_stored_length(expected.len())?;
            let mut computed = primitives::scrypt_key(
                password.as_bytes(),
                &salt,
                p.cost,
                p.block_size,
                p.parallelization,
                expected.len(),
            )?;
            let matches = constant_time_eq(&computed, &expected);
            computed.zeroize();
            Ok(matches)
        }
        ResolvedHashPreferences::Argon2(_) => verify_argon2(password, hash),
    }
}

fn verify_argon2(password: &str, hash: &str) -> HashResult<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| HashError::invalid_hash_format(format!("unparsable argon2 hash: {}", e)))?;
    Ok(Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok())
}

// Mismatched lengths compare unequal instead of short-circuiting on length.
fn constant_time_eq(computed: &[u8], expected: &[u8]) -> bool {
    computed.ct_eq(expected).into()
}

fn check_stored_length(length: usize) -> HashResult<()> {
    if length > MAX_OUTPUT_LENGTH {
        return Err(HashError::invalid_hash_format(format!(
            "stored hash length {} exceeds the {} byte limit",
            length, MAX_OUTPUT_LENGTH
        )));
    }
    Ok(())
}
