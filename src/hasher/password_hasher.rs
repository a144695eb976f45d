//! Password hashing
//!
//! Resolves the caller's preferences, generates a salt from the operating
//! system rng, runs the selected primitive, and encodes the result as a
//! self-describing hash string.

use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHasher};
use rand_core::{OsRng, RngCore};
use zeroize::Zeroize;

use super::primitives;
use crate::codec::encode;
use crate::preferences::{
    Argon2Type, Argon2Version, BcryptMinorVersion, HashPreferences, ResolvedArgon2Preferences,
    ResolvedHashPreferences,
};
use crate::shared::constants::{MAX_OUTPUT_LENGTH, MAX_SALT_LENGTH};
use crate::shared::error::{HashError, HashResult};

/// Hash a password according to the given preferences
///
/// Omitted preference fields take their default values. The returned string
/// embeds everything needed to verify the password later.
pub fn hash_password(password: &str, preferences: &HashPreferences) -> HashResult<String> {
    let resolved = preferences.resolve();
    log::debug!("hashing password with {}", resolved.algorithm());

    match resolved {
        ResolvedHashPreferences::PlainHash(p) => {
            let digest = primitives::digest(p.digest_algorithm, password.as_bytes());
            Ok(encode::plain_hash(p.digest_algorithm, &digest))
        }
        ResolvedHashPreferences::PlainHashSalt(p) => {
            let salt = generate_salt(p.salt_length)?;
            let digest = primitives::salted_digest(p.digest_algorithm, password.as_bytes(), &salt);
            Ok(encode::plain_hash_salt(p.digest_algorithm, &salt, &digest))
        }
        ResolvedHashPreferences::Hmac(p) => {
            let salt = generate_salt(p.salt_length)?;
            let mac = primitives::hmac_tag(p.digest_algorithm, &salt, password.as_bytes())?;
            Ok(encode::hmac(p.digest_algorithm, &salt, &mac))
        }
        ResolvedHashPreferences::Pbkdf2(p) => {
            check_output_length(p.hash_length)?;
            let salt = generate_salt(p.salt_length)?;
            let mut key = primitives::pbkdf2_key(
                p.digest_algorithm,
                password.as_bytes(),
                &salt,
                p.iterations,
                p.hash_length,
            )?;
            let encoded = encode::pbkdf2(p.digest_algorithm, p.iterations, &salt, &key);
            key.zeroize();
            Ok(encoded)
        }
        ResolvedHashPreferences::Bcrypt(p) => {
            let parts = bcrypt::hash_with_result(password, p.rounds)?;
            Ok(parts.format_for_version(bcrypt_version(p.minor_version)))
        }
        ResolvedHashPreferences::Scrypt(p) => {
            check_output_length(p.hash_length)?;
            let salt = generate_salt(p.salt_length)?;
            let mut key = primitives::scrypt_key(
                password.as_bytes(),
                &salt,
                p.cost,
                p.block_size,
                p.parallelization,
                p.hash_length,
            )?;
            let encoded = encode::scrypt(p.cost, p.block_size, p.parallelization, &salt, &key);
            key.zeroize();
            Ok(encoded)
        }
        ResolvedHashPreferences::Argon2(p) => hash_argon2(password, &p),
    }
}

/// Generate a random salt of the requested length
fn generate_salt(length: usize) -> HashResult<Vec<u8>> {
    if length > MAX_SALT_LENGTH {
        return Err(HashError::invalid_preferences(format!(
            "salt length {} exceeds the {} byte limit",
            length, MAX_SALT_LENGTH
        )));
    }
    let mut salt = vec![0u8; length];
    let mut rng = OsRng;
    rng.try_fill_bytes(&mut salt)
        .map_err(|e| HashError::primitive_failure(format!("operating system rng failure: {}", e)))?;
    Ok(salt)
}

fn check_output_length(length: usize) -> HashResult<()> {
    if length > MAX_OUTPUT_LENGTH {
        return Err(HashError::invalid_preferences(format!(
            "hash length {} exceeds the {} byte limit",
            length, MAX_OUTPUT_LENGTH
        )));
    }
    Ok(())
}

/// Hash with Argon2, emitting the crate's native phc string
fn hash_argon2(password: &str, preferences: &ResolvedArgon2Preferences) -> HashResult<String> {
    let params = argon2::Params::new(
        preferences.memory_cost,
        preferences.time_cost,
        preferences.parallelism,
        Some(preferences.hash_length),
    )?;
    let argon2 = Argon2::new(
        argon2_algorithm(preferences.kind),
        argon2_version(preferences.version),
        params,
    );

    let salt = generate_salt(preferences.salt_length)?;
    let salt_str = SaltString::encode_b64(&salt)?;
    let password_hash = argon2.hash_password(password.as_bytes(), &salt_str)?;

    Ok(password_hash.to_string())
}

fn argon2_algorithm(kind: Argon2Type) -> argon2::Algorithm {
    match kind {
        Argon2Type::D => argon2::Algorithm::Argon2d,
        Argon2Type::I => argon2::Algorithm::Argon2i,
        Argon2Type::Id => argon2::Algorithm::Argon2id,
    }
}

fn argon2_version(version: Argon2Version) -> argon2::Version {
    match version {
        Argon2Version::V1_0 => argon2::Version::V0x10,
        Argon2Version::V1_3 => argon2::Version::V0x13,
    }
}

fn bcrypt_version(minor: BcryptMinorVersion) -> bcrypt::Version {
    match minor {
        BcryptMinorVersion::A => bcrypt::Version::TwoA,
        BcryptMinorVersion::B => bcrypt::Version::TwoB,
    }
}
