//! Preference recovery from encoded hashes
//!
//! Every encoded hash opens with an identifier that selects its algorithm;
//! the remaining segments carry the parameters needed to verify a password
//! against it. Decoding recovers those observable parameters. It is not the
//! inverse of encoding: hashing inputs that leave no trace in the string,
//! such as a requested salt length bcrypt ignores, are not recovered.

use super::base64;
use super::phc::PhcString;
use crate::preferences::{
    Argon2Type, Argon2Version, BcryptMinorVersion, DigestAlgorithm, ResolvedArgon2Preferences,
    ResolvedBcryptPreferences, ResolvedHashPreferences, ResolvedHmacPreferences,
    ResolvedPbkdf2Preferences, ResolvedPlainHashPreferences, ResolvedPlainHashSaltPreferences,
    ResolvedScryptPreferences, DEFAULT_PBKDF2_ITERATIONS,
};
use crate::shared::error::{HashError, HashResult};

/// Identifier opening an scrypt hash
pub const SCRYPT_IDENTIFIER: &str = "s2";

/// Recover the hash preferences already embedded in an encoded hash
pub fn decode_preferences(hash: &str) -> HashResult<ResolvedHashPreferences> {
    let parts = segments(hash)?;
    let identifier = parts[0];

    if identifier == "2a" || identifier == "2b" {
        decode_bcrypt(&parts)
    } else if identifier == SCRYPT_IDENTIFIER {
        decode_scrypt(hash)
    } else if let Some(kind) = identifier.strip_prefix("argon2").and_then(Argon2Type::from_suffix) {
        decode_argon2(hash, kind)
    } else if let Some(name) = identifier.strip_prefix("hmac-") {
        decode_hmac(name, &parts)
    } else if let Some(name) = identifier.strip_prefix("pbkdf2-") {
        decode_pbkdf2(name, &parts)
    } else if let Some(digest) = DigestAlgorithm::from_identifier(identifier) {
        decode_plain(digest, &parts)
    } else {
        Err(HashError::unknown_algorithm(identifier))
    }
}

/// Split an encoded hash into its `$`-separated segments
pub(crate) fn segments(hash: &str) -> HashResult<Vec<&str>> {
    let body = hash
        .strip_prefix('$')
        .ok_or_else(|| HashError::invalid_hash_format("hash must start with '$'"))?;
    let parts: Vec<&str> = body.split('$').collect();
    if parts.len() < 2 {
        return Err(HashError::invalid_hash_format(
            "hash must carry an identifier and at least one data segment",
        ));
    }
    Ok(parts)
}

pub(crate) fn segment<'a>(parts: &[&'a str], index: usize) -> HashResult<&'a str> {
    parts.get(index).copied().ok_or_else(|| {
        HashError::invalid_hash_format("hash is missing an expected segment")
    })
}

fn decode_bcrypt(parts: &[&str]) -> HashResult<ResolvedHashPreferences> {
    let minor_version = match parts[0] {
        "2a" => BcryptMinorVersion::A,
        _ => BcryptMinorVersion::B,
    };
    let rounds = parts[1].parse::<u32>().map_err(|_| {
        HashError::invalid_hash_format(format!("unparsable bcrypt round count '{}'", parts[1]))
    })?;
    Ok(ResolvedHashPreferences::Bcrypt(ResolvedBcryptPreferences { minor_version, rounds }))
}

fn decode_scrypt(hash: &str) -> HashResult<ResolvedHashPreferences> {
    let phc = PhcString::parse(hash)?;
    let cost = required_param(&phc, "n")?;
    let block_size = required_param(&phc, "r")?;
    let parallelization = required_param(&phc, "p")?;
    let salt = phc
        .salt
        .ok_or_else(|| HashError::invalid_hash_format("scrypt hash is missing its salt segment"))?;
    let key = phc
        .hash
        .ok_or_else(|| HashError::invalid_hash_format("scrypt hash is missing its key segment"))?;

    Ok(ResolvedHashPreferences::Scrypt(ResolvedScryptPreferences {
        hash_length: key.len(),
        cost,
        block_size,
        parallelization,
        salt_length: salt.len(),
    }))
}

fn decode_argon2(hash: &str, kind: Argon2Type) -> HashResult<ResolvedHashPreferences> {
    let phc = PhcString::parse(hash)?;
    let version = phc
        .version
        .and_then(Argon2Version::from_number)
        .ok_or_else(|| HashError::invalid_hash_format("unrecognized argon2 version"))?;
    let memory_cost = required_param(&phc, "m")?;
    let time_cost = required_param(&phc, "t")?;
    let parallelism = required_param(&phc, "p")?;
    let salt = phc
        .salt
        .ok_or_else(|| HashError::invalid_hash_format("argon2 hash is missing its salt segment"))?;
    let key = phc
        .hash
        .ok_or_else(|| HashError::invalid_hash_format("argon2 hash is missing its hash segment"))?;

    Ok(ResolvedHashPreferences::Argon2(ResolvedArgon2Preferences {
        kind,
        version,
        hash_length: key.len(),
        salt_length: salt.len(),
        memory_cost,
        time_cost,
        parallelism,
    }))
}

fn decode_hmac(name: &str, parts: &[&str]) -> HashResult<ResolvedHashPreferences> {
    let digest_algorithm = DigestAlgorithm::from_name(name)
        .ok_or_else(|| HashError::invalid_digest_algorithm(name))?;
    if parts.len() < 3 {
        return Err(HashError::invalid_hash_format(
            "hmac hash must carry salt and mac segments",
        ));
    }
    let salt = base64::decode(parts[1])?;

    Ok(ResolvedHashPreferences::Hmac(ResolvedHmacPreferences {
        digest_algorithm,
        salt_length: salt.len(),
    }))
}

fn decode_pbkdf2(name: &str, parts: &[&str]) -> HashResult<ResolvedHashPreferences> {
    let digest_algorithm = DigestAlgorithm::from_name(name)
        .ok_or_else(|| HashError::invalid_digest_algorithm(name))?;
    if parts.len() < 4 {
        return Err(HashError::invalid_hash_format(
            "pbkdf2 hash must carry iteration, salt, and key segments",
        ));
    }
    // An unparsable iteration segment falls back to the default count.
    let iterations = parts[1].parse::<u32>().unwrap_or(DEFAULT_PBKDF2_ITERATIONS);
    let salt = base64::decode(parts[2])?;
    let key = base64::decode(parts[3])?;

    Ok(ResolvedHashPreferences::Pbkdf2(ResolvedPbkdf2Preferences {
        digest_algorithm,
        salt_length: salt.len(),
        iterations,
        hash_length: key.len(),
    }))
}

fn decode_plain(
    digest_algorithm: DigestAlgorithm,
    parts: &[&str],
) -> HashResult<ResolvedHashPreferences> {
    if parts.len() == 2 {
        return Ok(ResolvedHashPreferences::PlainHash(ResolvedPlainHashPreferences {
            digest_algorithm,
        }));
    }
    let salt = base64::decode(parts[1])?;
    Ok(ResolvedHashPreferences::PlainHashSalt(ResolvedPlainHashSaltPreferences {
        digest_algorithm,
        salt_length: salt.len(),
    }))
}

fn required_param(phc: &PhcString, key: &str) -> HashResult<u32> {
    phc.param_u32(key).ok_or_else(|| {
        HashError::invalid_hash_format(format!("missing or unparsable parameter '{}'", key))
    })
}
