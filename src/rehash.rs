//! Rehash policy
//!
//! Decides whether a stored hash still matches the parameters an operator
//! wants new hashes to carry. A `true` result means the caller should hash
//! the password again on its next successful verification.

use argon2::password_hash::PasswordHash;

use crate::codec::decode_preferences;
use crate::preferences::{HashPreferences, ResolvedArgon2Preferences, ResolvedHashPreferences};
use crate::shared::error::{HashError, HashResult};

/// Report whether a stored hash should be regenerated under `desired`
///
/// Stored parameters come from `known` when given, otherwise from decoding
/// the hash. A different algorithm tag always triggers a rehash; within a
/// tag, the observable parameters of the variant are compared field by
/// field.
pub fn needs_rehash(
    hash: &str,
    desired: &HashPreferences,
    known: Option<&ResolvedHashPreferences>,
) -> HashResult<bool> {
    let stored = match known {
        Some(preferences) => *preferences,
        None => decode_preferences(hash)?,
    };
    let desired = desired.resolve();

    use ResolvedHashPreferences as R;
    let result = match (&stored, &desired) {
        (R::PlainHash(s), R::PlainHash(d)) => s.digest_algorithm != d.digest_algorithm,
        (R::PlainHashSalt(s), R::PlainHashSalt(d)) => {
            s.digest_algorithm != d.digest_algorithm || s.salt_length != d.salt_length
        }
        (R::Hmac(s), R::Hmac(d)) => {
            s.digest_algorithm != d.digest_algorithm || s.salt_length != d.salt_length
        }
        (R::Pbkdf2(s), R::Pbkdf2(d)) => {
            s.digest_algorithm != d.digest_algorithm
                || s.salt_length != d.salt_length
                || s.iterations != d.iterations
                || s.hash_length != d.hash_length
        }
        (R::Bcrypt(s), R::Bcrypt(d)) => s.minor_version != d.minor_version || s.rounds != d.rounds,
        (R::Scrypt(s), R::Scrypt(d)) => {
            s.hash_length != d.hash_length
                || s.cost != d.cost
                || s.block_size != d.block_size
                || s.parallelization != d.parallelization
                || s.salt_length != d.salt_length
        }
        (R::Argon2(_), R::Argon2(d)) => argon2_needs_rehash(hash, d)?,
        _ => true,
    };
    Ok(result)
}

/// Argon2 compares the version and the memory and time costs recorded in
/// the hash string itself, nothing else. The string is parsed even when the
/// caller supplied known preferences, and a string missing any of the three
/// fields always triggers a rehash. Type, parallelism, and the length
/// fields are deliberately left out of the comparison.
fn argon2_needs_rehash(hash: &str, desired: &ResolvedArgon2Preferences) -> HashResult<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| HashError::invalid_hash_format(format!("unparsable argon2 hash: {}", e)))?;

    let version = match parsed.version {
        Some(version) => version,
        None => return Ok(true),
    };
    let memory_cost = match parsed.params.get_decimal("m") {
        Some(value) => value,
        None => return Ok(true),
    };
    let time_cost = match parsed.params.get_decimal("t") {
        Some(value) => value,
        None => return Ok(true),
    };

    Ok(version != desired.version.number()
        || memory_cost != desired.memory_cost
        || time_cost != desired.time_cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::base64;
    use crate::preferences::{
        Argon2Preferences, Argon2Type, Argon2Version, BcryptMinorVersion, BcryptPreferences,
        DigestAlgorithm, Pbkdf2Preferences, PlainHashPreferences, ScryptPreferences,
    };

    fn pbkdf2_hash(iterations: u32) -> String {
        format!(
            "$pbkdf2-sha512${}${}${}",
            iterations,
            base64::encode(&[1u8; 16]),
            base64::encode(&[2u8; 64]),
        )
    }

    fn pbkdf2_desired(iterations: u32) -> HashPreferences {
        HashPreferences::Pbkdf2(Pbkdf2Preferences {
            iterations: Some(iterations),
            ..Default::default()
        })
    }

    fn argon2_hash(params: &str) -> String {
        format!(
            "$argon2id$v=19${}${}${}",
            params,
            base64::encode(&[1u8; 16]),
            base64::encode(&[2u8; 32]),
        )
    }

    #[test]
    fn test_matching_pbkdf2_needs_no_rehash() {
        assert!(!needs_rehash(&pbkdf2_hash(1000), &pbkdf2_desired(1000), None).unwrap());
    }

    #[test]
    fn test_raised_pbkdf2_iterations_need_rehash() {
        assert!(needs_rehash(&pbkdf2_hash(1000), &pbkdf2_desired(2000), None).unwrap());
    }

    #[test]
    fn test_changed_algorithm_needs_rehash() {
        let desired = HashPreferences::Argon2(Argon2Preferences::default());
        assert!(needs_rehash(&pbkdf2_hash(1000), &desired, None).unwrap());
    }

    #[test]
    fn test_changed_digest_needs_rehash() {
        let desired = HashPreferences::PlainHash(PlainHashPreferences {
            digest_algorithm: Some(DigestAlgorithm::Sha512),
        });
        let hash = "$5$K7gNU3sdo+OL0wNhqoVWhr3g6s1xYv72ol/pe/Unols";
        assert!(needs_rehash(hash, &desired, None).unwrap());
    }

    #[test]
    fn test_bcrypt_compares_minor_version_and_rounds() {
        let hash = "$2b$10$abcdefghijklmnopqrstuv";
        let matching = HashPreferences::Bcrypt(BcryptPreferences::default());
        assert!(!needs_rehash(hash, &matching, None).unwrap());

        let stronger = HashPreferences::Bcrypt(BcryptPreferences {
            rounds: Some(12),
            ..Default::default()
        });
        assert!(needs_rehash(hash, &stronger, None).unwrap());

        let other_minor = HashPreferences::Bcrypt(BcryptPreferences {
            minor_version: Some(BcryptMinorVersion::A),
            ..Default::default()
        });
        assert!(needs_rehash(hash, &other_minor, None).unwrap());
    }

    #[test]
    fn test_scrypt_compares_every_field() {
        let hash = format!(
            "$s2$n=16384,r=8,p=1${}${}",
            base64::encode(&[1u8; 16]),
            base64::encode(&[2u8; 32]),
        );
        let matching = HashPreferences::Scrypt(ScryptPreferences::default());
        assert!(!needs_rehash(&hash, &matching, None).unwrap());

        let wider_blocks = HashPreferences::Scrypt(ScryptPreferences {
            block_size: Some(16),
            ..Default::default()
        });
        assert!(needs_rehash(&hash, &wider_blocks, None).unwrap());
    }

    #[test]
    fn test_known_preferences_replace_decoding() {
        let known = pbkdf2_desired(1000).resolve();
        // The string is never parsed when the caller vouches for the
        // stored parameters of a codec-owned family.
        assert!(!needs_rehash("$pbkdf2-sha512$damaged", &pbkdf2_desired(1000), Some(&known))
            .unwrap());
        assert!(needs_rehash("$pbkdf2-sha512$damaged", &pbkdf2_desired(2000), Some(&known))
            .unwrap());
    }

    #[test]
    fn test_argon2_matching_parameters_need_no_rehash() {
        let hash = argon2_hash("m=65536,t=3,p=4");
        let desired = HashPreferences::Argon2(Argon2Preferences::default());
        assert!(!needs_rehash(&hash, &desired, None).unwrap());
    }

    #[test]
    fn test_argon2_rehashes_on_version_memory_or_time() {
        let hash = argon2_hash("m=65536,t=3,p=4");

        let older_version = HashPreferences::Argon2(Argon2Preferences {
            version: Some(Argon2Version::V1_0),
            ..Default::default()
        });
        assert!(needs_rehash(&hash, &older_version, None).unwrap());

        let more_memory = HashPreferences::Argon2(Argon2Preferences {
            memory_cost: Some(131072),
            ..Default::default()
        });
        assert!(needs_rehash(&hash, &more_memory, None).unwrap());

        let more_time = HashPreferences::Argon2(Argon2Preferences {
            time_cost: Some(4),
            ..Default::default()
        });
        assert!(needs_rehash(&hash, &more_time, None).unwrap());
    }

    #[test]
    fn test_argon2_ignores_type_parallelism_and_lengths() {
        let hash = argon2_hash("m=65536,t=3,p=4");

        let other_type = HashPreferences::Argon2(Argon2Preferences {
            kind: Some(Argon2Type::D),
            ..Default::default()
        });
        assert!(!needs_rehash(&hash, &other_type, None).unwrap());

        let more_lanes = HashPreferences::Argon2(Argon2Preferences {
            parallelism: Some(8),
            ..Default::default()
        });
        assert!(!needs_rehash(&hash, &more_lanes, None).unwrap());

        let longer_key = HashPreferences::Argon2(Argon2Preferences {
            hash_length: Some(64),
            salt_length: Some(32),
            ..Default::default()
        });
        assert!(!needs_rehash(&hash, &longer_key, None).unwrap());
    }

    #[test]
    fn test_argon2_reparses_even_with_known_preferences() {
        let known = HashPreferences::Argon2(Argon2Preferences::default()).resolve();
        let desired = HashPreferences::Argon2(Argon2Preferences::default());
        // A string without its memory parameter forces a rehash no matter
        // what the caller claims about it.
        let hash = argon2_hash("t=3,p=4");
        assert!(needs_rehash(&hash, &desired, Some(&known)).unwrap());
    }

    #[test]
    fn test_argon2_missing_version_forces_rehash() {
        let hash = format!(
            "$argon2id$m=65536,t=3,p=4${}${}",
            base64::encode(&[1u8; 16]),
            base64::encode(&[2u8; 32]),
        );
        let known = HashPreferences::Argon2(Argon2Preferences::default()).resolve();
        let desired = HashPreferences::Argon2(Argon2Preferences::default());
        assert!(needs_rehash(&hash, &desired, Some(&known)).unwrap());
    }

    #[test]
    fn test_rehash_rejects_undecodable_hash() {
        let desired = HashPreferences::default();
        let error = needs_rehash("$bogus$xx", &desired, None).unwrap_err();
        assert!(matches!(error, HashError::UnknownAlgorithm(_)));
    }
}
