//! Async facade
//!
//! The hashing and verification entry points run the key derivation work on
//! tokio's blocking pool so an expensive KDF never stalls an async worker
//! thread. Rehash checks and preference decoding are pure parsing and stay
//! synchronous.

use tokio::task;

use crate::hasher;
use crate::preferences::{HashPreferences, ResolvedHashPreferences};
use crate::rehash;
use crate::shared::error::HashResult;
use crate::verifier;

/// Hash a password on the blocking pool
///
/// `None` preferences select the process-wide default, Argon2 with its
/// default parameters.
pub async fn hash_password(
    password: &str,
    preferences: Option<&HashPreferences>,
) -> HashResult<String> {
    let password = password.to_owned();
    let preferences = preferences.copied().unwrap_or_default();
    let handle = task::spawn_blocking(move || hasher::hash_password(&password, &preferences));
    handle.await?
}

/// Verify a password against an encoded hash on the blocking pool
pub async fn verify_password(
    password: &str,
    hash: &str,
    known: Option<ResolvedHashPreferences>,
) -> HashResult<bool> {
    let password = password.to_owned();
    let hash = hash.to_owned();
    let handle =
        task::spawn_blocking(move || verifier::verify_password(&password, &hash, known.as_ref()));
    handle.await?
}

/// Report whether a stored hash should be regenerated
///
/// `None` desired preferences compare the stored hash against the
/// process-wide default.
pub fn needs_rehash(
    hash: &str,
    desired: Option<&HashPreferences>,
    known: Option<&ResolvedHashPreferences>,
) -> HashResult<bool> {
    let desired = desired.copied().unwrap_or_default();
    rehash::needs_rehash(hash, &desired, known)
}

/// Recover the hash preferences already embedded in an encoded hash
pub fn decode_preferences(hash: &str) -> HashResult<ResolvedHashPreferences> {
    crate::codec::decode_preferences(hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{DigestAlgorithm, Pbkdf2Preferences, PlainHashPreferences};

    fn cheap_pbkdf2() -> HashPreferences {
        HashPreferences::Pbkdf2(Pbkdf2Preferences {
            digest_algorithm: Some(DigestAlgorithm::Sha256),
            iterations: Some(100),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_default_preferences_are_argon2() {
        let hash = hash_password("secret", None).await.unwrap();
        assert!(hash.starts_with("$argon2id$v=19$m=65536,t=3,p=4$"));
        assert!(verify_password("secret", &hash, None).await.unwrap());
        assert!(!needs_rehash(&hash, None, None).unwrap());
    }

    #[tokio::test]
    async fn test_hash_verify_round_trip() {
        let preferences = cheap_pbkdf2();
        let hash = hash_password("secret", Some(&preferences)).await.unwrap();
        assert!(verify_password("secret", &hash, None).await.unwrap());
        assert!(!verify_password("wrong", &hash, None).await.unwrap());
    }

    #[tokio::test]
    async fn test_verify_with_known_preferences() {
        let preferences = cheap_pbkdf2();
        let hash = hash_password("secret", Some(&preferences)).await.unwrap();
        let known = decode_preferences(&hash).unwrap();
        assert!(verify_password("secret", &hash, Some(known)).await.unwrap());
    }

    #[tokio::test]
    async fn test_needs_rehash_against_default_policy() {
        let hash = hash_password("secret", Some(&cheap_pbkdf2())).await.unwrap();
        assert!(needs_rehash(&hash, None, None).unwrap());
    }

    #[tokio::test]
    async fn test_concurrent_operations() {
        let preferences = cheap_pbkdf2();
        let (first, second) = tokio::join!(
            hash_password("one", Some(&preferences)),
            hash_password("two", Some(&preferences)),
        );
        let first = first.unwrap();
        let second = second.unwrap();
        assert!(verify_password("one", &first, None).await.unwrap());
        assert!(verify_password("two", &second, None).await.unwrap());
        assert!(!verify_password("one", &second, None).await.unwrap());
    }

    #[test]
    fn test_decode_preferences_entry_point() {
        let decoded =
            decode_preferences("$5$K7gNU3sdo+OL0wNhqoVWhr3g6s1xYv72ol/pe/Unols").unwrap();
        assert_eq!(
            decoded,
            ResolvedHashPreferences::PlainHash(crate::preferences::ResolvedPlainHashPreferences {
                digest_algorithm: DigestAlgorithm::Sha256,
            })
        );
    }

    #[test]
    fn test_needs_rehash_is_synchronous() {
        // Exercised without a runtime on purpose.
        let hash = "$5$K7gNU3sdo+OL0wNhqoVWhr3g6s1xYv72ol/pe/Unols";
        let desired = HashPreferences::PlainHash(PlainHashPreferences {
            digest_algorithm: Some(DigestAlgorithm::Sha256),
        });
        assert!(!needs_rehash(hash, Some(&desired), None).unwrap());
    }
}
