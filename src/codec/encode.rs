//! Encoded hash formats
//!
//! The five formats this crate writes itself. Bcrypt and Argon2 strings come
//! straight from their primitives and are never re-assembled here.

use super::base64;
use crate::preferences::DigestAlgorithm;

/// `$<digestId>$<hash>`
pub fn plain_hash(digest: DigestAlgorithm, hash: &[u8]) -> String {
    format!("${}${}", digest.identifier(), base64::encode(hash))
}

/// `$<digestId>$<salt>$<hash>`
pub fn plain_hash_salt(digest: DigestAlgorithm, salt: &[u8], hash: &[u8]) -> String {
    format!(
        "${}${}${}",
        digest.identifier(),
        base64::encode(salt),
        base64::encode(hash)
    )
}

/// `$hmac-<digestName>$<salt>$<mac>`
pub fn hmac(digest: DigestAlgorithm, salt: &[u8], mac: &[u8]) -> String {
    format!(
        "$hmac-{}${}${}",
        digest.name(),
        base64::encode(salt),
        base64::encode(mac)
    )
}

/// `$pbkdf2-<digestName>$<iterations>$<salt>$<key>`
pub fn pbkdf2(digest: DigestAlgorithm, iterations: u32, salt: &[u8], key: &[u8]) -> String {
    format!(
        "$pbkdf2-{}${}${}${}",
        digest.name(),
        iterations,
        base64::encode(salt),
        base64::encode(key)
    )
}

/// `$s2$n=<cost>,r=<blockSize>,p=<parallelization>$<salt>$<key>`
pub fn scrypt(cost: u32, block_size: u32, parallelization: u32, salt: &[u8], key: &[u8]) -> String {
    format!(
        "$s2$n={},r={},p={}${}${}",
        cost,
        block_size,
        parallelization,
        base64::encode(salt),
        base64::encode(key)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_hash_format() {
        assert_eq!(plain_hash(DigestAlgorithm::Sha256, b"ab"), "$5$YWI");
        assert_eq!(plain_hash(DigestAlgorithm::Md5, b"ab"), "$1$YWI");
    }

    #[test]
    fn test_plain_hash_salt_format() {
        assert_eq!(
            plain_hash_salt(DigestAlgorithm::Sha512, b"ab", b"abc"),
            "$6$YWI$YWJj"
        );
    }

    #[test]
    fn test_hmac_format_uses_digest_name() {
        assert_eq!(hmac(DigestAlgorithm::Sha1, b"ab", b"abc"), "$hmac-sha1$YWI$YWJj");
        assert_eq!(hmac(DigestAlgorithm::Md5, b"ab", b"abc"), "$hmac-md5$YWI$YWJj");
    }

    #[test]
    fn test_pbkdf2_format_embeds_iterations() {
        assert_eq!(
            pbkdf2(DigestAlgorithm::Sha256, 1000, b"ab", b"abc"),
            "$pbkdf2-sha256$1000$YWI$YWJj"
        );
    }

    #[test]
    fn test_scrypt_format_embeds_parameters() {
        assert_eq!(
            scrypt(16384, 8, 1, b"ab", b"abc"),
            "$s2$n=16384,r=8,p=1$YWI$YWJj"
        );
    }
}
