//! Default parameter values filled in during resolution

use super::digest_algorithm::DigestAlgorithm;
use super::variants::{Argon2Type, Argon2Version, BcryptMinorVersion};

pub const DEFAULT_DIGEST_ALGORITHM: DigestAlgorithm = DigestAlgorithm::Sha512;
pub const DEFAULT_SALT_LENGTH: usize = 16;

pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 1;

pub const DEFAULT_BCRYPT_MINOR_VERSION: BcryptMinorVersion = BcryptMinorVersion::B;
pub const DEFAULT_BCRYPT_ROUNDS: u32 = 10;

pub const DEFAULT_SCRYPT_HASH_LENGTH: usize = 32;
pub const DEFAULT_SCRYPT_COST: u32 = 16384;
pub const DEFAULT_SCRYPT_BLOCK_SIZE: u32 = 8;
pub const DEFAULT_SCRYPT_PARALLELIZATION: u32 = 1;

pub const DEFAULT_ARGON2_TYPE: Argon2Type = Argon2Type::Id;
pub const DEFAULT_ARGON2_VERSION: Argon2Version = Argon2Version::V1_3;
pub const DEFAULT_ARGON2_HASH_LENGTH: usize = 32;
pub const DEFAULT_ARGON2_SALT_LENGTH: usize = 16;
pub const DEFAULT_ARGON2_MEMORY_COST: u32 = 65536;
pub const DEFAULT_ARGON2_TIME_COST: u32 = 3;
pub const DEFAULT_ARGON2_PARALLELISM: u32 = 4;
