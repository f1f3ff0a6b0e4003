//! Output sizes of the hashes available to secret derivation

/// Output size of SHA-224 in bytes
pub const SHA224_OUTPUT_SIZE: usize = 28;

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA-384 in bytes
pub const SHA384_OUTPUT_SIZE: usize = 48;

/// Output size of SHA-512 in bytes
pub const SHA512_OUTPUT_SIZE: usize = 64;
