//! Constants for Elliptic Curve Diffie-Hellman over the NIST prime curves

/// Default curve for ECDHE when the caller names none
pub const ECDH_DEFAULT_CURVE: &str = "secp256r1";

/// Size of public key for ECDH using P-256 in bytes (uncompressed format)
pub const ECDH_P256_PUBLIC_KEY_SIZE: usize = 65;

/// Size of public key for ECDH using P-384 in bytes (uncompressed format)
pub const ECDH_P384_PUBLIC_KEY_SIZE: usize = 97;

/// Size of public key for ECDH using P-521 in bytes (uncompressed format)
pub const ECDH_P521_PUBLIC_KEY_SIZE: usize = 133;

/// Size of private key for ECDH using P-256 in bytes
pub const ECDH_P256_PRIVATE_KEY_SIZE: usize = 32;

/// Size of private key for ECDH using P-384 in bytes
pub const ECDH_P384_PRIVATE_KEY_SIZE: usize = 48;

/// Size of private key for ECDH using P-521 in bytes
pub const ECDH_P521_PRIVATE_KEY_SIZE: usize = 66;
