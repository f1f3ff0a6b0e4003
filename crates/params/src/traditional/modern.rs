//! Constants for the fixed-size Montgomery curves (RFC 7748)

/// X25519 scalar and point size in bytes
pub const X25519_KEY_SIZE: usize = 32;

/// X448 scalar and point size in bytes
pub const X448_KEY_SIZE: usize = 56;
