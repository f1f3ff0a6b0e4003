//! TLS 1.3 named-group identifiers (RFC 8446 §4.2.7) and key_share framing

/// secp256r1 (P-256)
pub const GROUP_ID_SECP256R1: u16 = 0x0017;

/// secp384r1 (P-384)
pub const GROUP_ID_SECP384R1: u16 = 0x0018;

/// secp521r1 (P-521)
pub const GROUP_ID_SECP521R1: u16 = 0x0019;

/// x25519
pub const GROUP_ID_X25519: u16 = 0x001D;

/// x448
pub const GROUP_ID_X448: u16 = 0x001E;

/// Extension type of `key_share`
pub const KEY_SHARE_EXTENSION_TYPE: u16 = 51;

/// Size of the group field of a KeyShareEntry
pub const KEY_SHARE_GROUP_SIZE: usize = 2;

/// Size of the length prefix of a KeyShareEntry payload
pub const KEY_SHARE_LENGTH_SIZE: usize = 2;

/// Fixed overhead of one KeyShareEntry on the wire
pub const KEY_SHARE_HEADER_SIZE: usize = KEY_SHARE_GROUP_SIZE + KEY_SHARE_LENGTH_SIZE;
