//! The fixed table of groups and curves known to tlskex

use crate::tls13::{
    GROUP_ID_SECP256R1, GROUP_ID_SECP384R1, GROUP_ID_SECP521R1, GROUP_ID_X25519, GROUP_ID_X448,
};
use crate::traditional::dh::{
    DH_2048_BYTE_LENGTH, DH_2048_PRIME_HEX, DH_3072_BYTE_LENGTH, DH_3072_PRIME_HEX,
    DH_4096_BYTE_LENGTH, DH_4096_PRIME_HEX, DH_GENERATOR, DH_MODULUS_2048, DH_MODULUS_3072,
    DH_MODULUS_4096,
};
use crate::traditional::ecdh::{
    ECDH_P256_PRIVATE_KEY_SIZE, ECDH_P256_PUBLIC_KEY_SIZE, ECDH_P384_PRIVATE_KEY_SIZE,
    ECDH_P384_PUBLIC_KEY_SIZE, ECDH_P521_PRIVATE_KEY_SIZE, ECDH_P521_PUBLIC_KEY_SIZE,
};
use crate::traditional::modern::{X25519_KEY_SIZE, X448_KEY_SIZE};

/// Shape of the key material a group works with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// Big-integer values modulo a prime
    FiniteField,
    /// Points on a short-Weierstrass named curve
    EllipticCurve,
    /// Fixed-size scalars on a Montgomery curve
    ModernCurve,
}

/// Domain parameters for one group or curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupParameter {
    /// Unique identifier, e.g. `ffdhe2048`, `secp256r1`, `x25519`
    pub name: &'static str,
    pub kind: GroupKind,
    /// Modulus size for finite-field groups, curve size otherwise
    pub bits: usize,
    /// Length of an encoded private key in bytes
    pub private_key_size: usize,
    /// Length of an encoded public key in bytes
    pub public_key_size: usize,
    /// Prime modulus as hex text (finite-field groups only)
    pub prime_hex: Option<&'static str>,
    /// Generator (finite-field groups only)
    pub generator: Option<u32>,
    /// TLS 1.3 NamedGroup value, if the group can appear in a key share
    pub wire_id: Option<u16>,
}

impl GroupParameter {
    pub const fn is_finite_field(&self) -> bool {
        matches!(self.kind, GroupKind::FiniteField)
    }

    pub const fn is_elliptic_curve(&self) -> bool {
        matches!(self.kind, GroupKind::EllipticCurve)
    }

    pub const fn is_modern_curve(&self) -> bool {
        matches!(self.kind, GroupKind::ModernCurve)
    }
}

const fn finite_field(
    name: &'static str,
    bits: usize,
    byte_length: usize,
    prime_hex: &'static str,
) -> GroupParameter {
    GroupParameter {
        name,
        kind: GroupKind::FiniteField,
        bits,
        private_key_size: byte_length,
        public_key_size: byte_length,
        prime_hex: Some(prime_hex),
        generator: Some(DH_GENERATOR),
        wire_id: None,
    }
}

const fn curve(
    name: &'static str,
    kind: GroupKind,
    bits: usize,
    private_key_size: usize,
    public_key_size: usize,
    wire_id: u16,
) -> GroupParameter {
    GroupParameter {
        name,
        kind,
        bits,
        private_key_size,
        public_key_size,
        prime_hex: None,
        generator: None,
        wire_id: Some(wire_id),
    }
}

/// Every group known to tlskex. Identifiers are unique.
pub static GROUPS: [GroupParameter; 8] = [
    finite_field("ffdhe2048", DH_MODULUS_2048, DH_2048_BYTE_LENGTH, DH_2048_PRIME_HEX),
    finite_field("ffdhe3072", DH_MODULUS_3072, DH_3072_BYTE_LENGTH, DH_3072_PRIME_HEX),
    finite_field("ffdhe4096", DH_MODULUS_4096, DH_4096_BYTE_LENGTH, DH_4096_PRIME_HEX),
    curve(
        "secp256r1",
        GroupKind::EllipticCurve,
        256,
        ECDH_P256_PRIVATE_KEY_SIZE,
        ECDH_P256_PUBLIC_KEY_SIZE,
        GROUP_ID_SECP256R1,
    ),
    curve(
        "secp384r1",
        GroupKind::EllipticCurve,
        384,
        ECDH_P384_PRIVATE_KEY_SIZE,
        ECDH_P384_PUBLIC_KEY_SIZE,
        GROUP_ID_SECP384R1,
    ),
    curve(
        "secp521r1",
        GroupKind::EllipticCurve,
        521,
        ECDH_P521_PRIVATE_KEY_SIZE,
        ECDH_P521_PUBLIC_KEY_SIZE,
        GROUP_ID_SECP521R1,
    ),
    curve(
        "x25519",
        GroupKind::ModernCurve,
        255,
        X25519_KEY_SIZE,
        X25519_KEY_SIZE,
        GROUP_ID_X25519,
    ),
    curve(
        "x448",
        GroupKind::ModernCurve,
        448,
        X448_KEY_SIZE,
        X448_KEY_SIZE,
        GROUP_ID_X448,
    ),
];

/// Alternate names accepted on lookup, mapped to the canonical identifier
pub static GROUP_ALIASES: [(&str, &str); 1] = [
    // OpenSSL's name for P-256
    ("prime256v1", "secp256r1"),
];
