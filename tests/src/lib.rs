//! Shared helpers for the tlskex integration and property tests

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tlskex_api::{KeyExchange, KeyPair, KeyPairOptions, Result, SecretOptions, SharedSecret};

/// Finite-field groups in the registry
pub const FINITE_FIELD_GROUPS: [&str; 3] = ["ffdhe2048", "ffdhe3072", "ffdhe4096"];

/// Named curves ECDHE accepts
pub const NAMED_CURVES: [&str; 3] = ["secp256r1", "secp384r1", "secp521r1"];

/// TLS 1.3 groups with their NamedGroup values
pub const WIRE_GROUPS: [(&str, u16); 5] = [
    ("secp256r1", 23),
    ("secp384r1", 24),
    ("secp521r1", 25),
    ("x25519", 29),
    ("x448", 30),
];

/// Deterministic RNG so failures reproduce
pub fn test_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Two key pairs generated with the same options
pub fn two_pairs<E: KeyExchange>(
    exchange: &E,
    rng: &mut ChaCha20Rng,
    options: &KeyPairOptions,
) -> Result<(KeyPair, KeyPair)> {
    Ok((
        exchange.generate_key_pair(rng, options)?,
        exchange.generate_key_pair(rng, options)?,
    ))
}

/// The secret computed from each side of a pair of key pairs
pub fn agree_both_ways<E: KeyExchange>(
    exchange: &E,
    a: &KeyPair,
    b: &KeyPair,
    options: &SecretOptions,
) -> Result<(SharedSecret, SharedSecret)> {
    Ok((
        exchange.compute_shared_secret(a.private_key(), b.public_key(), options)?,
        exchange.compute_shared_secret(b.private_key(), a.public_key(), options)?,
    ))
}
