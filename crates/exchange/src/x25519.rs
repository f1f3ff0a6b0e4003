//! X25519 (RFC 7748)
//!
//! Keys and the shared secret are fixed 32-byte strings. The scalar
//! multiplication output is returned as-is, without hashing.

use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use tlskex_api::error::validate;
use tlskex_api::{
    Error, KeyExchange, KeyPair, KeyPairOptions, PrivateKey, PublicKey, Result, SecretOptions,
    SharedSecret,
};
use tlskex_params::traditional::modern::X25519_KEY_SIZE;
use zeroize::Zeroizing;

use crate::registry;

const CONTEXT: &str = "x25519";

#[derive(Debug, Clone, Copy, Default)]
pub struct X25519;

impl X25519 {
    pub const NAME: &'static str = "x25519";
}

/// Fresh (private, public) pair
pub(crate) fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> (Zeroizing<Vec<u8>>, Vec<u8>) {
    let secret = x25519_dalek::StaticSecret::random_from_rng(&mut *rng);
    let public = x25519_dalek::PublicKey::from(&secret);
    (
        Zeroizing::new(secret.to_bytes().to_vec()),
        public.as_bytes().to_vec(),
    )
}

/// Raw X25519 output; an all-zero result means the peer sent a low-order point
pub(crate) fn agree(private: &[u8], public: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    validate::length(CONTEXT, "private key", private.len(), X25519_KEY_SIZE)?;
    validate::length(CONTEXT, "public key", public.len(), X25519_KEY_SIZE)?;

    let scalar: [u8; X25519_KEY_SIZE] = private.try_into()?;
    let point: [u8; X25519_KEY_SIZE] = public.try_into()?;
    let secret = x25519_dalek::StaticSecret::from(scalar);
    let shared = secret.diffie_hellman(&x25519_dalek::PublicKey::from(point));

    if bool::from(shared.as_bytes().ct_eq(&[0u8; X25519_KEY_SIZE])) {
        return Err(Error::key_exchange(
            CONTEXT,
            "shared secret is all zero (low-order public key)",
        ));
    }
    Ok(Zeroizing::new(shared.as_bytes().to_vec()))
}

impl KeyExchange for X25519 {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn generate_key_pair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        options: &KeyPairOptions,
    ) -> Result<KeyPair> {
        for requested in [options.group.as_deref(), options.curve.as_deref()]
            .into_iter()
            .flatten()
        {
            validate::curve(
                requested == Self::NAME,
                CONTEXT,
                &format!("{requested} is not x25519"),
            )?;
        }
        let group = registry::resolve(Self::NAME)?;
        let (private, public) = generate(rng);
        log::debug!("x25519: generated key pair");

        Ok(KeyPair::new(
            PrivateKey::from_slice(group, &private),
            PublicKey::new(group, public),
            group.bits,
        ))
    }

    /// `options` is ignored: the raw output is the shared secret
    fn compute_shared_secret(
        &self,
        local: &PrivateKey,
        peer: &PublicKey,
        _options: &SecretOptions,
    ) -> Result<SharedSecret> {
        if local.group().name != peer.group().name {
            return Err(Error::curve_mismatch(
                CONTEXT,
                local.group().name,
                peer.group().name,
            ));
        }
        validate::curve(
            local.group().name == Self::NAME,
            CONTEXT,
            &format!("{} keys cannot be used with x25519", local.group().name),
        )?;

        let raw = agree(local.as_bytes(), peer.as_bytes())?;
        Ok(SharedSecret::from_slice(&raw))
    }
}
