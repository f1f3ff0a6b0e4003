//! Elliptic-curve Diffie-Hellman (ECDHE) over the NIST prime curves
//!
//! Unlike DHE there is no fallback: an unknown curve is an error. Keys are a
//! big-endian scalar of the curve's field length and a SEC1 uncompressed
//! point. Both keys of a computation must name the same curve; the
//! x-coordinate of the shared point is hashed before it is returned.

mod provider;
mod session;

pub use provider::{EcProvider, NativeEcProvider, NativePublic, NativeSecret};
pub use session::EcdheClientSession;

use crate::derive::derive;
use crate::registry;
use rand::{CryptoRng, RngCore};
use tlskex_api::error::validate;
use tlskex_api::{
    Error, KeyExchange, KeyPair, KeyPairOptions, PrivateKey, PublicKey, Result, ResultExt,
    SecretOptions, SharedSecret,
};
use tlskex_params::traditional::ecdh::ECDH_DEFAULT_CURVE;
use tlskex_params::GroupParameter;
use zeroize::Zeroizing;

const CONTEXT: &str = "ecdhe";

/// Ephemeral ECDH, generic over the arithmetic provider
#[derive(Debug, Clone, Default)]
pub struct Ecdhe<P = NativeEcProvider> {
    provider: P,
}

impl Ecdhe {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P> Ecdhe<P> {
    pub const NAME: &'static str = "ecdhe";
}

impl<P: EcProvider> Ecdhe<P> {
    /// Use a custom arithmetic provider
    pub fn with_provider(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Resolve `name` to a named curve the provider supports
    pub fn resolve_curve(&self, name: &str) -> Result<&'static GroupParameter> {
        let curve = registry::resolve(name).with_context(CONTEXT)?;
        if !curve.is_elliptic_curve() || !self.provider.supports(curve) {
            return Err(Error::invalid_curve(
                CONTEXT,
                format!("Unsupported elliptic curve: {name}"),
            ));
        }
        Ok(curve)
    }

    /// Validate both halves and return the raw x-coordinate of the shared point
    pub(crate) fn agree(&self, local: &PrivateKey, peer: &PublicKey) -> Result<Zeroizing<Vec<u8>>> {
        validate::key(
            local.group().is_elliptic_curve(),
            CONTEXT,
            "private key is not an EC key",
        )?;
        validate::key(
            peer.group().is_elliptic_curve(),
            CONTEXT,
            "public key is not an EC key",
        )?;
        if local.group().name != peer.group().name {
            return Err(Error::curve_mismatch(
                CONTEXT,
                local.group().name,
                peer.group().name,
            ));
        }

        let curve = local.group();
        validate::length(CONTEXT, "private key", local.len(), curve.private_key_size)?;
        validate::length(CONTEXT, "public key", peer.len(), curve.public_key_size)?;
        let secret = self.provider.decode_private(curve, local.as_bytes())?;
        let point = self.provider.decode_public(curve, peer.as_bytes())?;

        self.provider.derive(curve, &secret, &point)
    }
}

impl<P: EcProvider> KeyExchange for Ecdhe<P> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn generate_key_pair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        options: &KeyPairOptions,
    ) -> Result<KeyPair> {
        validate::parameter(
            options.group.is_none(),
            CONTEXT,
            "group option does not apply to elliptic-curve exchange",
        )?;
        let curve = self.resolve_curve(options.curve.as_deref().unwrap_or(ECDH_DEFAULT_CURVE))?;
        let (scalar, point) = self.provider.generate(curve, rng)?;
        log::debug!("ecdhe: generated key pair on {}", curve.name);

        Ok(KeyPair::new(
            PrivateKey::from_slice(curve, &scalar),
            PublicKey::new(curve, point),
            curve.bits,
        ))
    }

    fn compute_shared_secret(
        &self,
        local: &PrivateKey,
        peer: &PublicKey,
        options: &SecretOptions,
    ) -> Result<SharedSecret> {
        let raw = self.agree(local, peer)?;
        Ok(derive(options.hash, &raw))
    }
}
