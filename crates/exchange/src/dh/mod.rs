//! Finite-field Diffie-Hellman (DHE)
//!
//! Key pairs are generated on one of the registry's MODP groups. An unknown or
//! missing group falls back to the default group; the returned pair always
//! reports the group that was actually used. The raw shared value is hashed
//! before it is returned.

mod session;

pub use session::DheClientSession;

use crate::derive::derive;
use crate::registry;
use num_bigint::{BigUint, RandBigInt};
use rand::{CryptoRng, RngCore};
use tlskex_api::error::validate;
use tlskex_api::{
    Error, KeyExchange, KeyPair, KeyPairOptions, PrivateKey, PublicKey, Result, SecretOptions,
    SharedSecret,
};
use tlskex_params::traditional::dh::{private_exponent_bits, DH_DEFAULT_GROUP, DH_GENERATOR};
use tlskex_params::GroupParameter;
use zeroize::Zeroizing;

const CONTEXT: &str = "dhe";

/// Ephemeral finite-field Diffie-Hellman over the RFC 3526 groups
#[derive(Debug, Clone, Copy, Default)]
pub struct Dhe;

impl Dhe {
    pub const NAME: &'static str = "dhe";

    /// The group a key-generation request ends up on
    pub fn select_group(requested: Option<&str>) -> Result<&'static GroupParameter> {
        if let Some(group) = requested
            .and_then(registry::find)
            .filter(|g| g.is_finite_field())
        {
            return Ok(group);
        }
        log::debug!(
            "dhe: group {:?} not available, using {}",
            requested,
            DH_DEFAULT_GROUP
        );
        registry::resolve(DH_DEFAULT_GROUP)
    }
}

impl KeyExchange for Dhe {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn generate_key_pair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        options: &KeyPairOptions,
    ) -> Result<KeyPair> {
        validate::parameter(
            options.curve.is_none(),
            CONTEXT,
            "curve option does not apply to finite-field exchange",
        )?;
        let group = Self::select_group(options.group.as_deref())?;
        let p = registry::prime(group)?;
        let g = BigUint::from(group.generator.unwrap_or(DH_GENERATOR));

        let x = random_exponent(rng, private_exponent_bits(group.bits));
        let y = g.modpow(&x, p);
        log::debug!("dhe: generated key pair on {}", group.name);

        Ok(KeyPair::new(
            PrivateKey::new(group, x.to_bytes_be()),
            PublicKey::new(group, left_pad(&y, group.public_key_size)),
            group.bits,
        ))
    }

    fn compute_shared_secret(
        &self,
        local: &PrivateKey,
        peer: &PublicKey,
        options: &SecretOptions,
    ) -> Result<SharedSecret> {
        validate::key(
            local.group().is_finite_field(),
            CONTEXT,
            "private key is not a finite-field key",
        )?;
        validate::key(
            peer.group().is_finite_field(),
            CONTEXT,
            "public key is not a finite-field key",
        )?;
        if local.group().name != peer.group().name {
            return Err(Error::curve_mismatch(
                CONTEXT,
                local.group().name,
                peer.group().name,
            ));
        }
        validate::key(
            peer.len() <= peer.group().public_key_size,
            CONTEXT,
            "public value is longer than the prime",
        )?;

        let p = registry::prime(local.group())?;
        let x = BigUint::from_bytes_be(local.as_bytes());
        let y = BigUint::from_bytes_be(peer.as_bytes());
        let z = agree(&x, &y, p)?;
        Ok(derive(options.hash, &z))
    }
}

/// Random exponent of exactly `bits` bits
pub(crate) fn random_exponent<R: CryptoRng + RngCore>(rng: &mut R, bits: usize) -> BigUint {
    let mut x = rng.gen_biguint(bits as u64);
    x.set_bit(bits as u64 - 1, true);
    x
}

/// Big-endian bytes of `value`, left-padded with zeros to `len`
pub(crate) fn left_pad(value: &BigUint, len: usize) -> Vec<u8> {
    let bytes = value.to_bytes_be();
    if bytes.len() >= len {
        return bytes;
    }
    let mut out = vec![0u8; len - bytes.len()];
    out.extend_from_slice(&bytes);
    out
}

/// `y^x mod p` with leading zero bytes stripped
///
/// The private exponent must be non-zero and the peer value must lie in
/// `(1, p-1)`. A result of 0 or 1 means the inputs were degenerate.
pub(crate) fn agree(x: &BigUint, y: &BigUint, p: &BigUint) -> Result<Zeroizing<Vec<u8>>> {
    let one = BigUint::from(1u8);
    validate::key(x.bits() > 0, CONTEXT, "private exponent is zero")?;
    validate::key(
        *y > one && *y < p - &one,
        CONTEXT,
        "peer public value is out of range",
    )?;

    let z = y.modpow(x, p);
    if z <= one {
        return Err(Error::key_exchange(CONTEXT, "degenerate shared value"));
    }
    Ok(Zeroizing::new(z.to_bytes_be()))
}
