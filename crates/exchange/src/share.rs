//! Raw key-share generation and agreement, dispatched on the group
//!
//! Used by the session types, which work with bare byte strings rather than
//! typed keys and return the un-hashed agreement output.

use crate::ecdh::{EcProvider, Ecdhe, NativeEcProvider};
use crate::x25519;
use crate::x448::X448;
use rand::{CryptoRng, RngCore};
use tlskex_api::{Error, PrivateKey, PublicKey, Result};
use tlskex_params::GroupParameter;
use zeroize::Zeroizing;

/// Fresh (private, public) pair on `group`
pub(crate) fn generate<R: CryptoRng + RngCore>(
    group: &GroupParameter,
    rng: &mut R,
) -> Result<(Zeroizing<Vec<u8>>, Vec<u8>)> {
    match group.name {
        x25519::X25519::NAME => Ok(x25519::generate(rng)),
        X448::NAME => Err(X448::unsupported()),
        _ if group.is_elliptic_curve() => NativeEcProvider.generate(group, rng),
        other => Err(not_a_share_group(other)),
    }
}

/// Raw agreement output of `private` with the peer's `public`
pub(crate) fn agree(
    group: &'static GroupParameter,
    private: &[u8],
    public: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    match group.name {
        x25519::X25519::NAME => x25519::agree(private, public),
        X448::NAME => Err(X448::unsupported()),
        _ if group.is_elliptic_curve() => Ecdhe::new().agree(
            &PrivateKey::from_slice(group, private),
            &PublicKey::from_slice(group, public),
        ),
        other => Err(not_a_share_group(other)),
    }
}

fn not_a_share_group(name: &str) -> Error {
    Error::invalid_curve("key share", format!("Unsupported key share group: {name}"))
}
