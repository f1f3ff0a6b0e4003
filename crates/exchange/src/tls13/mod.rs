//! TLS 1.3 key shares
//!
//! One group identifier space covers the NIST curves and the modern curves.
//! Generation and agreement are routed to the X25519/X448 path or the
//! elliptic-curve path by group. The agreement output is returned unhashed:
//! in TLS 1.3 it feeds the key schedule directly (RFC 8446 §7.4).

pub mod wire;

pub use wire::{
    decode_client_shares, encode_client_hello_extension, encode_client_shares, KeyShareEntry,
};

use crate::{registry, share};
use rand::{CryptoRng, RngCore};
use tlskex_api::error::validate;
use tlskex_api::{Error, PreMasterSecret, Result};
use tlskex_params::GroupParameter;
use zeroize::Zeroizing;

const CONTEXT: &str = "tls13 key share";

/// Groups that may appear in a key share
pub const SUPPORTED_GROUPS: [&str; 5] = ["secp256r1", "secp384r1", "secp521r1", "x25519", "x448"];

/// State for one side's key share in a TLS 1.3 handshake
#[derive(Default)]
pub struct Tls13KeyExchange {
    group: Option<&'static GroupParameter>,
    peer_key_share: Option<Vec<u8>>,
    private: Option<Zeroizing<Vec<u8>>>,
    key_share: Option<Vec<u8>>,
    shared_secret: Option<Zeroizing<Vec<u8>>>,
}

impl Tls13KeyExchange {
    pub const NAME: &'static str = "tls13";

    pub fn new() -> Self {
        Self::default()
    }

    /// Select `group` and record the peer's share in one step
    pub fn set_key_share_parameters(&mut self, group: &str, peer_share: &[u8]) -> Result<()> {
        self.set_group(group)?;
        self.set_peer_key_share(peer_share);
        Ok(())
    }

    /// Select the group; any previously generated share is discarded
    pub fn set_group(&mut self, group: &str) -> Result<()> {
        let resolved = registry::find(group)
            .filter(|g| SUPPORTED_GROUPS.contains(&g.name))
            .ok_or_else(|| {
                Error::invalid_curve(CONTEXT, format!("Unsupported key share group: {group}"))
            })?;

        if self.group.map(|g| g.name) != Some(resolved.name) {
            self.private = None;
            self.key_share = None;
            self.shared_secret = None;
        }
        self.group = Some(resolved);
        Ok(())
    }

    /// Record the peer's raw share. It is decoded when the secret is computed.
    pub fn set_peer_key_share(&mut self, share: &[u8]) {
        self.peer_key_share = Some(share.to_vec());
        self.shared_secret = None;
    }

    /// Accept an encoded KeyShareEntry from the peer.
    ///
    /// Selects its group if none is selected yet; otherwise the entry must be
    /// for the selected group.
    pub fn accept_key_share_entry(&mut self, encoded: &[u8]) -> Result<()> {
        let entry = KeyShareEntry::decode(encoded)?;
        let group = registry::by_wire_id(entry.group)?;
        if let Some(selected) = self.group {
            if selected.name != group.name {
                return Err(Error::curve_mismatch(CONTEXT, selected.name, group.name));
            }
        }
        self.set_key_share_parameters(group.name, &entry.key_exchange)
    }

    /// Generate a local key share on the selected group
    pub fn generate_key_share<R: CryptoRng + RngCore>(&mut self, rng: &mut R) -> Result<&[u8]> {
        let group = validate::present(self.group, CONTEXT, "Key share group not set")?;
        let (private, public) = share::generate(group, rng)?;
        log::debug!("tls13: generated {} key share", group.name);

        self.private = Some(private);
        self.shared_secret = None;
        Ok(self.key_share.insert(public).as_slice())
    }

    /// Combine the local private key with the peer's share
    pub fn compute_shared_secret(&mut self) -> Result<&[u8]> {
        let (group, private, peer) = match (
            self.group,
            self.private.as_deref(),
            self.peer_key_share.as_deref(),
        ) {
            (Some(group), Some(private), Some(peer)) => (group, private, peer),
            _ => {
                return Err(Error::invalid_parameter(
                    CONTEXT,
                    "Missing parameters for computing shared secret",
                ))
            }
        };
        let secret = share::agree(group, private, peer)?;
        Ok(self.shared_secret.insert(secret).as_slice())
    }

    /// The local share as a KeyShareEntry
    pub fn key_share_entry(&self) -> Result<KeyShareEntry> {
        let (group, share) = match (self.group, self.key_share.as_ref()) {
            (Some(group), Some(share)) => (group, share),
            _ => {
                return Err(Error::invalid_parameter(
                    CONTEXT,
                    "Client key share not generated",
                ))
            }
        };
        KeyShareEntry::for_group(group.name, share.clone())
    }

    /// Encode the local share as `[group u16][length u16][share]`
    pub fn format_key_share_extension(&self) -> Result<Vec<u8>> {
        let entry = self.key_share_entry()?;
        log::debug!(
            "tls13: formatting key share for group 0x{:04x} ({} bytes)",
            entry.group,
            entry.key_exchange.len()
        );
        entry.encode()
    }

    pub fn group(&self) -> Option<&'static str> {
        self.group.map(|g| g.name)
    }

    /// Wire id of the selected group
    pub fn group_id(&self) -> Option<u16> {
        self.group.and_then(|g| g.wire_id)
    }

    pub fn peer_key_share(&self) -> Option<&[u8]> {
        self.peer_key_share.as_deref()
    }

    pub fn client_key_share(&self) -> Option<&[u8]> {
        self.key_share.as_deref()
    }
}

impl PreMasterSecret for Tls13KeyExchange {
    fn pre_master_secret(&self) -> Option<&[u8]> {
        self.shared_secret.as_deref().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests;
