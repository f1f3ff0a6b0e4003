//! TLS 1.2 client side of an ECDHE handshake (RFC 8422)
//!
//! The server names the curve and sends its public point in
//! ServerKeyExchange. The pre-master secret is the raw agreement output:
//! the x-coordinate for NIST curves, the X25519 output otherwise.

use crate::{registry, share};
use rand::{CryptoRng, RngCore};
use tlskex_api::error::validate;
use tlskex_api::{Error, PreMasterSecret, Result};
use tlskex_params::GroupParameter;
use zeroize::Zeroizing;

const CONTEXT: &str = "ecdhe client";

/// Curves a TLS 1.2 server may select
pub const SUPPORTED_CURVES: [&str; 4] = ["secp256r1", "secp384r1", "secp521r1", "x25519"];

#[derive(Default)]
pub struct EcdheClientSession {
    curve: Option<&'static GroupParameter>,
    server_public: Option<Vec<u8>>,
    client_private: Option<Zeroizing<Vec<u8>>>,
    client_public: Option<Vec<u8>>,
    pre_master_secret: Option<Zeroizing<Vec<u8>>>,
}

impl EcdheClientSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the server's curve and public point.
    ///
    /// Only the curve is checked here; the point is decoded when the
    /// pre-master secret is computed.
    pub fn set_ec_parameters(&mut self, curve: &str, server_public: &[u8]) -> Result<()> {
        let group = registry::find(curve)
            .filter(|g| SUPPORTED_CURVES.contains(&g.name))
            .ok_or_else(|| {
                Error::invalid_curve(CONTEXT, format!("Unsupported elliptic curve: {curve}"))
            })?;

        self.curve = Some(group);
        self.server_public = Some(server_public.to_vec());
        self.client_private = None;
        self.client_public = None;
        self.pre_master_secret = None;
        Ok(())
    }

    /// Generate the client's ephemeral key and return its public encoding
    pub fn generate_client_key_pair<R: CryptoRng + RngCore>(
        &mut self,
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        let curve = validate::present(self.curve, CONTEXT, "EC parameters not set")?;
        let (private, public) = share::generate(curve, rng)?;
        log::debug!("ecdhe client: generated key pair on {}", curve.name);

        self.client_private = Some(private);
        self.client_public = Some(public.clone());
        Ok(public)
    }

    pub fn compute_pre_master_secret(&mut self) -> Result<&[u8]> {
        let (curve, server_public, private) = match (
            self.curve,
            self.server_public.as_deref(),
            self.client_private.as_deref(),
        ) {
            (Some(curve), Some(server_public), Some(private)) => (curve, server_public, private),
            _ => {
                return Err(Error::invalid_parameter(
                    CONTEXT,
                    "Missing parameters for computing pre-master secret",
                ))
            }
        };
        let secret = share::agree(curve, private, server_public)?;
        Ok(self.pre_master_secret.insert(secret).as_slice())
    }

    /// Canonical name of the curve the server selected
    pub fn curve(&self) -> Option<&'static str> {
        self.curve.map(|g| g.name)
    }

    pub fn server_public_key(&self) -> Option<&[u8]> {
        self.server_public.as_deref()
    }

    pub fn client_public_key(&self) -> Option<&[u8]> {
        self.client_public.as_deref()
    }
}

impl PreMasterSecret for EcdheClientSession {
    fn pre_master_secret(&self) -> Option<&[u8]> {
        self.pre_master_secret.as_deref().map(Vec::as_slice)
    }
}
