//! TLS 1.2 client side of a DHE handshake
//!
//! The server sends its own `(p, g, Ys)` in ServerKeyExchange, so nothing
//! here goes through the group registry. Values arrive as hex text.

use super::{agree, left_pad, random_exponent};
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use tlskex_api::error::validate;
use tlskex_api::{Error, PreMasterSecret, Result, ResultExt};
use tlskex_params::traditional::dh::{private_exponent_bits, DH_MIN_MODULUS_BITS};
use zeroize::Zeroizing;

const CONTEXT: &str = "dhe client";

#[derive(Debug, Clone)]
struct ServerParameters {
    p: BigUint,
    g: BigUint,
    server_public: BigUint,
}

/// Client half of a server-parameterised DHE exchange
#[derive(Default)]
pub struct DheClientSession {
    params: Option<ServerParameters>,
    client_private: Option<Zeroizing<Vec<u8>>>,
    client_public: Option<Vec<u8>>,
    pre_master_secret: Option<Zeroizing<Vec<u8>>>,
}

impl DheClientSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the server's prime, generator and public value
    pub fn set_dh_parameters(
        &mut self,
        p_hex: &str,
        g_hex: &str,
        server_public_hex: &str,
    ) -> Result<()> {
        let p = parse_hex(p_hex, "prime")?;
        let g = parse_hex(g_hex, "generator")?;
        let server_public = parse_hex(server_public_hex, "server public value")?;

        validate::parameter(p.bit(0), CONTEXT, "prime must be odd")?;
        validate::parameter(
            p.bits() as usize >= DH_MIN_MODULUS_BITS,
            CONTEXT,
            &format!("prime must be at least {DH_MIN_MODULUS_BITS} bits"),
        )?;
        let one = BigUint::from(1u8);
        let p_minus_one = &p - &one;
        validate::parameter(
            g > one && g < p_minus_one,
            CONTEXT,
            "generator is out of range",
        )?;
        validate::parameter(
            server_public > one && server_public < p_minus_one,
            CONTEXT,
            "server public value is out of range",
        )?;

        self.params = Some(ServerParameters {
            p,
            g,
            server_public,
        });
        self.client_private = None;
        self.client_public = None;
        self.pre_master_secret = None;
        Ok(())
    }

    /// Generate the client's exponent and `Yc`, returned padded to the prime length
    pub fn generate_client_key_pair<R: CryptoRng + RngCore>(
        &mut self,
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        let params = validate::present(self.params.as_ref(), CONTEXT, "DH parameters not set")?;
        let modulus_bits = params.p.bits() as usize;
        let x = random_exponent(rng, private_exponent_bits(modulus_bits));
        let y = params.g.modpow(&x, &params.p);
        let public = left_pad(&y, modulus_bits.div_ceil(8));

        self.client_private = Some(Zeroizing::new(x.to_bytes_be()));
        self.client_public = Some(public.clone());
        Ok(public)
    }

    /// `Z = Ys^x mod p`, leading zero bytes stripped
    pub fn compute_pre_master_secret(&mut self) -> Result<&[u8]> {
        let (params, private) = match (self.params.as_ref(), self.client_private.as_ref()) {
            (Some(params), Some(private)) => (params, private),
            _ => {
                return Err(Error::invalid_parameter(
                    CONTEXT,
                    "Missing parameters for computing pre-master secret",
                ))
            }
        };
        let x = BigUint::from_bytes_be(private);
        let z = agree(&x, &params.server_public, &params.p).with_context(CONTEXT)?;
        Ok(self.pre_master_secret.insert(z).as_slice())
    }

    /// The server's prime, big-endian
    pub fn prime(&self) -> Option<Vec<u8>> {
        self.params.as_ref().map(|p| p.p.to_bytes_be())
    }

    pub fn generator(&self) -> Option<Vec<u8>> {
        self.params.as_ref().map(|p| p.g.to_bytes_be())
    }

    pub fn server_public_key(&self) -> Option<Vec<u8>> {
        self.params.as_ref().map(|p| p.server_public.to_bytes_be())
    }

    pub fn client_public_key(&self) -> Option<&[u8]> {
        self.client_public.as_deref()
    }
}

impl PreMasterSecret for DheClientSession {
    fn pre_master_secret(&self) -> Option<&[u8]> {
        self.pre_master_secret.as_deref().map(Vec::as_slice)
    }
}

/// Decode hex text into an integer. A `0x` prefix and an odd digit count are accepted.
pub(crate) fn parse_hex(text: &str, what: &str) -> Result<BigUint> {
    let digits = text
        .trim()
        .strip_prefix("0x")
        .or_else(|| text.trim().strip_prefix("0X"))
        .unwrap_or(text.trim());
    validate::parameter(!digits.is_empty(), CONTEXT, &format!("{what} is empty"))?;

    let bytes = if digits.len() % 2 == 1 {
        hex::decode(format!("0{digits}"))
    } else {
        hex::decode(digits)
    }
    .map_err(|e| Error::invalid_parameter(CONTEXT, format!("{what} is not valid hex: {e}")))?;
    Ok(BigUint::from_bytes_be(&bytes))
}
