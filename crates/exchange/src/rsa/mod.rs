//! Static RSA key transport (TLS 1.2 `RSA` key exchange)
//!
//! This is not an agreement: the client picks the 48-byte pre-master secret
//! (2-byte protocol version, 46 random bytes) and encrypts it to the server's
//! public key with RSAES-PKCS1-v1_5. Keys arrive as DER.

use rand::{CryptoRng, RngCore};
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rsa::{Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};
use tlskex_api::error::validate;
use tlskex_api::{Error, PreMasterSecret, Result, ResultExt};
use tlskex_params::traditional::rsa::{
    PRE_MASTER_RANDOM_SIZE, PRE_MASTER_SECRET_SIZE, PRE_MASTER_VERSION_SIZE,
};
use zeroize::Zeroizing;

const CONTEXT: &str = "rsa";

/// Client and server halves of RSA key transport
#[derive(Default)]
pub struct RsaKeyTransport {
    server_public: Option<Vec<u8>>,
    pre_master_secret: Option<Zeroizing<Vec<u8>>>,
}

impl RsaKeyTransport {
    pub const NAME: &'static str = "rsa";

    pub fn new() -> Self {
        Self::default()
    }

    /// Server public key as PKCS#1 `RSAPublicKey` or SPKI DER. Decoded on use.
    pub fn set_server_public_key(&mut self, der: &[u8]) {
        self.server_public = Some(der.to_vec());
    }

    pub fn server_public_key(&self) -> Option<&[u8]> {
        self.server_public.as_deref()
    }

    /// Fresh pre-master secret: `version` big-endian, then 46 random bytes
    pub fn generate_pre_master_secret<R: CryptoRng + RngCore>(
        &mut self,
        rng: &mut R,
        version: u16,
    ) -> &[u8] {
        let mut secret = Zeroizing::new(vec![0u8; PRE_MASTER_SECRET_SIZE]);
        secret[..PRE_MASTER_VERSION_SIZE].copy_from_slice(&version.to_be_bytes());
        rng.fill_bytes(
            &mut secret[PRE_MASTER_VERSION_SIZE..PRE_MASTER_VERSION_SIZE + PRE_MASTER_RANDOM_SIZE],
        );
        self.pre_master_secret.insert(secret).as_slice()
    }

    /// Encrypt the pre-master secret to the server's key
    pub fn encrypt_pre_master_secret<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        let secret = validate::present(
            self.pre_master_secret.as_deref(),
            CONTEXT,
            "Pre-master secret not generated",
        )?;
        let der = validate::present(
            self.server_public.as_deref(),
            CONTEXT,
            "Server public key not set",
        )?;

        let public = decode_public_key(der)?;
        public
            .encrypt(rng, Pkcs1v15Encrypt, secret)
            .or_key_generation("rsa encrypt pre-master secret")
    }

    /// Server side: recover and retain the client's pre-master secret
    pub fn decrypt_pre_master_secret(
        &mut self,
        ciphertext: &[u8],
        private_der: &[u8],
    ) -> Result<&[u8]> {
        let private = decode_private_key(private_der)?;
        let secret = Zeroizing::new(
            private
                .decrypt(Pkcs1v15Encrypt, ciphertext)
                .or_key_generation("rsa decrypt pre-master secret")?,
        );
        if secret.len() != PRE_MASTER_SECRET_SIZE {
            return Err(Error::key_generation(
                "rsa decrypt pre-master secret",
                format!(
                    "decrypted pre-master secret is {} bytes, expected {PRE_MASTER_SECRET_SIZE}",
                    secret.len()
                ),
            ));
        }
        Ok(self.pre_master_secret.insert(secret).as_slice())
    }

    /// Protocol version carried in the first two bytes of the pre-master secret
    pub fn client_version(&self) -> Option<u16> {
        self.pre_master_secret
            .as_deref()
            .map(|s| u16::from_be_bytes([s[0], s[1]]))
    }
}

impl PreMasterSecret for RsaKeyTransport {
    fn pre_master_secret(&self) -> Option<&[u8]> {
        self.pre_master_secret.as_deref().map(Vec::as_slice)
    }
}

/// A server key pair in DER form, for tests and host applications
pub struct RsaServerKey {
    private_der: Zeroizing<Vec<u8>>,
    public_der: Vec<u8>,
}

impl RsaServerKey {
    /// PKCS#8 `PrivateKeyInfo`
    pub fn private_der(&self) -> &[u8] {
        &self.private_der
    }

    /// SubjectPublicKeyInfo
    pub fn public_der(&self) -> &[u8] {
        &self.public_der
    }
}

/// Generate an RSA server key of `bits` bits
pub fn generate_server_key<R: CryptoRng + RngCore>(
    rng: &mut R,
    bits: usize,
) -> Result<RsaServerKey> {
    let private = RsaPrivateKey::new(rng, bits).or_key_generation("rsa key generation")?;
    let private_der = private
        .to_pkcs8_der()
        .or_key_generation("rsa private key export")?;
    let public_der = RsaPublicKey::from(&private)
        .to_public_key_der()
        .or_key_generation("rsa public key export")?;
    log::debug!("rsa: generated {bits}-bit server key");

    Ok(RsaServerKey {
        private_der: Zeroizing::new(private_der.as_bytes().to_vec()),
        public_der: public_der.as_bytes().to_vec(),
    })
}

fn decode_public_key(der: &[u8]) -> Result<RsaPublicKey> {
    RsaPublicKey::from_pkcs1_der(der)
        .or_else(|_| RsaPublicKey::from_public_key_der(der))
        .map_err(|e| Error::invalid_key(CONTEXT, format!("Failed to load server public key: {e}")))
}

fn decode_private_key(der: &[u8]) -> Result<RsaPrivateKey> {
    RsaPrivateKey::from_pkcs1_der(der)
        .or_else(|_| RsaPrivateKey::from_pkcs8_der(der))
        .map_err(|e| Error::invalid_key(CONTEXT, format!("Failed to load server private key: {e}")))
}
