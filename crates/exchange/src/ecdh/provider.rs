//! Elliptic-curve arithmetic provider
//!
//! `Ecdhe` never does point arithmetic itself; it calls an [`EcProvider`].
//! A provider that cannot derive a shared point leaves [`EcProvider::derive`]
//! at its default, which reports `UnsupportedOperation`.

use elliptic_curve::sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint};
use elliptic_curve::{AffinePoint, CurveArithmetic, FieldBytesSize, PublicKey, SecretKey};
use p256::NistP256;
use p384::NistP384;
use p521::NistP521;
use rand::{CryptoRng, RngCore};
use tlskex_api::{Error, Result, ResultExt};
use tlskex_params::GroupParameter;
use zeroize::Zeroizing;

const CONTEXT: &str = "ec provider";

/// Curve operations `Ecdhe` delegates to
///
/// Keys are decoded once into the provider's own types and handed back to
/// [`EcProvider::derive`], so validation always happens before arithmetic.
pub trait EcProvider {
    /// A decoded, validated scalar
    type Secret;
    /// A decoded, validated point
    type Public;

    /// Whether `curve` is in the provider's supported-curve list
    fn supports(&self, curve: &GroupParameter) -> bool;

    /// Fresh key pair as (big-endian scalar, SEC1 uncompressed point)
    fn generate<R: CryptoRng + RngCore>(
        &self,
        curve: &GroupParameter,
        rng: &mut R,
    ) -> Result<(Zeroizing<Vec<u8>>, Vec<u8>)>;

    /// Decode and validate a scalar
    fn decode_private(&self, curve: &GroupParameter, private: &[u8]) -> Result<Self::Secret>;

    /// Decode and validate a point
    fn decode_public(&self, curve: &GroupParameter, public: &[u8]) -> Result<Self::Public>;

    /// x-coordinate of `private * public`
    fn derive(
        &self,
        curve: &GroupParameter,
        _private: &Self::Secret,
        _public: &Self::Public,
    ) -> Result<Zeroizing<Vec<u8>>> {
        Err(Error::unsupported(
            "ecdh derive",
            format!("provider has no native derive capability for {}", curve.name),
        ))
    }
}

/// RustCrypto-backed provider for P-256, P-384 and P-521
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeEcProvider;

/// Scalar decoded by [`NativeEcProvider`]
#[derive(Debug)]
pub enum NativeSecret {
    P256(SecretKey<NistP256>),
    P384(SecretKey<NistP384>),
    P521(SecretKey<NistP521>),
}

/// Point decoded by [`NativeEcProvider`]
#[derive(Debug, Clone)]
pub enum NativePublic {
    P256(PublicKey<NistP256>),
    P384(PublicKey<NistP384>),
    P521(PublicKey<NistP521>),
}

impl NativeSecret {
    fn curve_name(&self) -> &'static str {
        match self {
            Self::P256(_) => "secp256r1",
            Self::P384(_) => "secp384r1",
            Self::P521(_) => "secp521r1",
        }
    }
}

impl NativePublic {
    fn curve_name(&self) -> &'static str {
        match self {
            Self::P256(_) => "secp256r1",
            Self::P384(_) => "secp384r1",
            Self::P521(_) => "secp521r1",
        }
    }
}

fn unsupported_curve(name: &str) -> Error {
    Error::invalid_curve(CONTEXT, format!("Unsupported elliptic curve: {name}"))
}

impl EcProvider for NativeEcProvider {
    type Secret = NativeSecret;
    type Public = NativePublic;

    fn supports(&self, curve: &GroupParameter) -> bool {
        matches!(curve.name, "secp256r1" | "secp384r1" | "secp521r1")
    }

    fn generate<R: CryptoRng + RngCore>(
        &self,
        curve: &GroupParameter,
        rng: &mut R,
    ) -> Result<(Zeroizing<Vec<u8>>, Vec<u8>)> {
        match curve.name {
            "secp256r1" => Ok(generate_on::<NistP256>(rng)),
            "secp384r1" => Ok(generate_on::<NistP384>(rng)),
            "secp521r1" => Ok(generate_on::<NistP521>(rng)),
            other => Err(unsupported_curve(other)),
        }
    }

    fn decode_private(&self, curve: &GroupParameter, private: &[u8]) -> Result<NativeSecret> {
        match curve.name {
            "secp256r1" => decode_secret(private).map(NativeSecret::P256),
            "secp384r1" => decode_secret(private).map(NativeSecret::P384),
            "secp521r1" => decode_secret(private).map(NativeSecret::P521),
            other => Err(unsupported_curve(other)),
        }
    }

    fn decode_public(&self, curve: &GroupParameter, public: &[u8]) -> Result<NativePublic> {
        match curve.name {
            "secp256r1" => decode_public(public).map(NativePublic::P256),
            "secp384r1" => decode_public(public).map(NativePublic::P384),
            "secp521r1" => decode_public(public).map(NativePublic::P521),
            other => Err(unsupported_curve(other)),
        }
    }

    fn derive(
        &self,
        _curve: &GroupParameter,
        private: &NativeSecret,
        public: &NativePublic,
    ) -> Result<Zeroizing<Vec<u8>>> {
        match (private, public) {
            (NativeSecret::P256(sk), NativePublic::P256(pk)) => Ok(shared_x(sk, pk)),
            (NativeSecret::P384(sk), NativePublic::P384(pk)) => Ok(shared_x(sk, pk)),
            (NativeSecret::P521(sk), NativePublic::P521(pk)) => Ok(shared_x(sk, pk)),
            (sk, pk) => Err(Error::curve_mismatch(
                CONTEXT,
                sk.curve_name(),
                pk.curve_name(),
            )),
        }
    }
}

fn generate_on<C>(rng: &mut (impl CryptoRng + RngCore)) -> (Zeroizing<Vec<u8>>, Vec<u8>)
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let secret = SecretKey::<C>::random(rng);
    let public = secret.public_key().to_encoded_point(false).as_bytes().to_vec();
    (Zeroizing::new(secret.to_bytes().to_vec()), public)
}

fn decode_secret<C>(private: &[u8]) -> Result<SecretKey<C>>
where
    C: CurveArithmetic,
{
    SecretKey::<C>::from_slice(private).or_invalid_key("ec private key")
}

fn decode_public<C>(public: &[u8]) -> Result<PublicKey<C>>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    PublicKey::<C>::from_sec1_bytes(public).or_invalid_key("ec public key")
}

fn shared_x<C>(secret: &SecretKey<C>, peer: &PublicKey<C>) -> Zeroizing<Vec<u8>>
where
    C: CurveArithmetic,
{
    let shared = elliptic_curve::ecdh::diffie_hellman(secret.to_nonzero_scalar(), peer.as_affine());
    Zeroizing::new(shared.raw_secret_bytes().to_vec())
}
