//! Key and secret value types shared by every exchange
//!
//! All of these are request-scoped values. Private keys and shared secrets are
//! zeroized when dropped and never print their contents.

use core::fmt;
use subtle::ConstantTimeEq;
use tlskex_params::GroupParameter;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// A private key in the algorithm's native encoding
///
/// - finite field: big-endian exponent
/// - elliptic curve: big-endian scalar of the curve's field length
/// - modern curve: the raw scalar bytes
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    #[zeroize(skip)]
    group: &'static GroupParameter,
    bytes: Vec<u8>,
}

impl PrivateKey {
    /// Wrap raw private key bytes for `group`. No validation happens here;
    /// each exchange validates when the key is used.
    pub fn new(group: &'static GroupParameter, bytes: Vec<u8>) -> Self {
        Self { group, bytes }
    }

    /// Create from a byte slice
    pub fn from_slice(group: &'static GroupParameter, bytes: &[u8]) -> Self {
        Self::new(group, bytes.to_vec())
    }

    /// The group this key belongs to
    pub fn group(&self) -> &'static GroupParameter {
        self.group
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Get a reference to the inner bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Export the private key to bytes with zeroization
    pub fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.bytes.clone())
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey<{}>([REDACTED])", self.group.name)
    }
}

/// A public key in the algorithm's native wire encoding
///
/// - finite field: big-endian value left-padded to the prime length
/// - elliptic curve: SEC1 uncompressed point
/// - modern curve: the raw u-coordinate
#[derive(Clone)]
pub struct PublicKey {
    group: &'static GroupParameter,
    bytes: Vec<u8>,
}

impl PublicKey {
    /// Wrap raw public key bytes received for `group`
    pub fn new(group: &'static GroupParameter, bytes: Vec<u8>) -> Self {
        Self { group, bytes }
    }

    pub fn from_slice(group: &'static GroupParameter, bytes: &[u8]) -> Self {
        Self::new(group, bytes.to_vec())
    }

    pub fn group(&self) -> &'static GroupParameter {
        self.group
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.group.name == other.group.name && self.bytes == other.bytes
    }
}

impl Eq for PublicKey {}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("group", &self.group.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// A freshly generated key pair
///
/// `bits` is the size of the group actually used, which for finite-field
/// exchange may differ from the group the caller asked for.
#[derive(Clone, Debug)]
pub struct KeyPair {
    private_key: PrivateKey,
    public_key: PublicKey,
    bits: usize,
}

impl KeyPair {
    pub fn new(private_key: PrivateKey, public_key: PublicKey, bits: usize) -> Self {
        Self {
            private_key,
            public_key,
            bits,
        }
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// The group or curve the pair was generated on
    pub fn group(&self) -> &'static GroupParameter {
        self.public_key.group
    }

    /// Bit length of the group actually used
    pub fn bits(&self) -> usize {
        self.bits
    }

    /// Split into its halves
    pub fn into_parts(self) -> (PrivateKey, PublicKey) {
        (self.private_key, self.public_key)
    }
}

/// The result of one key agreement
///
/// Caller owns it; the buffer is wiped on drop. Equality is constant-time.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret {
    data: Vec<u8>,
}

impl SharedSecret {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Create from a byte slice
    pub fn from_slice(slice: &[u8]) -> Self {
        Self {
            data: slice.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Export the shared secret to bytes with zeroization
    pub fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.data.clone())
    }
}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.data.len() == other.data.len() && bool::from(self.data.ct_eq(&other.data))
    }
}

impl Eq for SharedSecret {}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedSecret<{}>([REDACTED])", self.data.len())
    }
}
