//! Post-processing of raw agreement values
//!
//! DHE and ECDHE hash the raw shared value before returning it. The output
//! length is the digest length of the selected hash.

use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use tlskex_api::{HashAlgorithm, SharedSecret};

/// Hash `raw` with `hash` into the final shared secret
pub fn derive(hash: HashAlgorithm, raw: &[u8]) -> SharedSecret {
    let digest = match hash {
        HashAlgorithm::Sha224 => Sha224::digest(raw).to_vec(),
        HashAlgorithm::Sha256 => Sha256::digest(raw).to_vec(),
        HashAlgorithm::Sha384 => Sha384::digest(raw).to_vec(),
        HashAlgorithm::Sha512 => Sha512::digest(raw).to_vec(),
    };
    SharedSecret::new(digest)
}
