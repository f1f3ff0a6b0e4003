//! TLS 1.3 `key_share` wire encoding (RFC 8446 §4.2.8)
//!
//! ```text
//! struct {
//!     NamedGroup group;                    // u16, big-endian
//!     opaque key_exchange<1..2^16-1>;      // u16 length prefix
//! } KeyShareEntry;
//!
//! KeyShareEntry client_shares<0..2^16-1>;  // u16 length prefix
//! ```

use crate::registry;
use tlskex_api::error::validate;
use tlskex_api::{Error, Result};
use tlskex_params::tls13::{KEY_SHARE_EXTENSION_TYPE, KEY_SHARE_HEADER_SIZE, KEY_SHARE_LENGTH_SIZE};

const CONTEXT: &str = "key share codec";

/// One `(group, key_exchange)` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyShareEntry {
    pub group: u16,
    pub key_exchange: Vec<u8>,
}

impl KeyShareEntry {
    pub fn new(group: u16, key_exchange: Vec<u8>) -> Self {
        Self {
            group,
            key_exchange,
        }
    }

    /// Entry for a named group; names without a wire id are `InvalidCurve`
    pub fn for_group(name: &str, key_exchange: Vec<u8>) -> Result<Self> {
        Ok(Self::new(registry::wire_id(name)?, key_exchange))
    }

    /// Encoded size in bytes
    pub fn encoded_len(&self) -> usize {
        KEY_SHARE_HEADER_SIZE + self.key_exchange.len()
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.encode_into(&mut out)?;
        Ok(out)
    }

    /// Append the encoding to `out`
    pub fn encode_into(&self, out: &mut Vec<u8>) -> Result<()> {
        let len = u16::try_from(self.key_exchange.len()).map_err(|_| {
            Error::invalid_parameter(CONTEXT, "key share is longer than 65535 bytes")
        })?;
        out.extend_from_slice(&self.group.to_be_bytes());
        out.extend_from_slice(&len.to_be_bytes());
        out.extend_from_slice(&self.key_exchange);
        Ok(())
    }

    /// Decode exactly one entry; trailing bytes are an error
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let (entry, rest) = Self::read(bytes)?;
        validate::parameter(rest.is_empty(), CONTEXT, "trailing bytes after key share")?;
        Ok(entry)
    }

    /// Decode one entry from the front of `bytes`, returning the remainder
    pub fn read(bytes: &[u8]) -> Result<(Self, &[u8])> {
        validate::parameter(
            bytes.len() >= KEY_SHARE_HEADER_SIZE,
            CONTEXT,
            "truncated key share header",
        )?;
        let (group, rest) = read_u16(bytes);
        let (len, rest) = read_u16(rest);
        let len = usize::from(len);
        validate::parameter(rest.len() >= len, CONTEXT, "truncated key share")?;

        let (payload, rest) = rest.split_at(len);
        Ok((Self::new(group, payload.to_vec()), rest))
    }
}

/// Encode the ClientHello `client_shares` vector
pub fn encode_client_shares(entries: &[KeyShareEntry]) -> Result<Vec<u8>> {
    let body_len: usize = entries.iter().map(KeyShareEntry::encoded_len).sum();
    let len = u16::try_from(body_len).map_err(|_| {
        Error::invalid_parameter(CONTEXT, "client_shares is longer than 65535 bytes")
    })?;

    let mut out = Vec::with_capacity(KEY_SHARE_LENGTH_SIZE + body_len);
    out.extend_from_slice(&len.to_be_bytes());
    for entry in entries {
        entry.encode_into(&mut out)?;
    }
    Ok(out)
}

/// Decode the ClientHello `client_shares` vector
pub fn decode_client_shares(bytes: &[u8]) -> Result<Vec<KeyShareEntry>> {
    validate::parameter(
        bytes.len() >= KEY_SHARE_LENGTH_SIZE,
        CONTEXT,
        "truncated client_shares length",
    )?;
    let (len, body) = read_u16(bytes);
    validate::parameter(
        body.len() == usize::from(len),
        CONTEXT,
        "client_shares length does not match its contents",
    )?;

    let mut entries = Vec::new();
    let mut rest = body;
    while !rest.is_empty() {
        let (entry, next) = KeyShareEntry::read(rest)?;
        entries.push(entry);
        rest = next;
    }
    Ok(entries)
}

/// Full ClientHello extension: type 51, u16 length, then `client_shares`
pub fn encode_client_hello_extension(entries: &[KeyShareEntry]) -> Result<Vec<u8>> {
    let shares = encode_client_shares(entries)?;
    let len = u16::try_from(shares.len())
        .map_err(|_| Error::invalid_parameter(CONTEXT, "key_share extension is too long"))?;

    let mut out = Vec::with_capacity(KEY_SHARE_HEADER_SIZE + shares.len());
    out.extend_from_slice(&KEY_SHARE_EXTENSION_TYPE.to_be_bytes());
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(&shares);
    Ok(out)
}

fn read_u16(bytes: &[u8]) -> (u16, &[u8]) {
    let (head, rest) = bytes.split_at(2);
    (u16::from_be_bytes([head[0], head[1]]), rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tlskex_api::ErrorKind;

    #[test]
    fn test_encode_layout() {
        let entry = KeyShareEntry::for_group("x25519", vec![0xAA, 0xBB, 0xCC]).unwrap();
        assert_eq!(
            entry.encode().unwrap(),
            vec![0x00, 0x1D, 0x00, 0x03, 0xAA, 0xBB, 0xCC]
        );
        assert_eq!(entry.encoded_len(), 7);
    }

    #[test]
    fn test_decode_known_bytes() {
        let entry = KeyShareEntry::decode(&[0x00, 0x17, 0x00, 0x02, 0x04, 0x05]).unwrap();
        assert_eq!(entry, KeyShareEntry::new(23, vec![0x04, 0x05]));
    }

    #[test]
    fn test_decode_rejects_malformed_input() {
        for bad in [
            &[0x00, 0x1D, 0x00][..],
            &[0x00, 0x1D, 0x00, 0x04, 0x01, 0x02][..],
            &[0x00, 0x1D, 0x00, 0x01, 0x01, 0x02][..],
        ] {
            let err = KeyShareEntry::decode(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        }
    }

    #[test]
    fn test_oversized_payload() {
        let entry = KeyShareEntry::new(29, vec![0; 65536]);
        assert_eq!(entry.encode().unwrap_err().kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn test_client_shares() {
        let entries = vec![
            KeyShareEntry::new(29, vec![1; 32]),
            KeyShareEntry::new(23, vec![4; 65]),
        ];
        let encoded = encode_client_shares(&entries).unwrap();
        assert_eq!(&encoded[..2], &[0x00, 4 + 32 + 4 + 65]);
        assert_eq!(decode_client_shares(&encoded).unwrap(), entries);

        assert!(decode_client_shares(&encoded[..encoded.len() - 1]).is_err());
        assert!(decode_client_shares(&[0, 0]).unwrap().is_empty());
    }

    #[test]
    fn test_client_hello_extension_header() {
        let ext = encode_client_hello_extension(&[KeyShareEntry::new(29, vec![7; 32])]).unwrap();
        assert_eq!(&ext[..2], &[0x00, 0x33]);
        assert_eq!(u16::from_be_bytes([ext[2], ext[3]]) as usize, ext.len() - 4);
    }
}
