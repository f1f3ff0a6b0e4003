//! Constants for finite-field Diffie-Hellman key exchange
//!
//! The primes are the RFC 3526 MODP groups 14, 15 and 16, all with generator 2.
//! They are kept as hex text; the registry decodes each one once on first use.

/// DH with 2048-bit modulus
pub const DH_MODULUS_2048: usize = 2048;

/// DH with 3072-bit modulus
pub const DH_MODULUS_3072: usize = 3072;

/// DH with 4096-bit modulus
pub const DH_MODULUS_4096: usize = 4096;

/// Byte length for DH-2048 key
pub const DH_2048_BYTE_LENGTH: usize = DH_MODULUS_2048 / 8;

/// Byte length for DH-3072 key
pub const DH_3072_BYTE_LENGTH: usize = DH_MODULUS_3072 / 8;

/// Byte length for DH-4096 key
pub const DH_4096_BYTE_LENGTH: usize = DH_MODULUS_4096 / 8;

/// Generator shared by every standard group
pub const DH_GENERATOR: u32 = 2;

/// Group used when the caller names none, or one the registry does not know
pub const DH_DEFAULT_GROUP: &str = "ffdhe2048";

/// Smallest prime accepted for explicitly supplied (server-chosen) parameters
pub const DH_MIN_MODULUS_BITS: usize = 512;

/// RFC 3526 group 14 (2048-bit MODP)
pub const DH_2048_PRIME_HEX: &str = concat!(
    "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD1",
    "29024E088A67CC74020BBEA63B139B22514A08798E3404DD",
    "EF9519B3CD3A431B302B0A6DF25F14374FE1356D6D51C245",
    "E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7ED",
    "EE386BFB5A899FA5AE9F24117C4B1FE649286651ECE45B3D",
    "C2007CB8A163BF0598DA48361C55D39A69163FA8FD24CF5F",
    "83655D23DCA3AD961C62F356208552BB9ED529077096966D",
    "670C354E4ABC9804F1746C08CA18217C32905E462E36CE3B",
    "E39E772C180E86039B2783A2EC07A28FB5C55DF06F4C52C9",
    "DE2BCBF6955817183995497CEA956AE515D2261898FA0510",
    "15728E5A8AACAA68FFFFFFFFFFFFFFFF",
);

/// RFC 3526 group 15 (3072-bit MODP)
pub const DH_3072_PRIME_HEX: &str = concat!(
    "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD1",
    "29024E088A67CC74020BBEA63B139B22514A08798E3404DD",
    "EF9519B3CD3A431B302B0A6DF25F14374FE1356D6D51C245",
    "E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7ED",
    "EE386BFB5A899FA5AE9F24117C4B1FE649286651ECE45B3D",
    "C2007CB8A163BF0598DA48361C55D39A69163FA8FD24CF5F",
    "83655D23DCA3AD961C62F356208552BB9ED529077096966D",
    "670C354E4ABC9804F1746C08CA18217C32905E462E36CE3B",
    "E39E772C180E86039B2783A2EC07A28FB5C55DF06F4C52C9",
    "DE2BCBF6955817183995497CEA956AE515D2261898FA0510",
    "15728E5A8AAAC42DAD33170D04507A33A85521ABDF1CBA64",
    "ECFB850458DBEF0A8AEA71575D060C7DB3970F85A6E1E4C7",
    "ABF5AE8CDB0933D71E8C94E04A25619DCEE3D2261AD2EE6B",
    "F12FFA06D98A0864D87602733EC86A64521F2B18177B200C",
    "BBE117577A615D6C770988C0BAD946E208E24FA074E5AB31",
    "43DB5BFCE0FD108E4B82D120A93AD2CAFFFFFFFFFFFFFFFF",
);

/// RFC 3526 group 16 (4096-bit MODP)
pub const DH_4096_PRIME_HEX: &str = concat!(
    "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD1",
    "29024E088A67CC74020BBEA63B139B22514A08798E3404DD",
    "EF9519B3CD3A431B302B0A6DF25F14374FE1356D6D51C245",
    "E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7ED",
    "EE386BFB5A899FA5AE9F24117C4B1FE649286651ECE45B3D",
    "C2007CB8A163BF0598DA48361C55D39A69163FA8FD24CF5F",
    "83655D23DCA3AD961C62F356208552BB9ED529077096966D",
    "670C354E4ABC9804F1746C08CA18217C32905E462E36CE3B",
    "E39E772C180E86039B2783A2EC07A28FB5C55DF06F4C52C9",
    "DE2BCBF6955817183995497CEA956AE515D2261898FA0510",
    "15728E5A8AAAC42DAD33170D04507A33A85521ABDF1CBA64",
    "ECFB850458DBEF0A8AEA71575D060C7DB3970F85A6E1E4C7",
    "ABF5AE8CDB0933D71E8C94E04A25619DCEE3D2261AD2EE6B",
    "F12FFA06D98A0864D87602733EC86A64521F2B18177B200C",
    "BBE117577A615D6C770988C0BAD946E208E24FA074E5AB31",
    "43DB5BFCE0FD108E4B82D120A92108011A723C12A787E6D7",
    "88719A10BDBA5B2699C327186AF4E23C1A946834B6150BDA",
    "2583E9CA2AD44CE8DBBBC2DB04DE8EF92E8EFC141FBECAA6",
    "287C59474E6BC05D99B2964FA090C3A2233BA186515BE7ED",
    "1F612970CEE2D7AFB81BDD762170481CD0069127D5B05AA9",
    "93B4EA988D8FDDC186FFB7DC90A6C08F4DF435C934063199",
    "FFFFFFFFFFFFFFFF",
);

/// Private exponent length for a prime of `modulus_bits` bits.
///
/// Short exponents per RFC 7919 §5.2: at least twice the symmetric-equivalent
/// strength of the group, capped below the modulus for small primes.
pub const fn private_exponent_bits(modulus_bits: usize) -> usize {
    let bits = if modulus_bits <= DH_MODULUS_2048 {
        225
    } else if modulus_bits <= DH_MODULUS_3072 {
        275
    } else if modulus_bits <= DH_MODULUS_4096 {
        325
    } else {
        375
    };

    if bits >= modulus_bits {
        modulus_bits - 1
    } else {
        bits
    }
}
