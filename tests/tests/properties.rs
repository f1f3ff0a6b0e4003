//! Property-based tests for the codec, options and X25519 agreement

use proptest::prelude::*;
use tlskex_api::{HashAlgorithm, KeyExchange, KeyPairOptions, SecretOptions};
use tlskex_exchange::tls13::{decode_client_shares, encode_client_shares, KeyShareEntry};
use tlskex_exchange::{registry, X25519};
use tlskex_tests::{agree_both_ways, test_rng, two_pairs};

fn entry_strategy() -> impl Strategy<Value = KeyShareEntry> {
    (any::<u16>(), prop::collection::vec(any::<u8>(), 0..300))
        .prop_map(|(group, payload)| KeyShareEntry::new(group, payload))
}

proptest! {
    #[test]
    fn key_share_entry_decodes_what_it_encodes(entry in entry_strategy()) {
        let encoded = entry.encode().unwrap();
        prop_assert_eq!(encoded.len(), entry.encoded_len());
        prop_assert_eq!(KeyShareEntry::decode(&encoded).unwrap(), entry);
    }

    #[test]
    fn truncated_entries_never_decode(entry in entry_strategy(), cut in 1usize..4) {
        let encoded = entry.encode().unwrap();
        let cut = cut.min(encoded.len());
        prop_assert!(KeyShareEntry::decode(&encoded[..encoded.len() - cut]).is_err());
    }

    #[test]
    fn client_shares_keep_order(entries in prop::collection::vec(entry_strategy(), 0..6)) {
        let encoded = encode_client_shares(&entries).unwrap();
        prop_assert_eq!(decode_client_shares(&encoded).unwrap(), entries);
    }

    #[test]
    fn unknown_wire_ids_are_rejected(id in any::<u16>()) {
        let known = registry::all().iter().any(|g| g.wire_id == Some(id));
        prop_assert_eq!(registry::by_wire_id(id).is_ok(), known);
    }

    #[test]
    fn option_keys_outside_the_contract_are_rejected(
        key in "[a-z]{1,8}",
        value in "[a-z0-9]{0,8}"
    ) {
        let result = KeyPairOptions::from_pairs([(key.as_str(), value.as_str())]);
        prop_assert_eq!(result.is_ok(), key == "group" || key == "curve");

        let result = SecretOptions::from_pairs([(key.as_str(), "sha256")]);
        prop_assert_eq!(result.is_ok(), key == "hash");
    }

    #[test]
    fn hash_names_ignore_case_and_dashes(upper in any::<bool>(), dash in any::<bool>()) {
        for hash in [
            HashAlgorithm::Sha224,
            HashAlgorithm::Sha256,
            HashAlgorithm::Sha384,
            HashAlgorithm::Sha512,
        ] {
            let mut name = hash.name().to_string();
            if dash {
                name.insert(3, '-');
            }
            if upper {
                name = name.to_uppercase();
            }
            prop_assert_eq!(name.parse::<HashAlgorithm>().unwrap(), hash);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn x25519_agreement_is_symmetric(seed in any::<u64>()) {
        let mut rng = test_rng(seed);
        let (a, b) = two_pairs(&X25519, &mut rng, &KeyPairOptions::new()).unwrap();
        let (ab, ba) = agree_both_ways(&X25519, &a, &b, &SecretOptions::default()).unwrap();
        prop_assert_eq!(ab.len(), 32);
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn x25519_ignores_the_hash_option(seed in any::<u64>()) {
        let mut rng = test_rng(seed);
        let (a, b) = two_pairs(&X25519, &mut rng, &KeyPairOptions::new()).unwrap();
        let raw = X25519
            .compute_shared_secret(a.private_key(), b.public_key(), &SecretOptions::default())
            .unwrap();
        let sha512 = SecretOptions::new().with_hash(HashAlgorithm::Sha512);
        let same = X25519
            .compute_shared_secret(a.private_key(), b.public_key(), &sha512)
            .unwrap();
        prop_assert_eq!(raw, same);
    }
}
