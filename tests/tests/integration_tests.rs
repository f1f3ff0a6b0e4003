//! Cross-mechanism behaviour of the key-exchange contract

use tlskex_api::{ErrorKind, HashAlgorithm, KeyExchange, KeyPairOptions, PublicKey, SecretOptions};
use tlskex_exchange::{registry, Dhe, Ecdhe, Exchange, X25519, X448_UNSUPPORTED_MESSAGE};
use tlskex_tests::{
    agree_both_ways, test_rng, two_pairs, FINITE_FIELD_GROUPS, NAMED_CURVES, WIRE_GROUPS,
};

#[test]
fn test_symmetry_dhe_every_group() {
    let mut rng = test_rng(1);
    for group in FINITE_FIELD_GROUPS {
        let opts = KeyPairOptions::new().with_group(group);
        let (a, b) = two_pairs(&Dhe, &mut rng, &opts).unwrap();
        let (ab, ba) = agree_both_ways(&Dhe, &a, &b, &SecretOptions::default()).unwrap();
        assert_eq!(ab, ba, "{group}");
        assert_eq!(a.group().name, group);
    }
}

#[test]
fn test_symmetry_ecdhe_every_curve_and_hash() {
    let mut rng = test_rng(2);
    let ecdhe = Ecdhe::new();
    for curve in NAMED_CURVES {
        let opts = KeyPairOptions::new().with_curve(curve);
        let (a, b) = two_pairs(&ecdhe, &mut rng, &opts).unwrap();
        for hash in [
            HashAlgorithm::Sha224,
            HashAlgorithm::Sha256,
            HashAlgorithm::Sha384,
            HashAlgorithm::Sha512,
        ] {
            let secret_opts = SecretOptions::new().with_hash(hash);
            let (ab, ba) = agree_both_ways(&ecdhe, &a, &b, &secret_opts).unwrap();
            assert_eq!(ab, ba, "{curve}/{hash}");
            assert_eq!(ab.len(), hash.output_size());
        }
    }
}

#[test]
fn test_symmetry_through_variant_enum() {
    let mut rng = test_rng(3);
    for name in ["dhe", "ecdhe", "x25519"] {
        let exchange = Exchange::from_name(name).unwrap();
        let (a, b) = two_pairs(&exchange, &mut rng, &KeyPairOptions::new()).unwrap();
        let (ab, ba) = agree_both_ways(&exchange, &a, &b, &SecretOptions::default()).unwrap();
        assert_eq!(ab, ba, "{name}");
    }
}

#[test]
fn test_dhe_fallback_reports_default_group() {
    let mut rng = test_rng(4);
    let kp = Dhe
        .generate_key_pair(&mut rng, &KeyPairOptions::new().with_group("unknown"))
        .unwrap();
    assert_eq!(kp.group().name, "ffdhe2048");
    assert_eq!(kp.bits(), 2048);
    assert_eq!(kp.public_key().len(), 256);
}

#[test]
fn test_curve_mismatch_never_computes() {
    let mut rng = test_rng(5);
    let ecdhe = Ecdhe::new();
    for (i, first) in NAMED_CURVES.iter().enumerate() {
        for second in &NAMED_CURVES[i + 1..] {
            let a = ecdhe
                .generate_key_pair(&mut rng, &KeyPairOptions::new().with_curve(*first))
                .unwrap();
            let b = ecdhe
                .generate_key_pair(&mut rng, &KeyPairOptions::new().with_curve(*second))
                .unwrap();
            let err = ecdhe
                .compute_shared_secret(a.private_key(), b.public_key(), &SecretOptions::default())
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidCurve);
            assert!(err.to_string().contains(first));
            assert!(err.to_string().contains(second));
        }
    }
}

#[test]
fn test_x25519_fixed_lengths_and_truncation() {
    let mut rng = test_rng(6);
    let (a, b) = two_pairs(&X25519, &mut rng, &KeyPairOptions::new()).unwrap();
    assert_eq!(a.private_key().len(), 32);
    assert_eq!(a.public_key().len(), 32);
    let (ab, _) = agree_both_ways(&X25519, &a, &b, &SecretOptions::default()).unwrap();
    assert_eq!(ab.len(), 32);

    let group = registry::resolve("x25519").unwrap();
    for len in [0, 1, 31, 33] {
        let peer = PublicKey::from_slice(group, &vec![5u8; len]);
        let err = X25519
            .compute_shared_secret(a.private_key(), &peer, &SecretOptions::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidKey, "length {len}");
    }
}

#[test]
fn test_x448_is_deterministically_unsupported() {
    let mut rng = test_rng(7);
    let x448 = Exchange::from_name("x448").unwrap();
    let first = x448
        .generate_key_pair(&mut rng, &KeyPairOptions::new())
        .unwrap_err();
    for _ in 0..5 {
        let again = x448
            .generate_key_pair(&mut rng, &KeyPairOptions::new())
            .unwrap_err();
        assert_eq!(again, first);
    }
    assert_eq!(first.kind(), ErrorKind::UnsupportedOperation);
    assert_eq!(first.message(), X448_UNSUPPORTED_MESSAGE);
}

#[test]
fn test_distinct_pairs_give_distinct_secrets() {
    let mut rng = test_rng(8);
    let ecdhe = Ecdhe::new();
    let opts = KeyPairOptions::new();
    let third = ecdhe.generate_key_pair(&mut rng, &opts).unwrap();
    let (a, b) = two_pairs(&ecdhe, &mut rng, &opts).unwrap();
    assert_ne!(a.private_key().as_bytes(), b.private_key().as_bytes());

    let secret_opts = SecretOptions::default();
    let a3 = ecdhe
        .compute_shared_secret(a.private_key(), third.public_key(), &secret_opts)
        .unwrap();
    let b3 = ecdhe
        .compute_shared_secret(b.private_key(), third.public_key(), &secret_opts)
        .unwrap();
    assert_ne!(a3, b3);
}

#[test]
fn test_wire_group_table() {
    for (name, id) in WIRE_GROUPS {
        assert_eq!(registry::wire_id(name).unwrap(), id);
        assert_eq!(registry::by_wire_id(id).unwrap().name, name);
    }
}

#[test]
fn test_cross_kind_keys_are_rejected() {
    let mut rng = test_rng(9);
    let dh = Dhe.generate_key_pair(&mut rng, &KeyPairOptions::new()).unwrap();
    let ec = Ecdhe::new()
        .generate_key_pair(&mut rng, &KeyPairOptions::new())
        .unwrap();
    let opts = SecretOptions::default();

    let err = Dhe
        .compute_shared_secret(dh.private_key(), ec.public_key(), &opts)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidKey);

    let err = Ecdhe::new()
        .compute_shared_secret(ec.private_key(), dh.public_key(), &opts)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidKey);
}
