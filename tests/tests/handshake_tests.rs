//! Session-style helpers driven the way a TLS stack would use them

use tlskex_api::{ErrorKind, KeyExchange, KeyPairOptions, PreMasterSecret};
use tlskex_exchange::tls13::{decode_client_shares, encode_client_shares};
use tlskex_exchange::{
    generate_server_key, Dhe, DheClientSession, Ecdhe, EcdheClientSession, RsaKeyTransport,
    Tls13KeyExchange,
};
use tlskex_params::traditional::rsa::TLS1_2_VERSION;
use tlskex_tests::test_rng;

#[test]
fn test_tls13_client_offers_two_shares() {
    let mut rng = test_rng(20);

    let mut x25519 = Tls13KeyExchange::new();
    x25519.set_group("x25519").unwrap();
    x25519.generate_key_share(&mut rng).unwrap();
    let mut p256 = Tls13KeyExchange::new();
    p256.set_group("secp256r1").unwrap();
    p256.generate_key_share(&mut rng).unwrap();

    let offered = encode_client_shares(&[
        x25519.key_share_entry().unwrap(),
        p256.key_share_entry().unwrap(),
    ])
    .unwrap();

    // Server picks the first share it supports
    let shares = decode_client_shares(&offered).unwrap();
    assert_eq!(shares.len(), 2);
    let mut server = Tls13KeyExchange::new();
    server
        .accept_key_share_entry(&shares[0].encode().unwrap())
        .unwrap();
    server.generate_key_share(&mut rng).unwrap();
    let server_secret = server.compute_shared_secret().unwrap().to_vec();

    x25519
        .accept_key_share_entry(&server.format_key_share_extension().unwrap())
        .unwrap();
    let client_secret = x25519.compute_shared_secret().unwrap().to_vec();
    assert_eq!(client_secret, server_secret);
    assert_eq!(x25519.pre_master_secret(), Some(&server_secret[..]));
}

#[test]
fn test_tls12_ecdhe_against_contract_keys() {
    let mut rng = test_rng(21);
    let server = Ecdhe::new()
        .generate_key_pair(&mut rng, &KeyPairOptions::new().with_curve("secp521r1"))
        .unwrap();

    let mut client = EcdheClientSession::new();
    client
        .set_ec_parameters("secp521r1", server.public_key().as_bytes())
        .unwrap();
    client.generate_client_key_pair(&mut rng).unwrap();
    let pms = client.compute_pre_master_secret().unwrap();
    assert_eq!(pms.len(), 66);
}

#[test]
fn test_tls12_dhe_against_contract_keys() {
    let mut rng = test_rng(22);
    let server = Dhe
        .generate_key_pair(&mut rng, &KeyPairOptions::new().with_group("ffdhe3072"))
        .unwrap();

    let mut client = DheClientSession::new();
    client
        .set_dh_parameters(
            server.group().prime_hex.unwrap(),
            "2",
            &hex::encode(server.public_key().as_bytes()),
        )
        .unwrap();
    assert_eq!(client.generate_client_key_pair(&mut rng).unwrap().len(), 384);
    assert!(client.compute_pre_master_secret().is_ok());
    assert!(client.pre_master_secret().is_some());
}

#[test]
fn test_rsa_transport_end_to_end() {
    let mut rng = test_rng(23);
    let key = generate_server_key(&mut rng, 1024).unwrap();

    let mut client = RsaKeyTransport::new();
    client.generate_pre_master_secret(&mut rng, TLS1_2_VERSION);
    let err = client.encrypt_pre_master_secret(&mut rng).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);

    client.set_server_public_key(key.public_der());
    let ciphertext = client.encrypt_pre_master_secret(&mut rng).unwrap();

    let mut server = RsaKeyTransport::new();
    server
        .decrypt_pre_master_secret(&ciphertext, key.private_der())
        .unwrap();
    assert_eq!(server.pre_master_secret(), client.pre_master_secret());
}
