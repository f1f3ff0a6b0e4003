use super::*;
use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tlskex_api::ErrorKind;

fn handshake(group: &str, rng: &mut ChaCha20Rng) -> (Vec<u8>, Vec<u8>) {
    let mut client = Tls13KeyExchange::new();
    client.set_group(group).unwrap();
    let client_share = client.generate_key_share(rng).unwrap().to_vec();

    let mut server = Tls13KeyExchange::new();
    server.set_key_share_parameters(group, &client_share).unwrap();
    let server_share = server.generate_key_share(rng).unwrap().to_vec();
    let server_secret = server.compute_shared_secret().unwrap().to_vec();

    client.set_peer_key_share(&server_share);
    let client_secret = client.compute_shared_secret().unwrap().to_vec();
    (client_secret, server_secret)
}

#[test]
fn test_both_sides_agree_on_every_working_group() {
    let mut rng = ChaCha20Rng::seed_from_u64(13);
    for (group, secret_len) in [
        ("x25519", 32),
        ("secp256r1", 32),
        ("secp384r1", 48),
        ("secp521r1", 66),
    ] {
        let (client, server) = handshake(group, &mut rng);
        assert_eq!(client, server, "{group}");
        assert_eq!(client.len(), secret_len, "{group}");
    }
}

#[test]
fn test_x448_share_is_unsupported() {
    let mut rng = OsRng;
    let mut session = Tls13KeyExchange::new();
    session.set_group("x448").unwrap();
    assert_eq!(session.group_id(), Some(30));
    let err = session.generate_key_share(&mut rng).unwrap_err();
    assert!(err.is_unsupported());
}

#[test]
fn test_unknown_groups_are_invalid_curve() {
    let mut session = Tls13KeyExchange::new();
    for group in ["ffdhe2048", "secp256k1", ""] {
        let err = session.set_group(group).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCurve);
        assert_eq!(
            err.message(),
            format!("Unsupported key share group: {group}")
        );
    }
    assert!(session.group().is_none());
}

#[test]
fn test_generate_requires_group() {
    let mut rng = OsRng;
    let mut session = Tls13KeyExchange::new();
    let err = session.generate_key_share(&mut rng).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    assert_eq!(err.message(), "Key share group not set");
}

#[test]
fn test_compute_requires_both_halves() {
    let mut rng = OsRng;
    let mut session = Tls13KeyExchange::new();
    session.set_group("x25519").unwrap();
    let err = session.compute_shared_secret().unwrap_err();
    assert_eq!(err.message(), "Missing parameters for computing shared secret");

    session.generate_key_share(&mut rng).unwrap();
    let err = session.compute_shared_secret().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);

    let mut peer_only = Tls13KeyExchange::new();
    peer_only.set_key_share_parameters("x25519", &[9; 32]).unwrap();
    let err = peer_only.compute_shared_secret().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
}

#[test]
fn test_format_key_share_extension() {
    let mut rng = OsRng;
    let mut session = Tls13KeyExchange::new();
    session.set_group("secp256r1").unwrap();

    let err = session.format_key_share_extension().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    assert_eq!(err.message(), "Client key share not generated");

    let share = session.generate_key_share(&mut rng).unwrap().to_vec();
    let ext = session.format_key_share_extension().unwrap();
    assert_eq!(&ext[..4], &[0x00, 0x17, 0x00, 65]);
    assert_eq!(&ext[4..], &share[..]);
    assert_eq!(
        KeyShareEntry::decode(&ext).unwrap(),
        session.key_share_entry().unwrap()
    );
}

#[test]
fn test_changing_group_discards_share() {
    let mut rng = OsRng;
    let mut session = Tls13KeyExchange::new();
    session.set_group("x25519").unwrap();
    session.generate_key_share(&mut rng).unwrap();
    session.set_group("x25519").unwrap();
    assert!(session.client_key_share().is_some());

    session.set_group("secp384r1").unwrap();
    assert!(session.client_key_share().is_none());
    assert!(session.format_key_share_extension().is_err());
}

#[test]
fn test_accept_key_share_entry() {
    let mut rng = ChaCha20Rng::seed_from_u64(14);
    let mut server = Tls13KeyExchange::new();
    server.set_group("x25519").unwrap();
    server.generate_key_share(&mut rng).unwrap();
    let entry = server.format_key_share_extension().unwrap();

    let mut client = Tls13KeyExchange::new();
    client.accept_key_share_entry(&entry).unwrap();
    assert_eq!(client.group(), Some("x25519"));
    assert_eq!(client.peer_key_share(), server.client_key_share());

    let mut other = Tls13KeyExchange::new();
    other.set_group("secp256r1").unwrap();
    let err = other.accept_key_share_entry(&entry).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidCurve);
}

#[test]
fn test_bad_peer_share_is_invalid_key() {
    let mut rng = OsRng;
    let mut session = Tls13KeyExchange::new();
    session.set_key_share_parameters("secp256r1", &[0x04; 10]).unwrap();
    session.generate_key_share(&mut rng).unwrap();
    let err = session.compute_shared_secret().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidKey);
    assert!(session.pre_master_secret().is_none());
}
