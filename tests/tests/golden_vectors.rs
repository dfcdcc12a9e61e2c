//! Pinned secp256k1 signatures, derived keys and recovered keys

use ksig_sign::{
    derive_public_key, parse_public_key, recover, serialize_public_key, sign, sign_with_entropy,
    verify, PublicKey, RecoverableSignature, RecoveryId, SecretKey, Signature,
};
use ksig_tests::vectors::{decode, SIGNING_VECTORS};

fn sign_vector(sk: &SecretKey, digest: &[u8; 32], extra: Option<[u8; 32]>) -> RecoverableSignature {
    match extra {
        Some(extra) => sign_with_entropy(sk, digest, &extra).unwrap(),
        None => sign(sk, digest).unwrap(),
    }
}

#[test]
fn derived_public_keys_match() {
    for v in SIGNING_VECTORS {
        let sk = SecretKey::from_bytes(&v.secret_key_bytes()).unwrap();
        let pk = derive_public_key(&sk).unwrap();
        assert_eq!(pk.to_compressed(), v.public_key_bytes(), "{}", v.name);
        assert_eq!(serialize_public_key(&pk, true), v.public_key_bytes().to_vec(), "{}", v.name);

        let uncompressed = serialize_public_key(&pk, false);
        assert_eq!(uncompressed.len(), 65);
        assert_eq!(uncompressed[1..33], v.public_key_bytes()[1..], "{}", v.name);
        assert_eq!(parse_public_key(&uncompressed).unwrap(), pk, "{}", v.name);
    }
}

#[test]
fn signatures_match() {
    for v in SIGNING_VECTORS {
        let sk = SecretKey::from_bytes(&v.secret_key_bytes()).unwrap();
        let sig = sign_vector(&sk, &v.digest_bytes(), v.extra_entropy_bytes());

        let (compact, recid) = sig.to_compact();
        assert_eq!(compact, v.compact_bytes(), "{}", v.name);
        assert_eq!(recid.to_u8(), v.recovery_id, "{}", v.name);
        assert!(sig.signature().is_low_s(), "{}", v.name);

        let mut expected = [0u8; 65];
        expected[..64].copy_from_slice(&v.compact_bytes());
        expected[64] = v.recovery_id;
        assert_eq!(sig.to_bytes(), expected, "{}", v.name);
    }
}

#[test]
fn pinned_signatures_verify() {
    for v in SIGNING_VECTORS {
        let pk = parse_public_key(&v.public_key_bytes()).unwrap();
        let sig = Signature::from_compact(&v.compact_bytes()).unwrap();
        assert!(verify(&pk, &v.digest_bytes(), &sig), "{}", v.name);

        let mut other = v.digest_bytes();
        other[31] ^= 0x01;
        assert!(!verify(&pk, &other, &sig), "{}", v.name);
    }
}

#[test]
fn pinned_signatures_recover() {
    for v in SIGNING_VECTORS {
        let sig = Signature::from_compact(&v.compact_bytes()).unwrap();
        let recid = RecoveryId::new(v.recovery_id).unwrap();
        let pk = recover(&sig, recid, &v.digest_bytes()).unwrap();
        assert_eq!(pk.to_compressed(), v.public_key_bytes(), "{}", v.name);

        // The opposite parity names the negated R and a different key.
        let flipped = RecoveryId::new(v.recovery_id ^ 1).unwrap();
        if let Ok(other) = recover(&sig, flipped, &v.digest_bytes()) {
            assert_ne!(other.to_compressed(), v.public_key_bytes(), "{}", v.name);
        }
    }
}

#[test]
fn der_encodings_round_trip() {
    for v in SIGNING_VECTORS {
        let sig = Signature::from_compact(&v.compact_bytes()).unwrap();
        let der = sig.to_der();
        assert_eq!(der[0], 0x30, "{}", v.name);
        assert_eq!(der[1] as usize, der.len() - 2, "{}", v.name);
        assert_eq!(Signature::from_der(&der).unwrap(), sig, "{}", v.name);
    }
}

#[test]
fn generator_encodings() {
    let g: [u8; 65] = decode(concat!(
        "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"
    ));
    let pk = PublicKey::from_bytes(&g).unwrap();
    let one = SecretKey::from_bytes(&decode::<32>(
        "0000000000000000000000000000000000000000000000000000000000000001",
    ))
    .unwrap();
    assert_eq!(one.public_key(), pk);
    assert_eq!(pk.to_uncompressed(), g);
}
