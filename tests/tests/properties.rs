//! Property tests over random keys and digests

use ksig_sign::{
    parse_public_key, recover, sign, sign_with_entropy, validate_secret_key, verify, RecoveryId,
    SecretKey, Signature,
};
use proptest::prelude::*;

/// n − 1, big-endian
const MAX_SECRET: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x40,
];

fn secret_key() -> impl Strategy<Value = SecretKey> {
    any::<[u8; 32]>().prop_filter_map("outside [1, n-1]", |bytes| SecretKey::from_bytes(&bytes).ok())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn sign_then_verify(sk in secret_key(), digest in any::<[u8; 32]>()) {
        let sig = sign(&sk, &digest).unwrap();
        prop_assert!(verify(&sk.public_key(), &digest, sig.signature()));
        prop_assert!(sig.signature().is_low_s());
    }

    #[test]
    fn recovery_returns_signer(sk in secret_key(), digest in any::<[u8; 32]>()) {
        let sig = sign(&sk, &digest).unwrap();
        let recovered = recover(sig.signature(), sig.recovery_id(), &digest).unwrap();
        prop_assert_eq!(recovered, sk.public_key());
    }

    #[test]
    fn signing_is_deterministic(sk in secret_key(), digest in any::<[u8; 32]>()) {
        let a = sign(&sk, &digest).unwrap();
        let b = sign(&sk, &digest).unwrap();
        prop_assert_eq!(a.to_bytes(), b.to_bytes());
    }

    #[test]
    fn extra_entropy_changes_signature(
        sk in secret_key(),
        digest in any::<[u8; 32]>(),
        extra in any::<[u8; 32]>(),
    ) {
        let plain = sign(&sk, &digest).unwrap();
        let hedged = sign_with_entropy(&sk, &digest, &extra).unwrap();
        prop_assert_ne!(plain.signature(), hedged.signature());
        prop_assert!(verify(&sk.public_key(), &digest, hedged.signature()));
        prop_assert_eq!(hedged.recover(&digest).unwrap(), sk.public_key());
    }

    #[test]
    fn tampered_digest_fails(
        sk in secret_key(),
        digest in any::<[u8; 32]>(),
        byte in 0usize..32,
        bit in 0u8..8,
    ) {
        let sig = sign(&sk, &digest).unwrap();
        let mut tampered = digest;
        tampered[byte] ^= 1 << bit;
        prop_assert!(!verify(&sk.public_key(), &tampered, sig.signature()));
        if let Ok(other) = recover(sig.signature(), sig.recovery_id(), &tampered) {
            prop_assert_ne!(other, sk.public_key());
        }
    }

    #[test]
    fn high_s_twin_is_rejected(sk in secret_key(), digest in any::<[u8; 32]>()) {
        let sig = sign(&sk, &digest).unwrap();
        let (compact, recid) = sig.to_compact();

        // Flip s to n − s through the compact encoding.
        let low = Signature::from_compact(&compact).unwrap();
        let high = negate_s(&low);
        prop_assert!(!high.is_low_s());
        prop_assert!(!verify(&sk.public_key(), &digest, &high));
        prop_assert_eq!(high.normalize_s(), low);

        // Recovery accepts the twin when the parity bit is flipped with it.
        let twin_id = RecoveryId::new(recid.to_u8() ^ 1).unwrap();
        prop_assert_eq!(recover(&high, twin_id, &digest).unwrap(), sk.public_key());
    }

    #[test]
    fn validate_matches_constructor(bytes in any::<[u8; 32]>()) {
        let in_range = bytes != [0u8; 32] && bytes <= MAX_SECRET;
        prop_assert_eq!(validate_secret_key(&bytes), in_range);
        prop_assert_eq!(SecretKey::from_bytes(&bytes).is_ok(), in_range);
    }

    #[test]
    fn compressed_and_uncompressed_agree(sk in secret_key()) {
        let pk = sk.public_key();
        let from_compressed = parse_public_key(&pk.to_compressed()).unwrap();
        let from_uncompressed = parse_public_key(&pk.to_uncompressed()).unwrap();
        prop_assert_eq!(from_compressed, from_uncompressed);
    }
}

// n − s computed on big-endian bytes
fn negate_s(sig: &Signature) -> Signature {
    const N: [u8; 32] = [
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xfe, 0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36,
        0x41, 0x41,
    ];
    let s = sig.s_bytes();
    let mut out = [0u8; 32];
    let mut borrow = 0i16;
    for i in (0..32).rev() {
        let mut d = N[i] as i16 - s[i] as i16 - borrow;
        borrow = if d < 0 { 1 } else { 0 };
        if d < 0 {
            d += 256;
        }
        out[i] = d as u8;
    }
    let mut compact = [0u8; 64];
    compact[..32].copy_from_slice(&sig.r_bytes());
    compact[32..].copy_from_slice(&out);
    Signature::from_compact(&compact).unwrap()
}

#[test]
fn boundary_secrets() {
    assert!(!validate_secret_key(&[0u8; 32]));
    assert!(validate_secret_key(&MAX_SECRET));
    let mut n = MAX_SECRET;
    n[31] = 0x41;
    assert!(!validate_secret_key(&n));
    assert!(!validate_secret_key(&[0xff; 32]));
    assert!(!validate_secret_key(&[0x01; 31]));
}
