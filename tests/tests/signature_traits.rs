//! The scheme through the generic API traits

use ksig_api::signature::SignatureSerialize;
use ksig_api::{Error, RecoverableSignatureScheme, Serialize, SerializeSecret, Signature};
use ksig_sign::{EcdsaSecp256k1, PublicKey, RecoverableSignature, SecretKey};
use ksig_tests::vectors::SIGNING_VECTORS;
use rand::rngs::OsRng;

fn round_trip<S: Signature>(message: &[u8]) -> ksig_api::Result<()> {
    let keypair = S::keypair(&mut OsRng)?;
    let public_key = S::public_key(&keypair);
    let secret_key = S::secret_key(&keypair);
    let signature = S::sign(message, &secret_key)?;
    S::verify(message, &signature, &public_key)
}

#[test]
fn generic_sign_and_verify() {
    round_trip::<EcdsaSecp256k1>(b"generic message").unwrap();
    assert_eq!(EcdsaSecp256k1::name(), "ECDSA-secp256k1");
}

#[test]
fn message_signing_hashes_with_sha256() {
    // SHA-256("hello") is one of the pinned digests.
    let v = SIGNING_VECTORS
        .iter()
        .find(|v| v.name == "key 0x01.. sha256(\"hello\")")
        .unwrap();
    let sk = SecretKey::from_bytes(&v.secret_key_bytes()).unwrap();
    let sig = EcdsaSecp256k1::sign(b"hello", &sk).unwrap();
    assert_eq!(sig.to_compact(), v.compact_bytes());

    let pk = sk.public_key();
    assert!(EcdsaSecp256k1::verify(b"hello", &sig, &pk).is_ok());
    assert!(matches!(
        EcdsaSecp256k1::verify(b"hellp", &sig, &pk),
        Err(Error::InvalidSignature { .. })
    ));
}

#[test]
fn recoverable_scheme() {
    let v = &SIGNING_VECTORS[0];
    let sk = SecretKey::from_bytes(&v.secret_key_bytes()).unwrap();
    let digest = v.digest_bytes();
    let sig = EcdsaSecp256k1::sign_recoverable(&digest, &sk).unwrap();
    let pk = <EcdsaSecp256k1 as RecoverableSignatureScheme>::recover(&digest, &sig).unwrap();
    assert_eq!(pk.to_compressed(), v.public_key_bytes());
}

#[test]
fn serialize_traits() {
    let v = &SIGNING_VECTORS[2];
    let sk = <SecretKey as SerializeSecret>::from_bytes(&v.secret_key_bytes()).unwrap();
    assert_eq!(sk.to_bytes_zeroizing().as_slice(), &v.secret_key_bytes());

    let pk = <PublicKey as Serialize>::from_bytes(&v.public_key_bytes()).unwrap();
    assert_eq!(Serialize::to_bytes(&pk), v.public_key_bytes().to_vec());

    let sig = ksig_sign::sign(&sk, &v.digest_bytes()).unwrap();
    let bytes = Serialize::to_bytes(&sig);
    assert_eq!(bytes.len(), 65);
    assert_eq!(<RecoverableSignature as Serialize>::from_bytes(&bytes).unwrap(), sig);
}

#[test]
fn signature_serialize_sizes() {
    assert_eq!(EcdsaSecp256k1::PUBLIC_KEY_SIZE, 33);
    assert_eq!(EcdsaSecp256k1::SECRET_KEY_SIZE, 32);
    assert_eq!(EcdsaSecp256k1::SIGNATURE_SIZE, 64);

    let v = &SIGNING_VECTORS[0];
    let sk = EcdsaSecp256k1::deserialize_secret_key(&v.secret_key_bytes()).unwrap();
    let pk = EcdsaSecp256k1::deserialize_public_key(&v.public_key_bytes()).unwrap();
    assert_eq!(EcdsaSecp256k1::serialize_public_key(&pk), v.public_key_bytes().to_vec());

    let sig = EcdsaSecp256k1::deserialize_signature(&v.compact_bytes()).unwrap();
    assert_eq!(EcdsaSecp256k1::serialize_signature(&sig), v.compact_bytes().to_vec());
    assert!(EcdsaSecp256k1::verify(b"not the digest", &sig, &pk).is_err());
    assert_eq!(&*EcdsaSecp256k1::serialize_secret_key(&sk), &v.secret_key_bytes());
}

#[test]
fn errors_convert_to_api_kinds() {
    assert!(matches!(
        EcdsaSecp256k1::deserialize_secret_key(&[0u8; 32]),
        Err(Error::InvalidKey { .. })
    ));
    assert!(matches!(
        EcdsaSecp256k1::deserialize_public_key(&[0x05; 33]),
        Err(Error::SerializationError { .. })
    ));
    assert!(matches!(
        <RecoverableSignature as Serialize>::from_bytes(&[0x01; 64]),
        Err(Error::SerializationError { .. })
    ));
}
