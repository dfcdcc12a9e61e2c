//! Pinned deterministic signing vectors
//!
//! Every entry was produced with RFC 6979 nonces (HMAC-SHA256, the optional
//! extra data appended after the digest) and low-s normalization.

/// One signing case, all fields hex encoded
#[derive(Debug, Clone, Copy)]
pub struct SigningVector {
    pub name: &'static str,
    pub secret_key: &'static str,
    pub digest: &'static str,
    pub extra_entropy: Option<&'static str>,
    pub public_key: &'static str,
    pub r: &'static str,
    pub s: &'static str,
    pub recovery_id: u8,
}

impl SigningVector {
    pub fn secret_key_bytes(&self) -> [u8; 32] {
        decode(self.secret_key)
    }

    pub fn digest_bytes(&self) -> [u8; 32] {
        decode(self.digest)
    }

    pub fn extra_entropy_bytes(&self) -> Option<[u8; 32]> {
        self.extra_entropy.map(decode::<32>)
    }

    pub fn public_key_bytes(&self) -> [u8; 33] {
        decode(self.public_key)
    }

    /// `r || s`
    pub fn compact_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&decode::<32>(self.r));
        out[32..].copy_from_slice(&decode::<32>(self.s));
        out
    }
}

/// Decodes a fixed-width hex string, panicking on malformed test data
pub fn decode<const N: usize>(hex_str: &str) -> [u8; N] {
    let bytes = hex::decode(hex_str).unwrap_or_else(|e| panic!("bad hex {hex_str:?}: {e}"));
    bytes
        .try_into()
        .unwrap_or_else(|v: Vec<u8>| panic!("expected {} bytes, got {}", N, v.len()))
}

pub const SIGNING_VECTORS: &[SigningVector] = &[
    SigningVector {
        name: "key 0x01.. digest 0x02..",
        secret_key: "0101010101010101010101010101010101010101010101010101010101010101",
        digest: "0202020202020202020202020202020202020202020202020202020202020202",
        extra_entropy: None,
        public_key: "031b84c5567b126440995d3ed5aaba0565d71e1834604819ff9c17f5e9d5dd078f",
        r: "97ef30233ead25d10f7bb2bf9eaf571a16f2deb33a75f20819284f0cb8ff3cc1",
        s: "4870ca05940199c113b4dc77866f001702691cde269f6835581e7aea1ead2660",
        recovery_id: 0,
    },
    SigningVector {
        name: "key 0x01.. digest 0x02.. extra 0x03..",
        secret_key: "0101010101010101010101010101010101010101010101010101010101010101",
        digest: "0202020202020202020202020202020202020202020202020202020202020202",
        extra_entropy: Some("0303030303030303030303030303030303030303030303030303030303030303"),
        public_key: "031b84c5567b126440995d3ed5aaba0565d71e1834604819ff9c17f5e9d5dd078f",
        r: "a4938cff267e6f8ea34c0d209ef0dd053dfea01115daf638d4cae371cb02c397",
        s: "098c88cef71938b8380ef2dcf5aacb474c673e5878c2c5ce9c55e25b78b6cf3e",
        recovery_id: 0,
    },
    SigningVector {
        name: "key 1 sha256(\"Satoshi Nakamoto\")",
        secret_key: "0000000000000000000000000000000000000000000000000000000000000001",
        digest: "a0dc65ffca799873cbea0ac274015b9526505daaaed385155425f7337704883e",
        extra_entropy: None,
        public_key: "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        r: "934b1ea10a4b3c1757e2b0c017d0b6143ce3c9a7e6a4a49860d7a6ab210ee3d8",
        s: "2442ce9d2b916064108014783e923ec36b49743e2ffa1c4496f01a512aafd9e5",
        recovery_id: 1,
    },
    SigningVector {
        name: "key 0x01.. sha256(\"hello\")",
        secret_key: "0101010101010101010101010101010101010101010101010101010101010101",
        digest: "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
        extra_entropy: None,
        public_key: "031b84c5567b126440995d3ed5aaba0565d71e1834604819ff9c17f5e9d5dd078f",
        r: "d13b19c8baa53851839efe1fe790b6f6d51028400902bb79d2fa50c65295e0ed",
        s: "697d0a44907237350d71ab31d6adbc973749cf2c2d1f4096b765c65be58cfca9",
        recovery_id: 1,
    },
    SigningVector {
        name: "key n-1 sha256(\"hello\")",
        secret_key: "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140",
        digest: "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
        extra_entropy: None,
        public_key: "0379be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        r: "533b756f2dd68a5a3d7a6ca83556266df4d6835d06f58ef283943b78046673e4",
        s: "0d7c3b2bcf711130279cbe66afdd62cccf5de8ccf04eb13803f00dd828fb2b00",
        recovery_id: 1,
    },
    // The nonce is seeded with the digest reduced mod n, as libsecp256k1 does.
    // RustCrypto `k256` seeds with the unreduced digest and signs this one differently.
    SigningVector {
        name: "key 2 digest above the group order",
        secret_key: "0000000000000000000000000000000000000000000000000000000000000002",
        digest: "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        extra_entropy: None,
        public_key: "02c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5",
        r: "dd926427ae6b3df4a4e9242dc2261363b557b9af5e8c04a171f72bd8b295ebfa",
        s: "7e9ae9348c12debe52ee3df2557f5220c05df290aa8449025d5d29440411cf39",
        recovery_id: 0,
    },
];
