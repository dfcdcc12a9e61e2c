//! Sign a digest, verify it and recover the public key
//!
//! ```text
//! cargo run -p ksig-sign --example recover -- <secret-key-hex> <digest-hex>
//! ```
//!
//! Without arguments the 0x01…01 key and 0x02…02 digest are used.

use ksig_sign::{parse_public_key, recover, serialize_public_key, sign, verify, SecretKey};

fn decode_32(arg: Option<String>, fill: u8) -> Result<[u8; 32], Box<dyn std::error::Error>> {
    match arg {
        Some(s) => {
            let bytes = hex::decode(s.trim())?;
            let array: [u8; 32] = bytes
                .as_slice()
                .try_into()
                .map_err(|_| format!("expected 32 bytes, got {}", bytes.len()))?;
            Ok(array)
        }
        None => Ok([fill; 32]),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let sk_bytes = decode_32(args.next(), 0x01)?;
    let digest = decode_32(args.next(), 0x02)?;

    let sk = SecretKey::from_bytes(&sk_bytes)?;
    let pk = sk.public_key();
    println!("public key (compressed):   {}", hex::encode(serialize_public_key(&pk, true)));
    println!("public key (uncompressed): {}", hex::encode(serialize_public_key(&pk, false)));

    let sig = sign(&sk, &digest)?;
    let (compact, recid) = sig.to_compact();
    println!("signature:                 {}", hex::encode(compact));
    println!("recovery id:               {}", recid.to_u8());
    println!("verifies:                  {}", verify(&pk, &digest, sig.signature()));

    let recovered = recover(sig.signature(), recid, &digest)?;
    let reparsed = parse_public_key(&recovered.to_compressed())?;
    println!("recovered matches:         {}", reparsed == pk);
    Ok(())
}
