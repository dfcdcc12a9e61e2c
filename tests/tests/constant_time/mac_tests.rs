use std::hint::black_box;

use ksig_algorithms::{Hmac, Sha256};
use ksig_tests::suites::constant_time::TestConfig;

use super::assert_constant_time;

#[test]
#[ignore = "timing sensitive"]
fn hmac_sha256_key_independent() {
    let key_zeros = [0u8; 32];
    let key_ones = [0xffu8; 32];
    let data = [0x02u8; 64];
    assert_constant_time(
        "HMAC-SHA256",
        &TestConfig::for_mac(),
        || {
            black_box(Hmac::<Sha256>::mac(black_box(&key_zeros), &data).ok());
        },
        || {
            black_box(Hmac::<Sha256>::mac(black_box(&key_ones), &data).ok());
        },
    );
}
