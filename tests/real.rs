use reticle::sans::real::{decode_f32, decode_f64};

#[test]
fn decode_f64_normalized() {
    // Exponent 65, fraction 0.5.
    assert_eq!(decode_f64([0x41, 0x80, 0, 0, 0, 0, 0, 0]), 8.0);
    assert_eq!(decode_f64([0x41, 0x10, 0, 0, 0, 0, 0, 0]), 1.0);
    assert_eq!(decode_f64([0x41, 0x28, 0, 0, 0, 0, 0, 0]), 2.5);
    assert_eq!(decode_f64([0xC2, 0x5A, 0, 0, 0, 0, 0, 0]), -90.0);
}

#[test]
fn decode_f64_unnormalized() {
    // Leading zero digits shift into the exponent.
    assert_eq!(decode_f64([0x42, 0x01, 0, 0, 0, 0, 0, 0]), 1.0);
    assert_eq!(decode_f64([0x47, 0, 0, 0, 0x10, 0, 0, 0]), 1.0);
}

#[test]
fn decode_f64_units() {
    assert_eq!(
        decode_f64([0x3E, 0x41, 0x89, 0x37, 0x4B, 0xC6, 0xA7, 0xEF]),
        0.001
    );
    assert_eq!(
        decode_f64([0x39, 0x44, 0xB8, 0x2F, 0xA0, 0x9B, 0x5A, 0x54]),
        1e-9
    );
}

#[test]
fn decode_f64_zero() {
    assert_eq!(decode_f64([0; 8]), 0.0);
    assert_eq!(decode_f64([0xC5, 0, 0, 0, 0, 0, 0, 0]), 0.0);
    assert!(decode_f64([0xFF, 0, 0, 0, 0, 0, 0, 0]).is_sign_positive());
}

#[test]
fn decode_f32_values() {
    assert_eq!(decode_f32([0x41, 0x10, 0, 0]), 1.0);
    assert_eq!(decode_f32([0x41, 0x80, 0, 0]), 8.0);
    assert_eq!(decode_f32([0xC1, 0x80, 0, 0]), -8.0);
    assert_eq!(decode_f32([0x40, 0x80, 0, 0]), 0.5);
    assert_eq!(decode_f32([0x42, 0x64, 0, 0]), 100.0);
    assert_eq!(decode_f32([0x44, 0x00, 0x01, 0x00]), 1.0);
}

#[test]
fn decode_f32_zero() {
    assert_eq!(decode_f32([0x41, 0, 0, 0]), 0.0);
    assert_eq!(decode_f32([0x80, 0, 0, 0]), 0.0);
}
