//! Helpers for converting excess-64 reals.
//!
//! GDSII stores reals in a base-16 format predating IEEE-754: a sign bit, a
//! seven-bit exponent biased by 64, and a 24-bit (single) or 56-bit (double)
//! fractional mantissa. Each function reproduces the value bit-for-bit, with
//! scaling applied by exact multiplication or division by powers of two.

use tartan_bitfield::bitfield;

bitfield! {
    /// The leading byte shared by both real formats.
    struct Leading(u8) {
        [0..7] exponent: u8,
        [7] is_negative,
    }
}

/// Convert a four-byte excess-64 real to a primitive.
///
/// A zero mantissa converts to zero, whatever the sign and exponent.
pub fn decode_f32(r: [u8; 4]) -> f32 {
    let leading = Leading(r[0]);

    let mut mantissa = u32::from_be_bytes([0, r[1], r[2], r[3]]);
    if mantissa == 0 {
        return 0.0;
    }

    // Scale the hexadecimal exponent to a binary one.
    let mut exponent = (i32::from(leading.exponent()) - 64) * 4;

    while mantissa & 0x0080_0000 == 0 {
        mantissa <<= 1;
        exponent -= 1;
    }
    exponent -= 24;

    let mut value = f64::from(mantissa);
    let step = if exponent < 0 { 0.5 } else { 2.0 };
    for _ in 0..exponent.unsigned_abs() {
        value *= step;
    }

    let value = value as f32;
    if leading.is_negative() { -value } else { value }
}

/// Convert an eight-byte excess-64 real to a primitive.
///
/// A zero mantissa converts to zero, whatever the sign and exponent.
pub fn decode_f64(r: [u8; 8]) -> f64 {
    let leading = Leading(r[0]);

    let mut high = u32::from_be_bytes([0, r[1], r[2], r[3]]);
    let mut low = u32::from_be_bytes([r[4], r[5], r[6], r[7]]);
    if high == 0 && low == 0 {
        return 0.0;
    }

    let mut exponent = i32::from(leading.exponent()) - 64;

    // Shift whole nibbles until the leading hexadecimal digit is non-zero.
    while high & 0x00F0_0000 == 0 {
        high = (high << 4) | (low >> 28);
        low <<= 4;
        exponent -= 1;
    }

    let mantissa = f64::from(high) * 4_294_967_296.0 + f64::from(low);
    let mut value = mantissa / 72_057_594_037_927_936.0;

    if exponent > 0 {
        for _ in 0..exponent {
            value *= 16.0;
        }
    } else if exponent < 0 {
        for _ in 0..-exponent {
            value /= 16.0;
        }
    }

    if leading.is_negative() { -value } else { value }
}
