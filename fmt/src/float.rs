//! Fixed-notation decimal formatting for IEEE-754 floats.
//!
//! Output is always `[+-]d.dddddd e[+-]ddd`: a mandatory mantissa sign, one
//! integer digit, six fractional digits (seven significant digits total) and
//! a three-digit zero-padded signed decimal exponent. Special values render
//! as `NaN`, `+Inf` and `-Inf`. Downstream log tooling parses this exact
//! shape, so the digit extraction below must not change.
//!
//! The algorithm normalizes the magnitude into `[1, 10)` by repeated
//! division/multiplication by 10, rounds by adding half a unit in the last
//! printed place, then peels off digits with truncate/subtract/multiply.
//! Scratch space is a single 14-byte stack buffer.

use crate::sink::Sink;
use crate::value::write_str;

/// Significant digits printed.
const DIGITS: usize = 7;

/// Formatted length: sign + 7 digits + '.' + 'e' + exponent sign + 3 digits.
const BUF_LEN: usize = DIGITS + 7;

/// Write `v` in fixed seven-significant-digit notation.
pub fn write_f64<S: Sink>(sink: &mut S, v: f64) -> Result<(), S::Error> {
    if v.is_nan() {
        return write_str(sink, "NaN");
    }
    if v.is_infinite() {
        return write_str(sink, if v > 0.0 { "+Inf" } else { "-Inf" });
    }

    let mut buf = [0u8; BUF_LEN];
    buf[0] = b'+';
    let mut e: i32 = 0;
    let mut v = v;

    if v == 0.0 {
        // Signed zero keeps its sign bit.
        if v.is_sign_negative() {
            buf[0] = b'-';
        }
    } else {
        if v < 0.0 {
            v = -v;
            buf[0] = b'-';
        }

        // Normalize into [1, 10), tracking the decimal exponent.
        while v >= 10.0 {
            e += 1;
            v /= 10.0;
        }
        while v < 1.0 {
            e -= 1;
            v *= 10.0;
        }

        // Round half a unit in the last printed place.
        let mut half = 5.0;
        for _ in 0..DIGITS {
            half /= 10.0;
        }
        v += half;
        if v >= 10.0 {
            e += 1;
            v /= 10.0;
        }
    }

    // Peel off the significant digits, most significant first.
    for slot in buf.iter_mut().skip(2).take(DIGITS) {
        let digit = v as u8;
        *slot = b'0' + digit;
        v -= f64::from(digit);
        v *= 10.0;
    }
    buf[1] = buf[2];
    buf[2] = b'.';

    buf[DIGITS + 2] = b'e';
    buf[DIGITS + 3] = b'+';
    if e < 0 {
        e = -e;
        buf[DIGITS + 3] = b'-';
    }
    buf[DIGITS + 4] = b'0' + (e / 100) as u8;
    buf[DIGITS + 5] = b'0' + (e / 10 % 10) as u8;
    buf[DIGITS + 6] = b'0' + (e % 10) as u8;

    for &byte in &buf {
        sink.put(byte)?;
    }
    Ok(())
}

/// Write a 32-bit float by widening to 64 bits.
///
/// There is no native single-precision path; the widened rendering is
/// correct but does not exploit binary32's shorter decimal boundaries.
#[inline]
pub fn write_f32<S: Sink>(sink: &mut S, v: f32) -> Result<(), S::Error> {
    write_f64(sink, f64::from(v))
}
