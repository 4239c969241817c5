//! Decimal formatting for fixed-width integers.
//!
//! Digit extraction exists exactly twice: an iterative ten-slot routine for
//! the canonical 32-bit width and a recursive routine for 64-bit values.
//! Narrower widths widen into the 32-bit path, so every width shares one
//! implementation of the leading-zero and sign rules.

use crate::sink::Sink;

/// Decimal digits in `u32::MAX` (4294967295).
const U32_DIGITS: usize = 10;

/// Write `n` in base-10 ASCII with no leading zeroes.
///
/// Fills a fixed ten-slot buffer from the least significant digit upward,
/// tracking the lowest slot holding a non-`'0'` digit. The tracker defaults
/// to the final slot so the value zero still emits a single `0`. Two passes,
/// no recursion, no heap.
pub fn write_u32<S: Sink>(sink: &mut S, n: u32) -> Result<(), S::Error> {
    let mut digits = [0u8; U32_DIGITS];
    let mut first = U32_DIGITS - 1;
    let mut rest = n;
    let mut i = U32_DIGITS;
    while i > 0 {
        i -= 1;
        let digit = b'0' + (rest % 10) as u8;
        digits[i] = digit;
        if digit != b'0' {
            first = i;
        }
        rest /= 10;
    }
    for &digit in &digits[first..] {
        sink.put(digit)?;
    }
    Ok(())
}

/// Write `n` in base-10 ASCII, most significant digit first.
///
/// Recursive: the quotient's digits are emitted before the current remainder
/// digit, so no buffer is needed. Depth is bounded by the digit count,
/// at most 20 for `u64::MAX`.
pub fn write_u64<S: Sink>(sink: &mut S, n: u64) -> Result<(), S::Error> {
    let rest = n / 10;
    if rest != 0 {
        write_u64(sink, rest)?;
    }
    sink.put(b'0' + (n % 10) as u8)
}

#[inline]
pub fn write_u8<S: Sink>(sink: &mut S, n: u8) -> Result<(), S::Error> {
    write_u32(sink, u32::from(n))
}

#[inline]
pub fn write_u16<S: Sink>(sink: &mut S, n: u16) -> Result<(), S::Error> {
    write_u32(sink, u32::from(n))
}

/// Write `n` as signed decimal: exactly one leading `-` for negative values,
/// never a `+`.
///
/// The magnitude goes through `unsigned_abs`, which is defined for the
/// minimum value of the width, so `i32::MIN` formats as `-2147483648` without
/// any overflowing negation.
pub fn write_i32<S: Sink>(sink: &mut S, n: i32) -> Result<(), S::Error> {
    if n < 0 {
        sink.put(b'-')?;
    }
    write_u32(sink, n.unsigned_abs())
}

/// Signed counterpart of [`write_u64`]; same sign rules as [`write_i32`].
pub fn write_i64<S: Sink>(sink: &mut S, n: i64) -> Result<(), S::Error> {
    if n < 0 {
        sink.put(b'-')?;
    }
    write_u64(sink, n.unsigned_abs())
}

#[inline]
pub fn write_i8<S: Sink>(sink: &mut S, n: i8) -> Result<(), S::Error> {
    write_i32(sink, i32::from(n))
}

#[inline]
pub fn write_i16<S: Sink>(sink: &mut S, n: i16) -> Result<(), S::Error> {
    write_i32(sink, i32::from(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::test_sink::render;
    use std::string::ToString;

    #[test]
    fn zero_is_a_single_digit() {
        assert_eq!(render(|s| write_u32(s, 0)), "0");
        assert_eq!(render(|s| write_u64(s, 0)), "0");
        assert_eq!(render(|s| write_i32(s, 0)), "0");
    }

    #[test]
    fn u32_matches_decimal_parse() {
        for n in [1u32, 9, 10, 11, 99, 100, 1009, 65536, 123456789, u32::MAX] {
            assert_eq!(render(|s| write_u32(s, n)), n.to_string());
        }
    }

    #[test]
    fn u32_has_no_leading_zeroes() {
        for n in [5u32, 50, 500, 1000000, u32::MAX] {
            let text = render(|s| write_u32(s, n));
            assert!(!text.starts_with('0'), "leading zero in {text:?}");
        }
    }

    #[test]
    fn u64_matches_decimal_parse() {
        for n in [1u64, 10, 4294967295, 4294967296, 10000000000000000000, u64::MAX] {
            assert_eq!(render(|s| write_u64(s, n)), n.to_string());
        }
        assert_eq!(render(|s| write_u64(s, u64::MAX)), "18446744073709551615");
    }

    #[test]
    fn u64_agrees_with_u32_on_shared_range() {
        for n in [0u32, 1, 42, 999999, u32::MAX] {
            assert_eq!(
                render(|s| write_u64(s, u64::from(n))),
                render(|s| write_u32(s, n))
            );
        }
    }

    #[test]
    fn narrow_widths_widen() {
        assert_eq!(render(|s| write_u8(s, 0)), "0");
        assert_eq!(render(|s| write_u8(s, u8::MAX)), "255");
        assert_eq!(render(|s| write_u16(s, u16::MAX)), "65535");
        assert_eq!(render(|s| write_i8(s, -1)), "-1");
        assert_eq!(render(|s| write_i16(s, -32000)), "-32000");
    }

    #[test]
    fn signed_sign_rules() {
        assert_eq!(render(|s| write_i32(s, -1)), "-1");
        assert_eq!(render(|s| write_i32(s, 1)), "1");
        assert_eq!(render(|s| write_i64(s, -1234567890123)), "-1234567890123");
        assert_eq!(render(|s| write_i64(s, i64::MAX)), "9223372036854775807");
    }

    #[test]
    fn signed_minimums_do_not_overflow() {
        assert_eq!(render(|s| write_i8(s, i8::MIN)), "-128");
        assert_eq!(render(|s| write_i16(s, i16::MIN)), "-32768");
        assert_eq!(render(|s| write_i32(s, i32::MIN)), "-2147483648");
        assert_eq!(render(|s| write_i64(s, i64::MIN)), "-9223372036854775808");
    }
}
