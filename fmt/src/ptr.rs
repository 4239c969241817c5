//! Fixed-width hexadecimal rendering of native pointer addresses.

use crate::sink::Sink;
use crate::value::write_str;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Nibbles in a native address; every non-nil address prints at full width.
const PTR_NIBBLES: usize = core::mem::size_of::<usize>() * 2;

/// Write `addr` as `0x` followed by the full-width lowercase hex digits,
/// most significant nibble first, leading zeroes kept. Address 0 is the
/// reserved nil sentinel and prints as `nil`.
///
/// Nibble extraction is shift-based; no division.
pub fn write_ptr<S: Sink>(sink: &mut S, addr: usize) -> Result<(), S::Error> {
    if addr == 0 {
        return write_str(sink, "nil");
    }

    sink.put(b'0')?;
    sink.put(b'x')?;
    let mut addr = addr;
    for _ in 0..PTR_NIBBLES {
        let nibble = addr >> (usize::BITS - 4);
        sink.put(HEX_DIGITS[nibble])?;
        addr <<= 4;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::test_sink::render;
    use std::format;

    #[test]
    fn null_address_is_nil() {
        assert_eq!(render(|s| write_ptr(s, 0)), "nil");
    }

    #[test]
    fn max_address_is_all_f() {
        let expected = format!("0x{}", "f".repeat(PTR_NIBBLES));
        assert_eq!(render(|s| write_ptr(s, usize::MAX)), expected);
    }

    #[test]
    fn full_width_with_leading_zeroes() {
        for addr in [1usize, 0xf, 0x10, 0xdead_beef, usize::MAX >> 4] {
            let expected = format!("0x{addr:0width$x}", width = PTR_NIBBLES);
            let got = render(|s| write_ptr(s, addr));
            assert_eq!(got, expected);
            assert_eq!(got.len(), 2 + PTR_NIBBLES);
        }
    }

    #[test]
    fn digits_are_lowercase() {
        let text = render(|s| write_ptr(s, usize::MAX));
        assert!(!text.contains(char::is_uppercase), "{text:?}");
    }
}
