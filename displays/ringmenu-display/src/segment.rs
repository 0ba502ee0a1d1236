//! Seven-segment glyphs
//!
//! Segment bits are `gfedcba` in bits 0-6 with the decimal point in bit 7,
//! the layout most segment driver chips (MAX7219 in no-decode mode, TM1637,
//! 74HC595 chains) expect.
//!
//! ```text
//!    aaa
//!   f   b
//!    ggg
//!   e   c
//!    ddd  (dp)
//! ```

use core::fmt::Write;

use heapless::{String, Vec};

use crate::backend::DisplayError;

/// Decimal point segment
pub const DP: u8 = 0x80;

/// Segment pattern for a character
///
/// Letters without a readable seven-segment form render blank.
pub fn glyph(ch: char) -> u8 {
    match ch {
        '0' | 'O' => 0x3F,
        '1' => 0x06,
        '2' => 0x5B,
        '3' => 0x4F,
        '4' => 0x66,
        '5' | 'S' | 's' => 0x6D,
        '6' => 0x7D,
        '7' => 0x07,
        '8' => 0x7F,
        '9' | 'g' => 0x6F,
        'A' | 'a' => 0x77,
        'B' | 'b' => 0x7C,
        'C' => 0x39,
        'c' => 0x58,
        'D' | 'd' => 0x5E,
        'E' | 'e' => 0x79,
        'F' | 'f' => 0x71,
        'G' => 0x3D,
        'H' => 0x76,
        'h' => 0x74,
        'I' => 0x30,
        'i' => 0x10,
        'J' | 'j' => 0x1E,
        'L' | 'l' => 0x38,
        'N' | 'n' => 0x54,
        'o' => 0x5C,
        'P' | 'p' => 0x73,
        'Q' | 'q' => 0x67,
        'R' | 'r' => 0x50,
        'T' | 't' => 0x78,
        'U' => 0x3E,
        'u' | 'v' => 0x1C,
        'Y' | 'y' => 0x6E,
        '-' => 0x40,
        '_' => 0x08,
        '=' => 0x48,
        '"' => 0x22,
        '\'' => 0x02,
        '°' => 0x63,
        _ => 0x00,
    }
}

/// Encode text for a `DIGITS`-position segment display
///
/// A `.` lights the decimal point of the preceding digit instead of taking
/// a position of its own; a leading `.` or a second `.` in a row gets a
/// blank digit. Fails with [`DisplayError::BufferOverflow`] if the text
/// needs more than `DIGITS` positions.
pub fn encode<const DIGITS: usize>(text: &str) -> Result<Vec<u8, DIGITS>, DisplayError> {
    let mut digits: Vec<u8, DIGITS> = Vec::new();

    for ch in text.chars() {
        if ch == '.' {
            if let Some(last) = digits.last_mut() {
                if *last & DP == 0 {
                    *last |= DP;
                    continue;
                }
            }
            digits
                .push(DP)
                .map_err(|_| DisplayError::BufferOverflow)?;
            continue;
        }

        digits
            .push(glyph(ch))
            .map_err(|_| DisplayError::BufferOverflow)?;
    }

    Ok(digits)
}

/// Encode a real right-aligned on a `DIGITS`-position segment display
///
/// The decimal point shares a digit, so more places fit than on a character
/// display of the same width. Decimal places are dropped one at a time until
/// the value fits; [`DisplayError::BufferOverflow`] if it never does or the
/// value is not finite.
pub fn encode_real<const DIGITS: usize>(
    value: f64,
    decimals: u8,
) -> Result<Vec<u8, DIGITS>, DisplayError> {
    if !value.is_finite() {
        return Err(DisplayError::BufferOverflow);
    }

    let mut scratch: String<32> = String::new();
    for precision in (0..=decimals as usize).rev() {
        scratch.clear();
        if write!(scratch, "{:.*}", precision, value).is_err() {
            continue;
        }

        let used = width(&scratch);
        if used > DIGITS {
            continue;
        }

        let mut digits: Vec<u8, DIGITS> = Vec::new();
        for _ in used..DIGITS {
            digits
                .push(glyph(' '))
                .map_err(|_| DisplayError::BufferOverflow)?;
        }
        for segments in encode::<DIGITS>(&scratch)? {
            digits
                .push(segments)
                .map_err(|_| DisplayError::BufferOverflow)?;
        }
        return Ok(digits);
    }

    Err(DisplayError::BufferOverflow)
}

/// Number of digit positions `text` occupies once encoded
pub fn width(text: &str) -> usize {
    let mut count = 0;
    let mut dp_free = false;
    for ch in text.chars() {
        if ch == '.' && dp_free {
            dp_free = false;
        } else {
            count += 1;
            dp_free = ch != '.';
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        assert_eq!(glyph('0'), 0x3F);
        assert_eq!(glyph('8'), 0x7F);
        assert_eq!(glyph('-'), 0x40);
        assert_eq!(glyph(' '), 0x00);
        assert_eq!(glyph('W'), 0x00);
    }

    #[test]
    fn test_decimal_point_merges() {
        let digits = encode::<4>("12.34").unwrap();
        assert_eq!(digits.as_slice(), &[0x06, 0x5B | DP, 0x4F, 0x66]);
        assert_eq!(width("12.34"), 4);
    }

    #[test]
    fn test_leading_and_double_point() {
        let digits = encode::<4>(".5..").unwrap();
        assert_eq!(digits.as_slice(), &[DP, 0x6D | DP, DP]);
        assert_eq!(width(".5.."), 3);
    }

    #[test]
    fn test_too_many_digits() {
        assert_eq!(encode::<4>("12345"), Err(DisplayError::BufferOverflow));
        assert!(encode::<4>("1.2.3.4.").is_ok());
    }

    #[test]
    fn test_real_keeps_point_inside_digit() {
        let digits = encode_real::<4>(12.76, 2).unwrap();
        assert_eq!(digits.as_slice(), &[0x06, 0x5B | DP, 0x7D, 0x07]);

        let digits = encode_real::<4>(123.4, 2).unwrap();
        assert_eq!(digits.as_slice(), &[0x06, 0x5B, 0x4F | DP, 0x66]);
    }

    #[test]
    fn test_real_right_aligned() {
        let digits = encode_real::<4>(7.5, 1).unwrap();
        assert_eq!(digits.as_slice(), &[0x00, 0x00, 0x07 | DP, 0x6D]);
    }

    #[test]
    fn test_real_that_never_fits() {
        assert_eq!(encode_real::<4>(12345.0, 1), Err(DisplayError::BufferOverflow));
        assert_eq!(encode_real::<4>(f64::NAN, 1), Err(DisplayError::BufferOverflow));
    }
}
