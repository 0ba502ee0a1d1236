//! Fixed-width number formatting
//!
//! Numbers are right-aligned to the display width. A value that cannot be
//! shown is replaced by a row of [`OVERFLOW_CHAR`] rather than a misleading
//! truncation.

use core::fmt::Write;

use heapless::String;

/// Fill character for values that do not fit
pub const OVERFLOW_CHAR: char = '-';

/// Scratch size, enough for any i64 and reasonable reals
const SCRATCH_LEN: usize = 32;

/// Right-align `value` into `out`
pub fn integer_into<const COLS: usize>(value: i64, out: &mut String<COLS>) {
    let mut scratch: String<SCRATCH_LEN> = String::new();
    if write!(scratch, "{}", value).is_err() || !right_align(&scratch, out) {
        overflow(out);
    }
}

/// Right-align `value` with up to `decimals` places into `out`
///
/// Decimal places are dropped one at a time until the value fits. The point
/// takes a column of its own; segment displays use
/// [`segment::encode_real`](crate::segment::encode_real) instead.
pub fn real_into<const COLS: usize>(value: f64, decimals: u8, out: &mut String<COLS>) {
    if !value.is_finite() {
        overflow(out);
        return;
    }

    let mut scratch: String<SCRATCH_LEN> = String::new();
    for precision in (0..=decimals as usize).rev() {
        scratch.clear();
        if write!(scratch, "{:.*}", precision, value).is_ok() && right_align(&scratch, out) {
            return;
        }
    }
    overflow(out);
}

/// Fill `out` with the overflow marker
pub fn overflow<const COLS: usize>(out: &mut String<COLS>) {
    out.clear();
    for _ in 0..COLS {
        if out.push(OVERFLOW_CHAR).is_err() {
            break;
        }
    }
}

fn right_align<const COLS: usize>(text: &str, out: &mut String<COLS>) -> bool {
    out.clear();
    if text.len() > COLS {
        return false;
    }
    for _ in text.len()..COLS {
        let _ = out.push(' ');
    }
    out.push_str(text).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int<const COLS: usize>(value: i64) -> String<COLS> {
        let mut out = String::new();
        integer_into(value, &mut out);
        out
    }

    fn real<const COLS: usize>(value: f64, decimals: u8) -> String<COLS> {
        let mut out = String::new();
        real_into(value, decimals, &mut out);
        out
    }

    #[test]
    fn test_integer_right_aligned() {
        assert_eq!(int::<4>(7).as_str(), "   7");
        assert_eq!(int::<4>(-42).as_str(), " -42");
        assert_eq!(int::<4>(9999).as_str(), "9999");
    }

    #[test]
    fn test_integer_overflow() {
        assert_eq!(int::<4>(10000).as_str(), "----");
        assert_eq!(int::<4>(-1000).as_str(), "----");
        assert_eq!(int::<8>(i64::MIN).as_str(), "--------");
    }

    #[test]
    fn test_real_drops_decimals_to_fit() {
        assert_eq!(real::<6>(3.14159, 2).as_str(), "  3.14");
        assert_eq!(real::<4>(12.76, 2).as_str(), "12.8");
        assert_eq!(real::<4>(123.4, 2).as_str(), " 123");
    }

    #[test]
    fn test_real_overflow() {
        assert_eq!(real::<4>(12345.0, 1).as_str(), "----");
        assert_eq!(real::<4>(f64::NAN, 1).as_str(), "----");
        assert_eq!(real::<4>(f64::INFINITY, 1).as_str(), "----");
    }
}
