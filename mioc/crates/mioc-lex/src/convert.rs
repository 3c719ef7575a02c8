//! Numeric literal conversion.
//!
//! Pure, stateless conversion of literal text (already delimited by the
//! scanner) into fixed-width signed integers or IEEE floats, with
//! explicit range checking. The scanner drives these functions for every
//! numeric literal; the same functions are usable on their own for
//! re-parsing a literal's text.

use thiserror::Error;

/// Target width for integer conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntWidth {
    /// 8-bit signed integer (`b` suffix).
    I8,
    /// 16-bit signed integer (`w` suffix).
    I16,
    /// 32-bit signed integer (`d` suffix).
    I32,
    /// 64-bit signed integer (`q` suffix, and unsuffixed decimals).
    I64,
}

impl IntWidth {
    /// Maximum number of decimal digits a literal of this width may have.
    ///
    /// A digit string longer than this is rejected outright, even when
    /// leading zeros would keep the value in range.
    pub const fn max_decimal_digits(self) -> usize {
        match self {
            IntWidth::I8 => 3,
            IntWidth::I16 => 5,
            IntWidth::I32 => 10,
            IntWidth::I64 => 19,
        }
    }

    /// Maximum number of hex digits (nibbles) this width can hold.
    pub const fn max_nibbles(self) -> usize {
        match self {
            IntWidth::I8 => 2,
            IntWidth::I16 => 4,
            IntWidth::I32 => 8,
            IntWidth::I64 => 16,
        }
    }

    /// Smallest value representable at this width.
    pub const fn min(self) -> i64 {
        match self {
            IntWidth::I8 => i8::MIN as i64,
            IntWidth::I16 => i16::MIN as i64,
            IntWidth::I32 => i32::MIN as i64,
            IntWidth::I64 => i64::MIN,
        }
    }

    /// Largest value representable at this width.
    pub const fn max(self) -> i64 {
        match self {
            IntWidth::I8 => i8::MAX as i64,
            IntWidth::I16 => i16::MAX as i64,
            IntWidth::I32 => i32::MAX as i64,
            IntWidth::I64 => i64::MAX,
        }
    }

    /// The narrowest width whose hex-digit capacity covers `count` nibbles.
    ///
    /// Selection is by digit count alone, independent of magnitude:
    /// `0x001` has three nibbles and therefore lands in a 16-bit width.
    /// Returns `None` for zero digits or more than 16.
    pub fn for_nibbles(count: usize) -> Option<Self> {
        match count {
            0 => None,
            1..=2 => Some(IntWidth::I8),
            3..=4 => Some(IntWidth::I16),
            5..=8 => Some(IntWidth::I32),
            9..=16 => Some(IntWidth::I64),
            _ => None,
        }
    }
}

/// Failure modes of numeric literal conversion.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// The span held no digits (or only a sign).
    #[error("empty numeric literal")]
    Empty,
    /// A character outside the radix's digit set.
    #[error("invalid digit '{0}' in numeric literal")]
    InvalidDigit(char),
    /// Too many digits for the width, or a value outside [MIN, MAX].
    #[error("numeric literal out of range for {0:?}")]
    OutOfRange(IntWidth),
}

/// Parse a decimal integer literal with range checking.
///
/// Accepts an optional leading `-`; every remaining character must be an
/// ASCII digit. Both a digit string longer than the width's maximum
/// decimal length and an in-range-length but out-of-range value are
/// rejected the same way.
///
/// # Examples
///
/// ```
/// use mioc_lex::convert::{parse_decimal, IntWidth};
///
/// assert_eq!(parse_decimal("127", IntWidth::I8), Ok(127));
/// assert_eq!(parse_decimal("-128", IntWidth::I8), Ok(-128));
/// assert!(parse_decimal("128", IntWidth::I8).is_err());
/// assert!(parse_decimal("0000001", IntWidth::I8).is_err());
/// ```
pub fn parse_decimal(text: &str, width: IntWidth) -> Result<i64, ConvertError> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    if digits.is_empty() {
        return Err(ConvertError::Empty);
    }
    if digits.len() > width.max_decimal_digits() {
        return Err(ConvertError::OutOfRange(width));
    }

    // At most 19 digits here, so the magnitude fits in a u64.
    let mut magnitude: u64 = 0;
    for c in digits.chars() {
        let digit = c.to_digit(10).ok_or(ConvertError::InvalidDigit(c))?;
        magnitude = magnitude * 10 + u64::from(digit);
    }

    let value = if negative {
        -(magnitude as i128)
    } else {
        magnitude as i128
    };
    if value < width.min() as i128 || value > width.max() as i128 {
        return Err(ConvertError::OutOfRange(width));
    }
    Ok(value as i64)
}

/// Parse a hexadecimal integer literal as a raw bit pattern.
///
/// No sign handling; digits are case-insensitive. The accumulated bits
/// are reinterpreted as a two's-complement value of the target width, so
/// an all-F pattern produces a negative value: width-8 `"80"` is −128.
///
/// # Examples
///
/// ```
/// use mioc_lex::convert::{parse_hex, IntWidth};
///
/// assert_eq!(parse_hex("7f", IntWidth::I8), Ok(127));
/// assert_eq!(parse_hex("80", IntWidth::I8), Ok(-128));
/// assert_eq!(parse_hex("FFFF", IntWidth::I16), Ok(-1));
/// assert!(parse_hex("100", IntWidth::I8).is_err());
/// ```
pub fn parse_hex(text: &str, width: IntWidth) -> Result<i64, ConvertError> {
    if text.is_empty() {
        return Err(ConvertError::Empty);
    }
    if text.len() > width.max_nibbles() {
        return Err(ConvertError::OutOfRange(width));
    }

    let mut bits: u64 = 0;
    for c in text.chars() {
        let digit = c.to_digit(16).ok_or(ConvertError::InvalidDigit(c))?;
        bits = (bits << 4) | u64::from(digit);
    }

    Ok(match width {
        IntWidth::I8 => bits as u8 as i8 as i64,
        IntWidth::I16 => bits as u16 as i16 as i64,
        IntWidth::I32 => bits as u32 as i32 as i64,
        IntWidth::I64 => bits as i64,
    })
}

/// Parse a 32-bit float literal.
///
/// Delegates to the platform's locale-independent parser; unparsable
/// input yields 0.0 with no failure signal.
pub fn parse_f32(text: &str) -> f32 {
    text.parse().unwrap_or(0.0)
}

/// Parse a 64-bit float literal.
///
/// Same contract as [`parse_f32`].
pub fn parse_f64(text: &str) -> f64 {
    text.parse().unwrap_or(0.0)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn decimal_round_trips_in_range_i8(v in i8::MIN..=i8::MAX) {
            prop_assert_eq!(parse_decimal(&v.to_string(), IntWidth::I8), Ok(v as i64));
        }

        #[test]
        fn decimal_round_trips_in_range_i64(v in any::<i64>()) {
            prop_assert_eq!(parse_decimal(&v.to_string(), IntWidth::I64), Ok(v));
        }

        #[test]
        fn overlong_digit_strings_always_rejected(
            digits in proptest::collection::vec(0u8..10, 20..30)
        ) {
            let text: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
            for width in [IntWidth::I8, IntWidth::I16, IntWidth::I32, IntWidth::I64] {
                prop_assert!(parse_decimal(&text, width).is_err());
            }
        }

        #[test]
        fn hex_value_fits_width(text in "[0-9a-fA-F]{1,2}") {
            let v = parse_hex(&text, IntWidth::I8).unwrap();
            prop_assert!((i8::MIN as i64..=i8::MAX as i64).contains(&v));
        }
    }
}
