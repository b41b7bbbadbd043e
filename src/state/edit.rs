//! Inline amount parsing
//!
//! Edited balances and amounts arrive as free text. The policy: strip every
//! character that is not a digit or a dot, then read the longest leading
//! decimal number out of what remains. Currency symbols and grouping commas
//! therefore never break a commit ("$1,234.56" reads as 1234.56).

use crate::models::Money;

/// Result of parsing an edited amount field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedAmount {
    /// Parsed value; 0.00 when the input held no digits
    pub value: Money,
    /// Whether the input held at least one usable digit
    pub valid: bool,
}

/// Parse free-form edited text into a money value
///
/// Fraction digits beyond two are dropped, not rounded ("1.239" reads as
/// 1.23). A second dot ends the number ("12.34.56" reads as 12.34). Values
/// too large for the cent representation saturate instead of wrapping.
pub fn parse_edited_amount(input: &str) -> ParsedAmount {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let bytes = cleaned.as_bytes();

    let mut saw_digit = false;
    let mut overflowed = false;
    let mut units: i64 = 0;
    let mut i = 0;

    while i < bytes.len() && bytes[i].is_ascii_digit() {
        saw_digit = true;
        let digit = i64::from(bytes[i] - b'0');
        match units.checked_mul(10).and_then(|v| v.checked_add(digit)) {
            Some(v) => units = v,
            None => overflowed = true,
        }
        i += 1;
    }

    let mut frac_cents: i64 = 0;
    let mut frac_digits = 0;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            saw_digit = true;
            if frac_digits < 2 {
                frac_cents = frac_cents * 10 + i64::from(bytes[i] - b'0');
                frac_digits += 1;
            }
            i += 1;
        }
    }
    if frac_digits == 1 {
        frac_cents *= 10;
    }

    let cents = if overflowed {
        i64::MAX
    } else {
        units
            .checked_mul(100)
            .and_then(|v| v.checked_add(frac_cents))
            .unwrap_or(i64::MAX)
    };

    ParsedAmount {
        value: Money::from_cents(cents),
        valid: saw_digit,
    }
}
