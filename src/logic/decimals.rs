//! Decimals field parsing
//!
//! The field is free text. Parsing reads a leading base-10 integer and
//! ignores whatever follows it, so "6abc" is 6 and "1.5" is 1.

/// Parse the leading integer of `input`.
///
/// Leading whitespace is skipped and an optional sign is accepted. Returns
/// `None` when no digit follows, or when the digits overflow even an `f64`
/// (they would read as infinity, which is not a count). Magnitudes beyond
/// `i64` but within `f64` saturate.
pub fn parse_decimals(input: &str) -> Option<i64> {
    let rest = input.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() || digits.parse::<f64>().map_or(true, f64::is_infinite) {
        return None;
    }

    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// True when `value` is a usable decimals count
pub fn decimals_in_range(value: Option<i64>) -> bool {
    matches!(value, Some(v) if (0..=i64::from(super::clarity::MAX_DECIMALS)).contains(&v))
}
