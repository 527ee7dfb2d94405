//! Numeric parsing and formatting of text.
//!
//! Parsing accepts leading whitespace and trailing spaces or tabs, but no
//! other trailing bytes. Integer forms detect their radix from the prefix:
//! `0x` is hex, a leading `0` is octal, anything else decimal. Floats take
//! the same `0x` hex integers and otherwise decimal or exponent notation.

fn trim(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|&b| b != b' ' && b != b'\t')
        .map_or(start, |i| i + 1);
    &bytes[start..end.max(start)]
}

/// Parse a float. `None` for empty or malformed text.
pub fn parse_f64(bytes: &[u8]) -> Option<f64> {
    let body = trim(bytes);
    if body.is_empty() {
        return None;
    }
    if let (negative, 16, digits) = split_radix(body) {
        let magnitude = parse_magnitude(digits, 16)? as f64;
        return Some(if negative { -magnitude } else { magnitude });
    }
    std::str::from_utf8(body).ok()?.parse().ok()
}

/// Split an optional sign, then detect the radix.
fn split_radix(body: &[u8]) -> (bool, u32, &[u8]) {
    let (negative, rest) = match body.first() {
        Some(b'-') => (true, &body[1..]),
        Some(b'+') => (false, &body[1..]),
        _ => (false, body),
    };
    if rest.len() > 2 && rest[0] == b'0' && (rest[1] == b'x' || rest[1] == b'X') {
        return (negative, 16, &rest[2..]);
    }
    if rest.len() > 1 && rest[0] == b'0' {
        return (negative, 8, &rest[1..]);
    }
    (negative, 10, rest)
}

fn parse_magnitude(digits: &[u8], radix: u32) -> Option<u64> {
    if digits.is_empty() {
        return None;
    }
    let digits = std::str::from_utf8(digits).ok()?;
    if digits.starts_with(['+', '-']) {
        return None;
    }
    u64::from_str_radix(digits, radix).ok()
}

/// Parse a signed integer. Overflow counts as malformed.
pub fn parse_i64(bytes: &[u8]) -> Option<i64> {
    let (negative, radix, digits) = split_radix(trim(bytes));
    let magnitude = parse_magnitude(digits, radix)?;
    if negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    }
}

/// Parse an unsigned integer. A minus sign counts as malformed.
pub fn parse_u64(bytes: &[u8]) -> Option<u64> {
    let (negative, radix, digits) = split_radix(trim(bytes));
    if negative {
        return None;
    }
    parse_magnitude(digits, radix)
}

/// Whether `n` is integral and representable as `i64`.
pub fn integral_i64(n: f64) -> Option<i64> {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    (n.is_finite() && n.floor() == n && (-LIMIT..LIMIT).contains(&n)).then_some(n as i64)
}

/// Fixed-point rendering with six decimals.
pub fn format_f64(n: f64) -> String {
    if n.is_nan() {
        "nan".to_string()
    } else if n.is_infinite() && n.is_sign_positive() {
        "inf".to_string()
    } else if n.is_infinite() {
        "-inf".to_string()
    } else {
        format!("{n:.6}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats() {
        assert_eq!(parse_f64(b"1.5"), Some(1.5));
        assert_eq!(parse_f64(b"  -2e3 \t"), Some(-2000.0));
        assert_eq!(parse_f64(b".5"), Some(0.5));
        assert_eq!(parse_f64(b""), None);
        assert_eq!(parse_f64(b"   "), None);
        assert_eq!(parse_f64(b"1.5x"), None);
        assert_eq!(parse_f64(b"1.5\n"), None);
    }

    #[test]
    fn hex_floats() {
        assert_eq!(parse_f64(b"0x10"), Some(16.0));
        assert_eq!(parse_f64(b" -0XfF "), Some(-255.0));
        assert_eq!(parse_f64(b"+0x1"), Some(1.0));
        assert_eq!(parse_f64(b"0x"), None);
        assert_eq!(parse_f64(b"0xg"), None);
        // a leading zero stays decimal for floats
        assert_eq!(parse_f64(b"010"), Some(10.0));
    }

    #[test]
    fn signed_integers() {
        assert_eq!(parse_i64(b"42"), Some(42));
        assert_eq!(parse_i64(b"-42"), Some(-42));
        assert_eq!(parse_i64(b"0x1F"), Some(31));
        assert_eq!(parse_i64(b"017"), Some(15));
        assert_eq!(parse_i64(b"0"), Some(0));
        assert_eq!(parse_i64(b"-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_i64(b"9223372036854775808"), None);
        assert_eq!(parse_i64(b"08"), None);
        assert_eq!(parse_i64(b"1.0"), None);
        assert_eq!(parse_i64(b"--1"), None);
    }

    #[test]
    fn unsigned_integers() {
        assert_eq!(parse_u64(b"7"), Some(7));
        assert_eq!(parse_u64(b" 3 "), Some(3));
        assert_eq!(parse_u64(b"-1"), None);
        assert_eq!(parse_u64(b"length"), None);
        assert_eq!(parse_u64(b""), None);
    }

    #[test]
    fn integral_detection() {
        assert_eq!(integral_i64(3.0), Some(3));
        assert_eq!(integral_i64(-0.0), Some(0));
        assert_eq!(integral_i64(2.5), None);
        assert_eq!(integral_i64(1e30), None);
        assert_eq!(integral_i64(f64::NAN), None);
    }

    #[test]
    fn fixed_point() {
        assert_eq!(format_f64(2.5), "2.500000");
        assert_eq!(format_f64(f64::INFINITY), "inf");
        assert_eq!(format_f64(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_f64(f64::NAN), "nan");
    }
}
