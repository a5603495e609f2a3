use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Leading numeric prefix of an input field
    /// Matches: optional sign, digits with optional fraction (or a bare fraction), optional exponent
    /// Examples: "12", "-3.5", ".25", "1e3", "  42px" (prefix "42")
    static ref NUMBER_PREFIX: Regex = Regex::new(
        r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?"
    ).unwrap();
}

/// Parse the numeric prefix of a user-typed value.
/// Returns `None` when there is no numeric prefix or the value is not finite.
pub fn parse_number(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();
    let prefix = NUMBER_PREFIX.find(trimmed)?.as_str();
    prefix.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Six decimals with insignificant trailing zeros (and a bare point) removed
pub fn format_linear(value: f64) -> String {
    let fixed = to_fixed(value, 6);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Exactly four decimals, never trimmed
pub fn format_temperature(value: f64) -> String {
    to_fixed(value, 4)
}

/// Fixed-point rendering that rounds exact halves away from zero.
/// A result that rounds to zero carries no sign.
pub fn to_fixed(value: f64, digits: usize) -> String {
    // Enough fractional digits to hold any f64 exactly
    let exact = format!("{:.1100}", value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .collect();

    let round_up = frac_part.as_bytes().get(digits).is_some_and(|&d| d >= b'5');
    if round_up {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let point = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value.is_sign_negative() && kept.iter().any(|&d| d != b'0') {
        out.push('-');
    }
    out.extend(kept[..point].iter().map(|&d| d as char));
    if digits > 0 {
        out.push('.');
        out.extend(kept[point..].iter().map(|&d| d as char));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("1"), Some(1.0));
        assert_eq!(parse_number("-20.5"), Some(-20.5));
        assert_eq!(parse_number(".25"), Some(0.25));
        assert_eq!(parse_number("5."), Some(5.0));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("  42px"), Some(42.0));
        assert_eq!(parse_number("12abc"), Some(12.0));

        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("Infinity"), None);
        assert_eq!(parse_number("1e400"), None);
    }

    #[test]
    fn test_format_linear_trims_zeros() {
        assert_eq!(format_linear(3.28084), "3.28084");
        assert_eq!(format_linear(1.0), "1");
        assert_eq!(format_linear(100.0), "100");
        assert_eq!(format_linear(10.5), "10.5");
        assert_eq!(format_linear(0.0), "0");
        assert_eq!(format_linear(0.0000001), "0");
        assert_eq!(format_linear(-0.0000001), "0");
        assert_eq!(format_linear(-2.5), "-2.5");
    }

    #[test]
    fn test_format_temperature_is_fixed() {
        assert_eq!(format_temperature(32.0), "32.0000");
        assert_eq!(format_temperature(373.15), "373.1500");
        assert_eq!(format_temperature(-40.0), "-40.0000");
        assert_eq!(format_temperature(-0.00001), "0.0000");
    }

    #[test]
    fn test_exact_halves_round_away_from_zero() {
        assert_eq!(to_fixed(0.0078125, 6), "0.007813");
        assert_eq!(to_fixed(-0.0078125, 6), "-0.007813");
        assert_eq!(to_fixed(0.03125, 4), "0.0313");
        assert_eq!(to_fixed(-0.03125, 4), "-0.0313");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(0.5, 0), "1");
    }

    #[test]
    fn test_rounding_uses_the_exact_binary_value() {
        // 1.005 is stored just below 1.005
        assert_eq!(to_fixed(1.005, 2), "1.00");
        // 373.15 is stored just below 373.15
        assert_eq!(to_fixed(373.15, 4), "373.1500");
    }

    #[test]
    fn test_carry_into_integer_part() {
        assert_eq!(to_fixed(9.9999996, 6), "10.000000");
        assert_eq!(to_fixed(99.99996, 4), "100.0000");
    }

    #[test]
    fn test_large_values_stay_in_plain_decimal() {
        assert_eq!(format_linear(1e21), "1000000000000000000000");
        assert_eq!(format_temperature(1e21), "1000000000000000000000.0000");
    }
}
