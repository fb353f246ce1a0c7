//! Locale-independent lenient number parsing.

/// Parses the longest numeric prefix of `s` as an `f64`.
///
/// Providers ship observation values as quoted strings, sometimes with
/// placeholders such as `"."` or `"NaN"` for missing data. This never fails:
/// leading whitespace is skipped, trailing garbage is ignored, and a string
/// without a numeric prefix yields `0.0`.
///
/// # Example
///
/// ```
/// use findata_types::parse_lenient_f64;
///
/// assert_eq!(parse_lenient_f64("5.33"), 5.33);
/// assert_eq!(parse_lenient_f64("  -1.5e2xyz"), -150.0);
/// assert_eq!(parse_lenient_f64("."), 0.0);
/// ```
#[must_use]
pub fn parse_lenient_f64(s: &str) -> f64 {
    let s = s.trim_start();
    let end = numeric_prefix_len(s.as_bytes());

    // Shrink until the prefix parses ("1e" or "1." style tails).
    (1..=end)
        .rev()
        .find_map(|len| s[..len].parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Length of the leading run of bytes that may belong to a decimal float.
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let mut len = 0;
    let mut seen_exp = false;
    for (i, &b) in bytes.iter().enumerate() {
        let ok = match b {
            b'0'..=b'9' | b'.' => true,
            b'+' | b'-' => i == 0 || matches!(bytes[i - 1], b'e' | b'E'),
            b'e' | b'E' if !seen_exp && i > 0 => {
                seen_exp = true;
                true
            }
            _ => false,
        };
        if !ok {
            break;
        }
        len = i + 1;
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_plain_numbers() {
        assert_relative_eq!(parse_lenient_f64("131.0"), 131.0);
        assert_relative_eq!(parse_lenient_f64("-0.25"), -0.25);
        assert_relative_eq!(parse_lenient_f64("+4"), 4.0);
    }

    #[test]
    fn test_exponent() {
        assert_relative_eq!(parse_lenient_f64("1.2E3"), 1200.0);
        assert_relative_eq!(parse_lenient_f64("1e-2"), 0.01);
        assert_relative_eq!(parse_lenient_f64("7e"), 7.0);
    }

    #[test]
    fn test_garbage_yields_zero() {
        assert_eq!(parse_lenient_f64(""), 0.0);
        assert_eq!(parse_lenient_f64("."), 0.0);
        assert_eq!(parse_lenient_f64("n/a"), 0.0);
        assert_eq!(parse_lenient_f64("-"), 0.0);
    }

    #[test]
    fn test_trailing_garbage_ignored() {
        assert_relative_eq!(parse_lenient_f64("  12.5%"), 12.5);
        assert_relative_eq!(parse_lenient_f64("3.14.15"), 3.14);
    }
}
