//! Dynamic values as the host runtime sees them.

use std::fmt;

/// A dynamically-typed host value.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// The absent value. Also what a missing argument reads as.
    #[default]
    Undefined,
    /// The explicit empty value.
    Null,
    /// A boolean.
    Boolean(bool),
    /// A double-precision number.
    Number(f64),
    /// A text value.
    String(String),
}

impl Value {
    /// Get the host type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
        }
    }

    /// Convert to a number using the host's ToNumber rule.
    ///
    /// Never fails; values without a numeric reading become NaN.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined => f64::NAN,
            Value::Null => 0.0,
            Value::Boolean(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Number(n) => *n,
            Value::String(s) => string_to_number(s),
        }
    }

    /// Get the number held by this value, if it is one.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Check if this is a NaN number.
    #[inline]
    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Number(n) if n.is_nan())
    }

    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => fmt_number(*n, f),
            Value::String(s) => write!(f, "{}", s),
        }
    }
}

fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        if n > 0.0 {
            write!(f, "Infinity")
        } else {
            write!(f, "-Infinity")
        }
    } else if n == 0.0 {
        // Negative zero prints as "0".
        write!(f, "0")
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        // Exponent form carries an explicit sign: 1e+21, 1e-7.
        let exp = format!("{:e}", n);
        match exp.split_once('e') {
            Some((mantissa, e)) if !e.starts_with('-') => write!(f, "{}e+{}", mantissa, e),
            _ => write!(f, "{}", exp),
        }
    } else {
        write!(f, "{}", n)
    }
}

/// Host whitespace: Unicode white space plus the byte order mark, minus
/// NEL (U+0085), which the host does not treat as white space.
fn is_host_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Parse a string with the host's StringToNumber grammar.
///
/// Accepts surrounding whitespace, the empty string (as 0), signed
/// `Infinity`, unsigned `0x`/`0o`/`0b` integer literals, and signed decimal
/// literals with optional fraction and exponent. Anything else is NaN.
pub fn string_to_number(s: &str) -> f64 {
    let trimmed = s.trim_matches(is_host_whitespace);
    if trimmed.is_empty() {
        return 0.0;
    }

    if let Some(n) = parse_radix_literal(trimmed) {
        return n;
    }

    let (sign, unsigned) = match trimmed.as_bytes()[0] {
        b'+' => (1.0, &trimmed[1..]),
        b'-' => (-1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };

    if unsigned == "Infinity" {
        return sign * f64::INFINITY;
    }

    if !is_decimal_literal(unsigned) {
        return f64::NAN;
    }

    unsigned
        .parse::<f64>()
        .map(|n| sign * n)
        .unwrap_or(f64::NAN)
}

/// Parse `0x`, `0o` or `0b` prefixed literals. Returns None if there is no
/// such prefix, and NaN if the prefix is present but the digits are invalid.
fn parse_radix_literal(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }

    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let mut acc = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => acc = acc * f64::from(radix) + f64::from(d),
            None => return Some(f64::NAN),
        }
    }
    Some(acc)
}

/// Check the unsigned decimal literal grammar:
/// `digits [. digits] [e|E [+|-] digits]` or `. digits [exponent]`.
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        frac_digits = i - frac_start;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_number_primitives() {
        assert!(Value::Undefined.to_number().is_nan());
        assert_eq!(Value::Null.to_number(), 0.0);
        assert_eq!(Value::Boolean(true).to_number(), 1.0);
        assert_eq!(Value::Boolean(false).to_number(), 0.0);
        assert_eq!(Value::Number(2.5).to_number(), 2.5);
    }

    #[test]
    fn test_string_to_number_decimal() {
        assert_eq!(string_to_number("42"), 42.0);
        assert_eq!(string_to_number("  -7.5  "), -7.5);
        assert_eq!(string_to_number("+3"), 3.0);
        assert_eq!(string_to_number("1e3"), 1000.0);
        assert_eq!(string_to_number(".5"), 0.5);
        assert_eq!(string_to_number("5."), 5.0);
        assert_eq!(string_to_number(""), 0.0);
        assert_eq!(string_to_number(" \n\t"), 0.0);
    }

    #[test]
    fn test_string_to_number_radix_and_infinity() {
        assert_eq!(string_to_number("0x1F"), 31.0);
        assert_eq!(string_to_number("0o17"), 15.0);
        assert_eq!(string_to_number("0b101"), 5.0);
        assert_eq!(string_to_number("Infinity"), f64::INFINITY);
        assert_eq!(string_to_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_string_to_number_rejects_garbage() {
        for s in ["abc", "12abc", "0x", "0xZZ", "-0x10", "inf", "nan", "NaN", "1e", ".", "1..2", "- 1"] {
            assert!(string_to_number(s).is_nan(), "expected NaN for {:?}", s);
        }
    }

    #[test]
    fn test_display_matches_host_rendering() {
        assert_eq!(Value::Undefined.to_string(), "undefined");
        assert_eq!(Value::Number(5.0).to_string(), "5");
        assert_eq!(Value::Number(-0.0).to_string(), "0");
        assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Value::Number(1.5).to_string(), "1.5");
    }

    #[test]
    fn test_display_uses_exponent_form_at_extremes() {
        assert_eq!(Value::Number(1e21).to_string(), "1e+21");
        assert_eq!(Value::Number(-1.5e22).to_string(), "-1.5e+22");
        assert_eq!(Value::Number(1e-7).to_string(), "1e-7");
        assert_eq!(Value::Number(1e20).to_string(), "100000000000000000000");
        assert_eq!(Value::Number(0.000001).to_string(), "0.000001");
    }

    #[test]
    fn test_string_to_number_whitespace_set() {
        assert!(string_to_number("\u{85}").is_nan());
        assert!(string_to_number("\u{85}1").is_nan());
        assert_eq!(string_to_number("\u{FEFF}\u{A0}12\u{2028}"), 12.0);
    }

    #[test]
    fn test_value_conversions() {
        assert_eq!(Value::from(5), Value::Number(5.0));
        assert_eq!(Value::from("x"), Value::String("x".to_string()));
        assert!(Value::from(f64::NAN).is_nan());
        assert_eq!(Value::default().type_name(), "undefined");
    }
}
