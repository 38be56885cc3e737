//! Conversions between stored strings and typed values.
//!
//! # Liberal parsing (for beginners)
//!
//! The getters never fail.  A stored value is read by taking the longest
//! prefix that looks like a number and ignoring whatever follows it:
//!
//! | Stored text | `parse_int` | `parse_double` |
//! |-------------|-------------|----------------|
//! | `"42"`      | `42`        | `42.0`         |
//! | `"42abc"`   | `42`        | `42.0`         |
//! | `"  -7 px"` | `-7`        | `-7.0`         |
//! | `"2.5e3x"`  | `2`         | `2500.0`       |
//! | `"0x1p3"`   | `0`         | `8.0`          |
//! | `"abc"`     | `0`         | `0.0`          |
//!
//! This is the same behaviour as the C library's `strtol` and `strtoul` with
//! base 10, and `strtod`, which also reads hexadecimal floats (`0x1A`,
//! `0x1.8p-2`).  Leading C whitespace (space, `\t`, `\n`, `\v`, `\f`,
//! `\r`) is skipped before the number.
//!
//! Out-of-range values saturate: a signed value clamps to `i32::MIN` /
//! `i32::MAX`, an unsigned magnitude above `u32::MAX` clamps to `u32::MAX`.
//! A minus sign in front of an unsigned value negates it modulo 2³², so
//! `"-1"` reads as `u32::MAX`.
//!
//! The unsigned clamp is deliberate.  `strtoul` followed by a cast to a
//! 32-bit `unsigned` truncates on platforms where `long` is 64 bits and
//! clamps where it is 32 bits; clamping gives the same answer everywhere.

fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

fn skip_space(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .position(|b| !is_c_space(*b))
        .unwrap_or(bytes.len())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(bytes.len())
}

/// Splits off leading whitespace and an optional sign.
///
/// Returns `(negative, digits)` where `digits` is the run of ASCII digits
/// right after the sign (possibly empty).
fn signed_digits(s: &str) -> (bool, &[u8]) {
    let bytes = s.as_bytes();
    let rest = &bytes[skip_space(bytes)..];
    let (negative, rest) = match rest.first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };
    (negative, &rest[..count_digits(rest)])
}

/// Folds decimal digits into a `u64`, or `None` on overflow.
fn accumulate(digits: &[u8]) -> Option<u64> {
    digits.iter().try_fold(0u64, |acc, d| {
        acc.checked_mul(10)?.checked_add(u64::from(d - b'0'))
    })
}

/// Parses the leading decimal integer of `s`, or `0` if there is none.
pub fn parse_int(s: &str) -> i32 {
    let (negative, digits) = signed_digits(s);
    if digits.is_empty() {
        return 0;
    }
    let magnitude = accumulate(digits).unwrap_or(u64::MAX);
    let value = match (negative, i64::try_from(magnitude)) {
        (false, Ok(m)) => m,
        (false, Err(_)) => i64::MAX,
        (true, Ok(m)) => -m,
        (true, Err(_)) => i64::MIN,
    };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Parses the leading decimal unsigned integer of `s`, or `0` if there is none.
pub fn parse_uint(s: &str) -> u32 {
    let (negative, digits) = signed_digits(s);
    if digits.is_empty() {
        return 0;
    }
    let magnitude = match accumulate(digits).map(u32::try_from) {
        Some(Ok(m)) => m,
        _ => return u32::MAX,
    };
    if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    }
}

/// Length of the floating-point literal at the start of `b`, or `0`.
fn float_prefix_len(b: &[u8]) -> usize {
    let mut i = usize::from(matches!(b.first(), Some(b'+' | b'-')));

    let rest = &b[i..];
    for word in ["infinity", "inf", "nan"] {
        if rest.len() >= word.len() && rest[..word.len()].eq_ignore_ascii_case(word.as_bytes()) {
            return i + word.len();
        }
    }

    let int_digits = count_digits(&b[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    if b.get(i) == Some(&b'.') {
        frac_digits = count_digits(&b[i + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    // The exponent only counts when at least one digit follows it.
    if matches!(b.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(b.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(&b[j..]);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }
    i
}

fn hex_value(b: u8) -> Option<u64> {
    char::from(b).to_digit(16).map(u64::from)
}

/// Reads a hexadecimal float (`0x` + hex digits, optional `.` fraction,
/// optional binary exponent `p±N`) at the start of `b`.
///
/// Returns `None` unless at least one hex digit follows the `0x`.
fn parse_hex_float(b: &[u8]) -> Option<f64> {
    if b.len() < 2 || b[0] != b'0' || !matches!(b[1], b'x' | b'X') {
        return None;
    }
    // Digits beyond what fits in 60 bits only shift the exponent.
    const LIMIT: u64 = 1 << 60;
    let mut mantissa = 0u64;
    let mut exp: i64 = 0;
    let mut seen = false;
    let mut i = 2;

    while let Some(d) = b.get(i).copied().and_then(hex_value) {
        if mantissa < LIMIT {
            mantissa = mantissa * 16 + d;
        } else {
            exp += 4;
        }
        seen = true;
        i += 1;
    }
    if b.get(i) == Some(&b'.') {
        i += 1;
        while let Some(d) = b.get(i).copied().and_then(hex_value) {
            if mantissa < LIMIT {
                mantissa = mantissa * 16 + d;
                exp -= 4;
            }
            seen = true;
            i += 1;
        }
    }
    if !seen {
        return None;
    }

    if matches!(b.get(i), Some(b'p' | b'P')) {
        let mut j = i + 1;
        let negative = b.get(j) == Some(&b'-');
        if matches!(b.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let digits = &b[j..j + count_digits(&b[j..])];
        if !digits.is_empty() {
            let magnitude = digits
                .iter()
                .fold(0i64, |acc, d| (acc * 10 + i64::from(d - b'0')).min(100_000));
            exp += if negative { -magnitude } else { magnitude };
        }
    }

    let mut value = mantissa as f64;
    let mut exp = exp.clamp(-10_000, 10_000) as i32;
    while exp > 1000 {
        value *= 2f64.powi(1000);
        exp -= 1000;
    }
    while exp < -1000 {
        value *= 2f64.powi(-1000);
        exp += 1000;
    }
    Some(value * 2f64.powi(exp))
}

/// Parses the leading floating-point number of `s`, or `0.0` if there is none.
///
/// Accepts an optional sign, digits with an optional fraction and exponent,
/// hexadecimal floats such as `0x1.8p3`, and the words `inf`, `infinity` and
/// `nan` in any case.
pub fn parse_double(s: &str) -> f64 {
    let body = &s[skip_space(s.as_bytes())..];
    let bytes = body.as_bytes();
    let (negative, unsigned) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    };
    if let Some(value) = parse_hex_float(unsigned) {
        return if negative { -value } else { value };
    }
    let len = float_prefix_len(body.as_bytes());
    if len == 0 {
        return 0.0;
    }
    body[..len].parse::<f64>().unwrap_or(0.0)
}

/// Canonical text for a signed integer: plain decimal.
pub fn format_int(value: i32) -> String {
    value.to_string()
}

/// Canonical text for an unsigned integer: plain decimal, no suffix.
pub fn format_uint(value: u32) -> String {
    value.to_string()
}

/// Canonical text for a double: fixed point with six fractional digits.
///
/// `3.14156` becomes `"3.141560"` and `1e20` becomes
/// `"100000000000000000000.000000"`.  NaN is written as `"nan"` and
/// infinities as `"inf"` / `"-inf"`, all of which [`parse_double`] reads back.
pub fn format_double(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "inf" } else { "-inf" };
        text.to_string()
    } else {
        format!("{value:.6}")
    }
}

/// Canonical text for a boolean: `"true"` or `"false"`.
pub fn format_bool(value: bool) -> String {
    let text = if value { "true" } else { "false" };
    text.to_string()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
