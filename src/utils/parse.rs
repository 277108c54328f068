//! Lenient integer parsing for user input and stored string values.

/// Parse the leading integer of `raw`, the way a browser's `parseInt` does:
/// surrounding whitespace is ignored, an optional sign is honoured, digits are
/// read up to the first non-digit. Input without any leading digit yields 0.
/// Values beyond the `i64` range saturate.
pub fn parse_int_lenient(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        seen = true;
        let d = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }

    if seen { value } else { 0 }
}
