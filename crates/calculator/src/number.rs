/// Parse the leading integer of a token.
///
/// Accepts leading whitespace, an optional `+`/`-` sign and then the longest run of
/// ASCII digits; anything after the digits is ignored, so `"12abc"` yields `12`.
/// Returns `None` when no digit follows the optional sign. Runs that overflow `i64`
/// saturate towards the sign.
#[must_use]
pub fn parse_leading_int(token: &str) -> Option<i64> {
    let rest = token.trim_start();
    let (negative, digits) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        seen_digit = true;
        let digit = i64::from(byte - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }

    seen_digit.then_some(value)
}
