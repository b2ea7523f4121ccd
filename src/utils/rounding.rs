/// Fraction digits printed when expanding a double exactly.
///
/// Any finite double of magnitude at least 2^-12 has an exact decimal
/// expansion with no more than this many fraction digits.
const EXACT_FRACTION_DIGITS: usize = 64;

/// Round `value` to `places` decimal places, halves away from zero.
///
/// The decision is made on the exact decimal value of the double, so 3.675
/// (stored as 3.67499...) rounds down to 3.67 while 0.625 rounds up to 0.63.
pub fn round_to(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS.max(places + 1), value.abs());
    let Some((whole, fraction)) = exact.split_once('.') else {
        return value;
    };
    let (kept, dropped) = fraction.split_at(places);

    let Ok(mut scaled) = format!("{}{}", whole, kept).parse::<u128>() else {
        return value;
    };
    if dropped.as_bytes()[0] >= b'5' {
        scaled += 1;
    }

    let digits = format!("{:0>width$}", scaled, width = places + 1);
    let (int_digits, frac_digits) = digits.split_at(digits.len() - places);
    let literal = if frac_digits.is_empty() {
        int_digits.to_string()
    } else {
        format!("{}.{}", int_digits, frac_digits)
    };
    let rounded: f64 = literal.parse().unwrap_or(value.abs());

    rounded.copysign(value)
}

/// Format a capacity without a trailing `.0` ("24", "12.5")
pub fn format_gb(value: f64) -> String {
    format!("{}", value)
}
