//! Number rendering shared by the tools' human-readable strings

/// Largest decimal exponent still written out positionally (`1e21` is not)
const MAX_POSITIONAL_EXPONENT: i32 = 21;

/// Smallest decimal exponent still written out positionally (`1e-7` is not)
const MIN_POSITIONAL_EXPONENT: i32 = -6;

/// Render a number the way it reads in a conversation.
///
/// Integral values have no fractional part (`10`, not `10.0`), non-finite
/// values read `NaN` / `Infinity` / `-Infinity`, and negative zero is `0`.
/// Magnitudes from `1e21` up and below `1e-6` switch to exponent form
/// (`1e+21`, `1.5e-7`), always using the shortest round-trip digits.
pub(crate) fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        format!("{}Infinity", sign)
    } else if value == 0.0 {
        "0".to_string()
    } else {
        let sign = if value < 0.0 { "-" } else { "" };
        format!("{}{}", sign, format_magnitude(value.abs()))
    }
}

/// Positive, finite, non-zero magnitude.
fn format_magnitude(value: f64) -> String {
    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e-7"
    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    let digits = mantissa.replace('.', "");
    let len = digits.len() as i32;
    // Position of the decimal point relative to the first digit
    let point = exponent + 1;

    if len <= point && point <= MAX_POSITIONAL_EXPONENT {
        format!("{}{}", digits, "0".repeat((point - len) as usize))
    } else if 0 < point && point <= MAX_POSITIONAL_EXPONENT {
        let (int, frac) = digits.split_at(point as usize);
        format!("{}.{}", int, frac)
    } else if MIN_POSITIONAL_EXPONENT < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let exponent_sign = if exponent >= 0 { "+" } else { "-" };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, exponent_sign, exponent.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, exponent_sign, exponent.abs())
        }
    }
}
