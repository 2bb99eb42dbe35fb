use crate::domain::games::group_digits;

/// Placeholder for amounts that cannot be shown.
const NOT_AVAILABLE: &str = "n/a";

/// Formats an amount with thousands separators and at most two fraction digits.
///
/// Trailing zeros in the fraction are dropped: `1500.0` -> `1,500`, `12.5` -> `12.5`.
pub fn format_amount(value: f64) -> String {
    let Some((sign, whole, fraction)) = split_cents(value) else {
        return NOT_AVAILABLE.to_string();
    };
    match fraction.trim_end_matches('0') {
        "" => format!("{sign}{whole}"),
        trimmed => format!("{sign}{whole}.{trimmed}"),
    }
}

pub fn format_usd(value: f64) -> String {
    format!("${}", format_amount(value))
}

/// Always two fraction digits: `200.0` -> `$200.00`.
pub fn format_usd_cents(value: f64) -> String {
    match split_cents(value) {
        Some((sign, whole, fraction)) => format!("{sign}${whole}.{fraction}"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Rate as a percentage with one decimal, e.g. `0.025` -> `2.5%`.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Sign, grouped integer part and two-digit fraction, rounded to cents.
///
/// Works on the decimal rendering so magnitudes past `u64` stay exact.
fn split_cents(value: f64) -> Option<(&'static str, String, String)> {
    if !value.is_finite() {
        return None;
    }
    let rendered = format!("{:.2}", value.abs());
    let (whole, fraction) = rendered.split_once('.')?;
    let is_zero = whole.bytes().all(|b| b == b'0') && fraction.bytes().all(|b| b == b'0');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    Some((sign, group_digits(whole), fraction.to_string()))
}
