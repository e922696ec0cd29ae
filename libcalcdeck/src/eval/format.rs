//! Canonical string form of evaluation results
//!
//! Results are stored in history as text and may be evaluated again after
//! reuse, so the text must round-trip to the same `f64`. The layout follows
//! the usual calculator/browser convention: shortest round-trip digits,
//! plain notation for moderate magnitudes and `1.5e+21` / `1e-7` beyond.

/// Format a number the way it is shown and stored
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest digits that round-trip, e.g. "1.2345e3"
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let (lead, rest) = digits.split_at(1);
        let sign = if n - 1 < 0 { '-' } else { '+' };
        if rest.is_empty() {
            format!("{}e{}{}", lead, sign, (n - 1).abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, sign, (n - 1).abs())
        }
    };

    if value < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}
