//! Unit conversions at the output boundary.
//!
//! The pipeline works in fractions (`0.075`) and currency amounts with
//! fractional cents. Every percent-labelled output field and every percent
//! shown in generated text goes through [`to_percent`]; nothing else in the
//! crate multiplies by 100.

/// Converts a fractional rate to percent units, rounded to two decimals.
///
/// `0.075` becomes `7.5`, `0.1` becomes `10.0` (not `10.000000000000002`).
pub fn to_percent(fraction: f64) -> f64 {
    let percent = (fraction * 10_000.0).round() / 100.0;
    // Avoid emitting "-0" for tiny negative fractions.
    if percent == 0.0 {
        0.0
    } else {
        percent
    }
}

/// Formats a fraction as a percent label, e.g. `0.075` as `"7.5%"`.
pub fn format_percent(fraction: f64) -> String {
    format!("{}%", to_percent(fraction))
}

/// Rounds a currency amount to whole units.
pub fn round_currency(amount: f64) -> f64 {
    amount.round()
}

/// Formats a currency amount with thousands separators, e.g. `$110,000`.
pub fn format_currency(amount: f64) -> String {
    let rounded = round_currency(amount);
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_percent_scales_fraction() {
        assert_eq!(to_percent(0.075), 7.5);
        assert_eq!(to_percent(0.1), 10.0);
        assert_eq!(to_percent(-0.05), -5.0);
    }

    #[test]
    fn to_percent_removes_float_noise() {
        assert_eq!(to_percent(0.1 + 0.2), 30.0);
        assert_eq!(to_percent(0.18920000000000003), 18.92);
    }

    #[test]
    fn to_percent_never_returns_negative_zero() {
        let p = to_percent(-0.000001);
        assert_eq!(p, 0.0);
        assert!(p.is_sign_positive());
    }

    #[test]
    fn format_percent_appends_sign() {
        assert_eq!(format_percent(0.075), "7.5%");
        assert_eq!(format_percent(0.1), "10%");
    }

    #[test]
    fn format_currency_groups_thousands() {
        assert_eq!(format_currency(110_000.0), "$110,000");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(1_234_567.0), "$1,234,567");
        assert_eq!(format_currency(-5_000.0), "-$5,000");
    }
}
