// src/reports/format.rs

/// Formats money for display: `₱1,234.50`, `-₱80.00`.
/// NaN and infinities print as zero.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };

    let cents = (amount.abs() * 100.0).round() as u128;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{symbol}{grouped}.{frac:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_currency(0.0, "₱"), "₱0.00");
        assert_eq!(format_currency(999.5, "₱"), "₱999.50");
        assert_eq!(format_currency(1234.5, "₱"), "₱1,234.50");
        assert_eq!(format_currency(1_234_567.891, "$"), "$1,234,567.89");
    }

    #[test]
    fn negatives_and_oddities() {
        assert_eq!(format_currency(-80.0, "₱"), "-₱80.00");
        assert_eq!(format_currency(-0.001, "₱"), "₱0.00");
        assert_eq!(format_currency(f64::NAN, "₱"), "₱0.00");
        assert_eq!(format_currency(f64::INFINITY, "₱"), "₱0.00");
    }
}
