// src/domain/fields.rs

use crate::errors::{AppError, Result};
use serde_json::Value;

/// Parses a whole-number field such as a stock counter or guest capacity.
/// Numbers and numeric strings are accepted; negative, fractional, and
/// non-numeric values are rejected rather than clamped.
pub fn parse_count(record: &str, id: &str, field: &str, value: &Value) -> Result<u32> {
    let parsed: Option<i64> = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    let n = parsed.ok_or_else(|| {
        AppError::invalid(format!("{record} {id}: {field} must be a whole number, got {value}"))
    })?;

    if n < 0 {
        return Err(AppError::invalid(format!(
            "{record} {id}: {field} cannot be negative, got {n}"
        )));
    }

    u32::try_from(n).map_err(|_| {
        AppError::invalid(format!("{record} {id}: {field} is out of range, got {n}"))
    })
}

/// Parses a price. Accepts numbers and numeric strings ("1800", "1800.50");
/// the result is finite and non-negative.
pub fn parse_amount(record: &str, id: &str, field: &str, value: &Value) -> Result<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|f| f.is_finite());

    let amount = parsed.ok_or_else(|| {
        AppError::invalid(format!("{record} {id}: {field} must be a number, got {value}"))
    })?;

    if amount < 0.0 {
        return Err(AppError::invalid(format!(
            "{record} {id}: {field} must be non-negative, got {amount}"
        )));
    }

    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn counts_accept_numbers_and_numeric_strings() {
        assert_eq!(parse_count("room", "r1", "maxGuests", &json!(3)).unwrap(), 3);
        assert_eq!(parse_count("room", "r1", "maxGuests", &json!(" 4 ")).unwrap(), 4);
        assert_eq!(parse_count("room", "r1", "maxGuests", &json!(2.0)).unwrap(), 2);
    }

    #[test]
    fn counts_reject_bad_values() {
        for bad in [json!(-1), json!(2.5), json!("two"), json!(true)] {
            let err = parse_count("room", "r1", "maxGuests", &bad).unwrap_err();
            assert!(matches!(err, AppError::InvalidInput(_)), "{bad}");
        }
    }

    #[test]
    fn amounts_accept_numbers_and_numeric_strings() {
        assert_eq!(parse_amount("room", "r1", "basePrice", &json!(2500)).unwrap(), 2500.0);
        assert_eq!(parse_amount("room", "r1", "basePrice", &json!("1800")).unwrap(), 1800.0);
        assert_eq!(parse_amount("item", "i1", "unitPrice", &json!("12.50")).unwrap(), 12.5);
    }

    #[test]
    fn amounts_reject_bad_values() {
        for bad in [json!(-10.0), json!("-5"), json!("cheap"), json!("NaN"), json!([])] {
            let err = parse_amount("item", "i1", "unitPrice", &bad).unwrap_err();
            assert!(matches!(err, AppError::InvalidInput(_)), "{bad}");
        }
    }

    #[test]
    fn errors_name_the_record_and_field() {
        let err = parse_amount("room", "r9", "basePrice", &json!("free")).unwrap_err();
        assert!(err.to_string().contains("room r9: basePrice"));
    }
}
