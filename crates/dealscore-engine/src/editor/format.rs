//! Display formatting and parsing for boundary values
//!
//! Currency values display with thousands separators and parse with commas
//! stripped; percentage/duration/number values use plain numeric formatting.
//! Parsing a malformed string yields `None`, making the edit a no-op
//! rather than an error surfaced to the caller.

use dealscore_core::InputType;

/// Format a value for display in a boundary input field
pub fn format_value(input_type: InputType, value: f64) -> String {
    match input_type {
        InputType::Currency => group_thousands(value),
        InputType::Duration | InputType::Percentage | InputType::Number => value.to_string(),
    }
}

/// Parse a typed boundary string
///
/// Returns `None` for empty, malformed or non-finite input.
pub fn parse_value(input_type: InputType, raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let cleaned = match input_type {
        InputType::Currency => trimmed.replace(',', ""),
        _ => trimmed.to_string(),
    };
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn group_thousands(value: f64) -> String {
    let plain = value.to_string();
    let (sign, rest) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_value(InputType::Currency, 1250000.0), "1,250,000");
        assert_eq!(format_value(InputType::Currency, 950.0), "950");
        assert_eq!(format_value(InputType::Currency, -12500.5), "-12,500.5");
    }

    #[test]
    fn test_plain_formatting() {
        assert_eq!(format_value(InputType::Number, 600.0), "600");
        assert_eq!(format_value(InputType::Duration, 2.5), "2.5");
        assert_eq!(format_value(InputType::Percentage, 0.5), "0.5");
    }

    #[test]
    fn test_currency_parse_strips_commas() {
        assert_eq!(parse_value(InputType::Currency, "1,250,000"), Some(1250000.0));
        assert_eq!(parse_value(InputType::Currency, " 12,500.5 "), Some(12500.5));
    }

    #[test]
    fn test_malformed_is_none() {
        assert_eq!(parse_value(InputType::Number, ""), None);
        assert_eq!(parse_value(InputType::Number, "   "), None);
        assert_eq!(parse_value(InputType::Number, "12abc"), None);
        assert_eq!(parse_value(InputType::Number, "NaN"), None);
        assert_eq!(parse_value(InputType::Number, "inf"), None);
    }

    #[test]
    fn test_plain_parse() {
        assert_eq!(parse_value(InputType::Percentage, "4.5"), Some(4.5));
        assert_eq!(parse_value(InputType::Number, "-3"), Some(-3.0));
    }
}
