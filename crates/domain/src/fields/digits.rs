//! Digit input normalization
//!
//! Every change runs through the same pipeline, each step feeding the next:
//! clean, strip leading zeros (integers only), clamp to `max_value`, truncate
//! to `max_length`, then optionally pad the integer part to two digits.

use crate::descriptor::DigitProps;

pub fn normalize(input: &str, props: &DigitProps) -> String {
    let cleaned = clean(input, props.allow_decimal);
    let trimmed = strip_leading_zeros(cleaned, props.allow_decimal);
    let clamped = clamp(trimmed, props.max_value);
    let truncated = truncate(clamped, props.max_length);
    if props.pad_with_zero {
        pad_integer_part(truncated)
    } else {
        truncated
    }
}

/// `inputmode` hint for the underlying text input
pub fn input_mode(props: &DigitProps) -> &'static str {
    if props.allow_decimal {
        "decimal"
    } else {
        "numeric"
    }
}

fn clean(input: &str, allow_decimal: bool) -> String {
    if !allow_decimal {
        return input.chars().filter(char::is_ascii_digit).collect();
    }
    let kept: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let mut value = match kept.split_once('.') {
        // Keep the first dot, drop the rest
        Some((int, rest)) if rest.contains('.') => format!("{int}.{}", rest.replace('.', "")),
        _ => kept,
    };
    if value.starts_with('.') {
        value.insert(0, '0');
    }
    value
}

fn strip_leading_zeros(value: String, allow_decimal: bool) -> String {
    if allow_decimal || value.len() <= 1 || !value.starts_with('0') {
        return value;
    }
    let stripped = value.trim_start_matches('0');
    if stripped.is_empty() {
        "0".to_string()
    } else {
        stripped.to_string()
    }
}

fn clamp(value: String, max_value: f64) -> String {
    if max_value <= 0.0 || value.is_empty() {
        return value;
    }
    match value.parse::<f64>() {
        Ok(number) if number > max_value => max_value.to_string(),
        _ => value,
    }
}

fn truncate(value: String, max_length: Option<usize>) -> String {
    match max_length {
        Some(max) if max > 0 && value.chars().count() > max => value.chars().take(max).collect(),
        _ => value,
    }
}

fn pad_integer_part(value: String) -> String {
    if value.is_empty() {
        return value;
    }
    match value.split_once('.') {
        Some((int, decimals)) => format!("{int:0>2}.{decimals}"),
        None => format!("{value:0>2}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimal() -> DigitProps {
        DigitProps::default()
    }

    fn integer() -> DigitProps {
        DigitProps::default().integers_only()
    }

    #[test]
    fn strips_non_digits() {
        assert_eq!(normalize("1a2b3", &integer()), "123");
        assert_eq!(normalize("1,234.5", &integer()), "12345");
        assert_eq!(normalize("1,234.5", &decimal()), "1234.5");
    }

    #[test]
    fn collapses_extra_dots() {
        assert_eq!(normalize("1.2.3", &decimal()), "1.23");
        assert_eq!(normalize("..5", &decimal()), "0.5");
        assert_eq!(normalize(".5", &decimal()), "0.5");
    }

    #[test]
    fn leading_zeros_only_stripped_for_integers() {
        assert_eq!(normalize("0075", &integer()), "75");
        assert_eq!(normalize("000", &integer()), "0");
        assert_eq!(normalize("0", &integer()), "0");
        assert_eq!(normalize("007.5", &decimal()), "007.5");
    }

    #[test]
    fn clamps_to_max_value() {
        let props = DigitProps::default().with_max_value(59.0);
        assert_eq!(normalize("99999", &props), "59");
        assert_eq!(normalize("58", &props), "58");
        assert_eq!(normalize("59.5", &props), "59");

        let hours = DigitProps::default().with_max_value(24.0);
        assert_eq!(normalize("30", &hours), "24");
    }

    #[test]
    fn zero_max_disables_clamp() {
        let props = DigitProps::default().with_max_value(0.0);
        assert_eq!(normalize("123456", &props), "123456");
    }

    #[test]
    fn default_max_value() {
        assert_eq!(normalize("99999999999999", &integer()), "9999999999999");
    }

    #[test]
    fn truncates_to_max_length() {
        let props = DigitProps::default().integers_only().with_max_length(4);
        assert_eq!(normalize("123456", &props), "1234");
    }

    #[test]
    fn pads_integer_part() {
        let props = DigitProps::default().padded();
        assert_eq!(normalize("5", &props), "05");
        assert_eq!(normalize("5.25", &props), "05.25");
        assert_eq!(normalize("15", &props), "15");
        assert_eq!(normalize("", &props), "");
    }

    #[test]
    fn minutes_field() {
        let props = DigitProps::default()
            .integers_only()
            .with_max_value(59.0)
            .with_max_length(2)
            .padded();
        assert_eq!(normalize("7", &props), "07");
        assert_eq!(normalize("075", &props), "59");
        assert_eq!(normalize("abc", &props), "");
    }

    #[test]
    fn input_mode_follows_decimals() {
        assert_eq!(input_mode(&decimal()), "decimal");
        assert_eq!(input_mode(&integer()), "numeric");
    }
}
