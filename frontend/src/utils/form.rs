//! Parsing helpers for form states: raw `<input>` strings in, typed values or
//! a validation `ApiError` out.

use crate::api::ApiError;
use chrono::NaiveDate;

/// Whether a create/edit dialog is creating a record or editing the one
/// with this id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

impl FormMode {
    pub fn id(&self) -> Option<String> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id.clone()),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

pub fn optional_string(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn parse_required_f64(raw: &str, label: &str) -> Result<f64, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation(format!("{} is required", label)));
    }
    parse_f64(trimmed, label)
}

pub fn parse_optional_f64(raw: &str, label: &str) -> Result<Option<f64>, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    parse_f64(trimmed, label).map(Some)
}

/// Whole, non-negative numbers such as day counts and lengths.
pub fn parse_required_u32(raw: &str, label: &str) -> Result<u32, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation(format!("{} is required", label)));
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| ApiError::validation(format!("{} must be a whole number", label)))
}

fn parse_f64(trimmed: &str, label: &str) -> Result<f64, ApiError> {
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ApiError::validation(format!("{} must be a number", label)))
}

pub fn parse_date(raw: &str, label: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ApiError::validation(format!("{} must be in YYYY-MM-DD format", label)))
}

pub fn parse_optional_date(raw: &str, label: &str) -> Result<Option<NaiveDate>, ApiError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_date(raw, label).map(Some)
}

/// Looks a wire value up with the enum's own parser.
pub fn parse_choice<T>(raw: &str, parse: fn(&str) -> Option<T>, label: &str) -> Result<T, ApiError> {
    parse(raw).ok_or_else(|| ApiError::validation(format!("Select a valid {}", label)))
}

/// Comma separated input such as tags or IP addresses.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split([',', '\n'])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn format_optional_f64(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::billing::RateType;

    #[test]
    fn whole_numbers_reject_fractions() {
        assert_eq!(parse_required_u32(" 90 ", "Retention").unwrap(), 90);
        assert!(parse_required_u32("1.5", "Retention").is_err());
        assert!(parse_required_u32("-3", "Retention").is_err());
        assert_eq!(
            parse_required_u32("", "Retention").unwrap_err().error,
            "Retention is required"
        );
    }

    #[test]
    fn required_numbers_reject_blank_and_garbage() {
        assert_eq!(parse_required_f64(" 12.5 ", "Amount").unwrap(), 12.5);
        assert_eq!(
            parse_required_f64("", "Amount").unwrap_err().error,
            "Amount is required"
        );
        assert_eq!(
            parse_required_f64("abc", "Amount").unwrap_err().error,
            "Amount must be a number"
        );
        assert!(parse_required_f64("NaN", "Amount").is_err());
    }

    #[test]
    fn optional_values_accept_blank() {
        assert_eq!(parse_optional_f64("  ", "Discount").unwrap(), None);
        assert_eq!(parse_optional_date("", "Close date").unwrap(), None);
        assert_eq!(optional_string("  hi ".into()), Some("hi".into()));
        assert_eq!(optional_string("   ".into()), None);
    }

    #[test]
    fn parse_choice_uses_wire_names() {
        assert_eq!(
            parse_choice("retainer", RateType::parse, "rate type").unwrap(),
            RateType::Retainer
        );
        assert_eq!(
            parse_choice("", RateType::parse, "rate type").unwrap_err().error,
            "Select a valid rate type"
        );
    }

    #[test]
    fn split_list_drops_empty_entries() {
        assert_eq!(
            split_list("10.0.0.1, ,192.168.1.10\n::1"),
            vec!["10.0.0.1", "192.168.1.10", "::1"]
        );
    }
}
