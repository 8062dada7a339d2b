//! Field rules shared by the form schemas.

use std::borrow::Cow;
use std::net::IpAddr;
use validator::ValidationError;

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::from(message))
}

/// Requires `#rrggbb`.
pub fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    let hex = color.strip_prefix('#').unwrap_or("");
    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(invalid("hex_color", "Color must be a hex value like #1e40af"))
    }
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(invalid("blank", "This field is required"))
    } else {
        Ok(())
    }
}

/// Every entry must be an IPv4 or IPv6 address.
pub fn validate_ip_list(entries: &[String]) -> Result<(), ValidationError> {
    if entries
        .iter()
        .all(|entry| entry.trim().parse::<IpAddr>().is_ok())
    {
        Ok(())
    } else {
        Err(invalid("ip_address", "IP whitelist entries must be valid IP addresses"))
    }
}

pub fn validate_optional_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() || url.starts_with("https://") || url.starts_with("http://") {
        Ok(())
    } else {
        Err(invalid("url", "Logo must be an http(s) URL"))
    }
}
