use chrono::{DateTime, NaiveDate, Utc};

/// `1234.5` -> `1,234.50`
pub fn format_number(value: f64) -> String {
    let negative = value < 0.0;
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, ch) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}.{}", if negative { "-" } else { "" }, grouped, fraction)
}

pub fn format_money(amount: f64, currency: &str) -> String {
    format!("{} {}", format_number(amount), currency)
}

pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}%", value as i64)
    } else {
        format!("{:.1}%", value)
    }
}

pub fn format_date(date: Option<&NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn format_datetime(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Turns `court_appearance` into `Court appearance`.
pub fn humanize(value: &str) -> String {
    let spaced = value.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn format_number_groups_thousands() {
        assert_eq!(format_number(0.0), "0.00");
        assert_eq!(format_number(999.5), "999.50");
        assert_eq!(format_number(1234.5), "1,234.50");
        assert_eq!(format_number(-1250000.0), "-1,250,000.00");
    }

    #[wasm_bindgen_test]
    fn format_money_appends_currency() {
        assert_eq!(format_money(500.0, "SAR"), "500.00 SAR");
    }

    #[wasm_bindgen_test]
    fn format_percent_drops_zero_fraction() {
        assert_eq!(format_percent(15.0), "15%");
        assert_eq!(format_percent(12.5), "12.5%");
    }

    #[wasm_bindgen_test]
    fn humanize_replaces_underscores() {
        assert_eq!(humanize("court_appearance"), "Court appearance");
        assert_eq!(humanize(""), "");
    }

    #[wasm_bindgen_test]
    fn format_date_uses_dash_for_missing() {
        assert_eq!(format_date(None), "-");
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(format_date(Some(&date)), "2025-03-01");
    }
}
