use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

use super::filter::{field_text_of, value_text};

/// How a table cell is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    Plain,
    YesNo,
    Decimal2,
    /// `2024-03-15` → `15.03.2024`
    Date,
    /// `2024-03-15T14:02:26.123Z` → `15.03.2024 14:02:26`
    Timestamp,
}

/// One table column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub field: &'static str,
    pub label: &'static str,
    pub format: CellFormat,
}

impl ColumnSpec {
    pub const fn new(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            format: CellFormat::Plain,
        }
    }

    pub const fn formatted(self, format: CellFormat) -> Self {
        Self { format, ..self }
    }

    /// Cell text for a projected row
    pub fn cell(&self, row: &Value) -> String {
        let raw = row.get(self.field).unwrap_or(&Value::Null);
        match self.format {
            CellFormat::Plain => field_text_of(row, self.field),
            CellFormat::YesNo => match raw {
                Value::Bool(true) => "Yes".to_string(),
                Value::Bool(false) => "No".to_string(),
                other => value_text(other),
            },
            CellFormat::Decimal2 => match raw.as_f64() {
                Some(n) => format!("{:.2}", n),
                None => value_text(raw),
            },
            CellFormat::Date => format_date(&value_text(raw)),
            CellFormat::Timestamp => format_datetime(&value_text(raw)),
        }
    }
}

/// `DD.MM.YYYY`; unparsable input is returned as is
pub fn format_date(value: &str) -> String {
    let date_part = value.split('T').next().unwrap_or(value);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => value.to_string(),
    }
}

/// `DD.MM.YYYY HH:MM:SS`; accepts a trailing `Z` or offset and fractional seconds
pub fn format_datetime(value: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(value) {
        return dt.naive_utc().format("%d.%m.%Y %H:%M:%S").to_string();
    }
    match NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(dt) => dt.format("%d.%m.%Y %H:%M:%S").to_string(),
        Err(_) => format_date(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15.03.2024 14:02:26");
        assert_eq!(format_datetime("2024-12-31T23:59:59"), "31.12.2024 23:59:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn cells_follow_their_format() {
        let row = json!({"active": true, "rate": 12.5, "from": "2025-01-02", "code": null});
        assert_eq!(ColumnSpec::new("active", "Active").formatted(CellFormat::YesNo).cell(&row), "Yes");
        assert_eq!(ColumnSpec::new("rate", "Rate").formatted(CellFormat::Decimal2).cell(&row), "12.50");
        assert_eq!(ColumnSpec::new("from", "From").formatted(CellFormat::Date).cell(&row), "02.01.2025");
        assert_eq!(ColumnSpec::new("code", "Code").cell(&row), "");
    }
}
