use chrono::NaiveDate;

use crate::shared::list_resource::FormDraft;

/// `None` for a blank field, `Err` for text that is not `YYYY-MM-DD`
pub fn draft_date(draft: &FormDraft, field: &str, label: &str) -> Result<Option<NaiveDate>, String> {
    let text = draft.get(field).map(|v| v.as_text()).unwrap_or_default();
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| format!("{} must be a date (YYYY-MM-DD)", label))
}

/// Both dates valid, and `to` not before `from` when both are set
pub fn date_range(
    draft: &FormDraft,
    (from_field, from_label): (&str, &str),
    (to_field, to_label): (&str, &str),
) -> Result<(), String> {
    let from = draft_date(draft, from_field, from_label)?;
    let to = draft_date(draft, to_field, to_label)?;
    match (from, to) {
        (Some(from), Some(to)) if to < from => Err(format!("{} cannot be before {}", to_label, from_label)),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_resource::DraftValue;

    fn draft(from: &str, to: &str) -> FormDraft {
        FormDraft::from([
            ("from".to_string(), DraftValue::Text(from.to_string())),
            ("to".to_string(), DraftValue::Text(to.to_string())),
        ])
    }

    const FROM: (&str, &str) = ("from", "Start date");
    const TO: (&str, &str) = ("to", "End date");

    #[test]
    fn ordered_or_open_ranges_pass() {
        assert_eq!(date_range(&draft("2025-01-01", "2025-03-31"), FROM, TO), Ok(()));
        assert_eq!(date_range(&draft("2025-01-01", "2025-01-01"), FROM, TO), Ok(()));
        assert_eq!(date_range(&draft("", "2025-01-01"), FROM, TO), Ok(()));
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert_eq!(
            date_range(&draft("2025-04-01", "2025-03-31"), FROM, TO),
            Err("End date cannot be before Start date".to_string())
        );
    }

    #[test]
    fn malformed_date_is_rejected() {
        assert_eq!(
            date_range(&draft("01/04/2025", ""), FROM, TO),
            Err("Start date must be a date (YYYY-MM-DD)".to_string())
        );
    }
}
