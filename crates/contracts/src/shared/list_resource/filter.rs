//! Free-text search over a fixed set of row fields

use serde::Serialize;
use serde_json::Value;

/// Rows that can be searched and displayed field by field.
///
/// Implemented for every `Serialize` type: a row is projected to JSON and fields are
/// looked up by their wire name.
pub trait Searchable {
    /// JSON projection of the row (`Null` if the row cannot be serialized)
    fn search_value(&self) -> Value;

    /// Text form of one field. Missing and `null` fields are empty.
    fn field_text(&self, field: &str) -> String {
        field_text_of(&self.search_value(), field)
    }
}

impl<T: Serialize + ?Sized> Searchable for T {
    fn search_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Text of `field` inside an already projected row
pub fn field_text_of(row: &Value, field: &str) -> String {
    row.get(field).map(value_text).unwrap_or_default()
}

/// Render a JSON scalar the way it is shown in a table cell
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            (_, _, Some(f)) => f.to_string(),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

/// Keep the rows where any of `fields` contains `query` (case-insensitive).
///
/// A blank query keeps every row in its original order.
pub fn filter_rows<'a, T: Searchable>(rows: &'a [T], query: &str, fields: &[&str]) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return rows.iter().collect();
    }

    rows.iter()
        .filter(|row| {
            let projected = T::search_value(row);
            fields
                .iter()
                .any(|field| field_text_of(&projected, field).to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Venue {
        id: i64,
        venue_code: String,
        name: String,
        capacity: i32,
        area: f64,
        note: Option<String>,
    }

    fn venue(id: i64, code: &str, name: &str, note: Option<&str>) -> Venue {
        Venue {
            id,
            venue_code: code.to_string(),
            name: name.to_string(),
            capacity: 100 + id as i32,
            area: 12.5,
            note: note.map(str::to_string),
        }
    }

    fn sample() -> Vec<Venue> {
        vec![
            venue(1, "BALL", "Grand Ballroom", Some("Paris wing")),
            venue(2, "TER", "Rooftop Terrace", None),
            venue(3, "BOARD", "Board Room", None),
        ]
    }

    const FIELDS: &[&str] = &["venueCode", "name", "note"];

    #[test]
    fn blank_query_keeps_everything_in_order() {
        let rows = sample();
        let filtered = filter_rows(&rows, "   ", FIELDS);
        assert_eq!(filtered, rows.iter().collect::<Vec<_>>());
        assert_eq!(filter_rows(&rows, "", FIELDS).len(), 3);
    }

    #[test]
    fn match_is_case_insensitive_and_trimmed() {
        let rows = sample();
        let filtered = filter_rows(&rows, "  rOOm ", FIELDS);
        let ids: Vec<i64> = filtered.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn null_fields_never_match_and_never_panic() {
        let rows = sample();
        let filtered = filter_rows(&rows, "paris", FIELDS);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
        assert!(filter_rows(&rows, "none", FIELDS).is_empty());
    }

    #[test]
    fn only_listed_fields_are_searched() {
        let rows = sample();
        assert!(filter_rows(&rows, "101", FIELDS).is_empty());
        assert_eq!(filter_rows(&rows, "101", &["capacity"]).len(), 1);
    }

    #[test]
    fn filtering_twice_changes_nothing() {
        let rows = sample();
        for query in ["", "room", "ter", "zzz"] {
            let once: Vec<Venue> = filter_rows(&rows, query, FIELDS).into_iter().cloned().collect();
            let twice: Vec<Venue> = filter_rows(&once, query, FIELDS).into_iter().cloned().collect();
            assert_eq!(once, twice, "query {query:?}");
        }
    }

    #[test]
    fn numbers_render_like_table_cells() {
        assert_eq!(value_text(&serde_json::json!(5)), "5");
        assert_eq!(value_text(&serde_json::json!(5.0)), "5");
        assert_eq!(value_text(&serde_json::json!(12.5)), "12.5");
        assert_eq!(value_text(&serde_json::json!(true)), "true");
        assert_eq!(value_text(&Value::Null), "");
    }

    #[test]
    fn field_text_reads_wire_names() {
        let row = venue(7, "GAR", "Garden", None);
        assert_eq!(row.field_text("venueCode"), "GAR");
        assert_eq!(row.field_text("area"), "12.5");
        assert_eq!(row.field_text("note"), "");
        assert_eq!(row.field_text("missing"), "");
    }
}
