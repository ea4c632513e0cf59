use serde_json::Value;
use std::cmp::Ordering;

use super::filter::Searchable;

/// Column sort selected in the table header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub field: Option<String>,
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: None,
            ascending: true,
        }
    }
}

impl SortState {
    /// Same column flips direction, another column sorts ascending
    pub fn toggle(&mut self, field: &str) {
        if self.field.as_deref() == Some(field) {
            self.ascending = !self.ascending;
        } else {
            self.field = Some(field.to_string());
            self.ascending = true;
        }
    }

    pub fn indicator(&self, field: &str) -> &'static str {
        match (self.field.as_deref() == Some(field), self.ascending) {
            (true, true) => " ▲",
            (true, false) => " ▼",
            _ => " ⇅",
        }
    }
}

/// Stable sort of already filtered rows
pub fn sort_rows<T: Searchable>(rows: &mut [&T], state: &SortState) {
    let Some(field) = state.field.as_deref() else {
        return;
    };

    let mut keyed: Vec<(Value, &T)> = rows
        .iter()
        .map(|row| {
            let key = T::search_value(row).get(field).cloned().unwrap_or(Value::Null);
            (key, *row)
        })
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let cmp = compare_values(a, b);
        if state.ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });

    for (slot, (_, row)) in rows.iter_mut().zip(keyed) {
        *slot = row;
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Less,
        (_, Value::Null) => Ordering::Greater,
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::String(x), Value::String(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
        _ => super::filter::value_text(a).cmp(&super::filter::value_text(b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Serialize)]
    struct Tax {
        code: &'static str,
        percentage: f64,
        inclusive: bool,
        note: Option<&'static str>,
    }

    fn taxes() -> Vec<Tax> {
        vec![
            Tax { code: "vat", percentage: 20.0, inclusive: true, note: Some("b") },
            Tax { code: "City", percentage: 3.5, inclusive: false, note: None },
            Tax { code: "SVC", percentage: 10.0, inclusive: false, note: Some("a") },
        ]
    }

    fn codes(rows: &[&Tax]) -> Vec<&'static str> {
        rows.iter().map(|t| t.code).collect()
    }

    #[test]
    fn toggle_flips_same_column_and_resets_on_new_one() {
        let mut state = SortState::default();
        state.toggle("code");
        assert_eq!(state.field.as_deref(), Some("code"));
        assert!(state.ascending);
        state.toggle("code");
        assert!(!state.ascending);
        state.toggle("percentage");
        assert!(state.ascending);
        assert_eq!(state.indicator("percentage"), " ▲");
        assert_eq!(state.indicator("code"), " ⇅");
    }

    #[test]
    fn numbers_sort_numerically() {
        let data = taxes();
        let mut rows: Vec<&Tax> = data.iter().collect();
        let mut state = SortState::default();
        state.toggle("percentage");
        sort_rows(&mut rows, &state);
        assert_eq!(codes(&rows), vec!["City", "SVC", "vat"]);

        state.toggle("percentage");
        sort_rows(&mut rows, &state);
        assert_eq!(codes(&rows), vec!["vat", "SVC", "City"]);
    }

    #[test]
    fn strings_ignore_case_and_nulls_come_first() {
        let data = taxes();
        let mut rows: Vec<&Tax> = data.iter().collect();
        sort_rows(&mut rows, &SortState { field: Some("code".into()), ascending: true });
        assert_eq!(codes(&rows), vec!["City", "SVC", "vat"]);

        sort_rows(&mut rows, &SortState { field: Some("note".into()), ascending: true });
        assert_eq!(codes(&rows), vec!["City", "SVC", "vat"]);
    }

    #[test]
    fn no_field_keeps_order() {
        let data = taxes();
        let mut rows: Vec<&Tax> = data.iter().collect();
        sort_rows(&mut rows, &SortState::default());
        assert_eq!(codes(&rows), vec!["vat", "City", "SVC"]);
    }
}
