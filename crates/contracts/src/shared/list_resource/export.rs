//! CSV export of list rows (Excel-friendly: BOM, `;` separator)

use super::columns::ColumnSpec;
use super::filter::Searchable;

/// Header row of column labels, then one line per row with cells formatted as displayed
pub fn to_csv<T: Searchable>(rows: &[&T], columns: &[ColumnSpec]) -> String {
    let mut csv = String::new();
    // UTF-8 BOM so Excel detects the encoding
    csv.push('\u{FEFF}');

    let headers: Vec<String> = columns.iter().map(|c| escape_csv_cell(c.label)).collect();
    csv.push_str(&headers.join(";"));
    csv.push('\n');

    for row in rows {
        let projected = T::search_value(row);
        let cells: Vec<String> = columns
            .iter()
            .map(|column| escape_csv_cell(&column.cell(&projected)))
            .collect();
        csv.push_str(&cells.join(";"));
        csv.push('\n');
    }
    csv
}

fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
