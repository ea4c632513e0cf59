use serde::{Deserialize, Serialize};

use crate::domain::common::audit::ACTIVE_COLUMN;
use crate::domain::common::AuditFields;
use crate::shared::list_resource::{CellFormat, ColumnSpec, FieldDefault, FieldSpec, ListResource};

/// One tax line of the tax configuration. Calculation happens server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxTable {
    pub id: i64,
    pub tax_code: String,
    pub name: String,
    pub percentage: f64,
    pub is_inclusive: bool,
    /// Revenue group the tax applies to (room, F&B, ...)
    pub applies_to: Option<String>,
    /// Order of application when taxes compound
    pub sequence: i32,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl ListResource for TaxTable {
    const KEY: &'static str = "tax_table";
    const TITLE: &'static str = "Tax Tables";
    const RESOURCE_PATH: &'static str = "/api/TaxTable";
    const SEARCH_FIELDS: &'static [&'static str] = &["taxCode", "name", "appliesTo"];
    const COLUMNS: &'static [ColumnSpec] = &[
        ColumnSpec::new("sequence", "#"),
        ColumnSpec::new("taxCode", "Code"),
        ColumnSpec::new("name", "Name"),
        ColumnSpec::new("percentage", "%").formatted(CellFormat::Decimal2),
        ColumnSpec::new("isInclusive", "Inclusive").formatted(CellFormat::YesNo),
        ColumnSpec::new("appliesTo", "Applies to"),
        ACTIVE_COLUMN,
    ];
    const FORM_FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("taxCode", "Tax code").required(),
        FieldSpec::text("name", "Name").required(),
        FieldSpec::number("percentage", "Percentage"),
        FieldSpec::flag("isInclusive", "Inclusive").with_default(FieldDefault::Flag(false)),
        FieldSpec::optional("appliesTo", "Applies to"),
        FieldSpec::number("sequence", "Sequence").with_default(FieldDefault::Text("1")),
        FieldSpec::flag("isActive", "Active"),
    ];

    fn row_id(&self) -> String {
        self.id.to_string()
    }
}
