use serde::{Deserialize, Serialize};

use crate::domain::common::audit::ACTIVE_COLUMN;
use crate::domain::common::validation::date_range;
use crate::domain::common::AuditFields;
use crate::shared::list_resource::resource::required_fields;
use crate::shared::list_resource::{CellFormat, ColumnSpec, FieldSpec, FormDraft, ListResource};

/// Pricing season (peak, shoulder, low). Dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Season {
    pub id: i64,
    pub season_code: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl ListResource for Season {
    const KEY: &'static str = "season";
    const TITLE: &'static str = "Seasons";
    const RESOURCE_PATH: &'static str = "/api/Season";
    const SEARCH_FIELDS: &'static [&'static str] = &["seasonCode", "name", "startDate", "endDate"];
    const COLUMNS: &'static [ColumnSpec] = &[
        ColumnSpec::new("seasonCode", "Code"),
        ColumnSpec::new("name", "Name"),
        ColumnSpec::new("startDate", "Start").formatted(CellFormat::Date),
        ColumnSpec::new("endDate", "End").formatted(CellFormat::Date),
        ACTIVE_COLUMN,
    ];
    const FORM_FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("seasonCode", "Code").required(),
        FieldSpec::text("name", "Name").required(),
        FieldSpec::date("startDate", "Start date").required(),
        FieldSpec::date("endDate", "End date").required(),
        FieldSpec::flag("isActive", "Active"),
    ];

    fn row_id(&self) -> String {
        self.id.to_string()
    }

    fn validate(draft: &FormDraft) -> Result<(), String> {
        required_fields(Self::FORM_FIELDS, draft)?;
        date_range(draft, ("startDate", "Start date"), ("endDate", "End date"))
    }
}
