use serde::{Deserialize, Serialize};

use crate::domain::common::audit::{ACTIVE_COLUMN, CREATED_ON_COLUMN};
use crate::domain::common::AuditFields;
use crate::shared::list_resource::{CellFormat, ColumnSpec, FieldSpec, ListResource};

/// Banquet/meeting venue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Venue {
    pub id: i64,
    pub venue_code: String,
    pub name: String,
    /// Seated capacity
    pub capacity: i32,
    pub area_sqm: f64,
    pub location: Option<String>,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl ListResource for Venue {
    const KEY: &'static str = "venue";
    const TITLE: &'static str = "Venues";
    const RESOURCE_PATH: &'static str = "/api/Venue";
    const SEARCH_FIELDS: &'static [&'static str] = &["venueCode", "name", "location"];
    const COLUMNS: &'static [ColumnSpec] = &[
        ColumnSpec::new("venueCode", "Code"),
        ColumnSpec::new("name", "Name"),
        ColumnSpec::new("capacity", "Capacity"),
        ColumnSpec::new("areaSqm", "Area, m²").formatted(CellFormat::Decimal2),
        ColumnSpec::new("location", "Location"),
        ACTIVE_COLUMN,
        CREATED_ON_COLUMN,
    ];
    const FORM_FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("venueCode", "Code").required(),
        FieldSpec::text("name", "Name").required(),
        FieldSpec::number("capacity", "Capacity"),
        FieldSpec::number("areaSqm", "Area, m²"),
        FieldSpec::optional("location", "Location"),
        FieldSpec::flag("isActive", "Active"),
    ];

    fn row_id(&self) -> String {
        self.id.to_string()
    }
}
