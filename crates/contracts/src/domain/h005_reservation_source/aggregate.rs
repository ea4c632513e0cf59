use serde::{Deserialize, Serialize};

use crate::domain::common::audit::{ACTIVE_COLUMN, CREATED_ON_COLUMN};
use crate::domain::common::AuditFields;
use crate::shared::list_resource::{ColumnSpec, FieldSpec, ListResource};

/// Where a booking came from (walk-in, phone, OTA, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReservationSource {
    pub id: i64,
    pub source_code: String,
    pub name: String,
    pub channel: Option<String>,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl ListResource for ReservationSource {
    const KEY: &'static str = "reservation_source";
    const TITLE: &'static str = "Reservation Sources";
    const RESOURCE_PATH: &'static str = "/api/ReservationSource";
    const SEARCH_FIELDS: &'static [&'static str] = &["sourceCode", "name", "channel"];
    const COLUMNS: &'static [ColumnSpec] = &[
        ColumnSpec::new("sourceCode", "Code"),
        ColumnSpec::new("name", "Name"),
        ColumnSpec::new("channel", "Channel"),
        ACTIVE_COLUMN,
        CREATED_ON_COLUMN,
    ];
    const FORM_FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("sourceCode", "Code").required(),
        FieldSpec::text("name", "Name").required(),
        FieldSpec::optional("channel", "Channel"),
        FieldSpec::flag("isActive", "Active"),
    ];

    fn row_id(&self) -> String {
        self.id.to_string()
    }
}
