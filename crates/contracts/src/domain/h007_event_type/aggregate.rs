use serde::{Deserialize, Serialize};

use crate::domain::common::audit::ACTIVE_COLUMN;
use crate::domain::common::AuditFields;
use crate::shared::list_resource::{ColumnSpec, FieldSpec, ListResource};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventType {
    pub id: i64,
    pub event_type_code: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl ListResource for EventType {
    const KEY: &'static str = "event_type";
    const TITLE: &'static str = "Event Types";
    const RESOURCE_PATH: &'static str = "/api/EventType";
    const SEARCH_FIELDS: &'static [&'static str] = &["eventTypeCode", "name", "description"];
    const COLUMNS: &'static [ColumnSpec] = &[
        ColumnSpec::new("eventTypeCode", "Code"),
        ColumnSpec::new("name", "Name"),
        ColumnSpec::new("description", "Description"),
        ACTIVE_COLUMN,
    ];
    const FORM_FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("eventTypeCode", "Code").required(),
        FieldSpec::text("name", "Name").required(),
        FieldSpec::optional("description", "Description"),
        FieldSpec::flag("isActive", "Active"),
    ];

    fn row_id(&self) -> String {
        self.id.to_string()
    }
}
