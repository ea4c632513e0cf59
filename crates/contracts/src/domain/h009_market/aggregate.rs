use serde::{Deserialize, Serialize};

use crate::domain::common::audit::ACTIVE_COLUMN;
use crate::domain::common::AuditFields;
use crate::shared::list_resource::{ColumnSpec, FieldSpec, ListResource};

/// Market segment used in reservation statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Market {
    pub id: i64,
    pub market_code: String,
    pub name: String,
    pub region: Option<String>,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl ListResource for Market {
    const KEY: &'static str = "market";
    const TITLE: &'static str = "Markets";
    const RESOURCE_PATH: &'static str = "/api/Market";
    const SEARCH_FIELDS: &'static [&'static str] = &["marketCode", "name", "region"];
    const COLUMNS: &'static [ColumnSpec] = &[
        ColumnSpec::new("marketCode", "Code"),
        ColumnSpec::new("name", "Name"),
        ColumnSpec::new("region", "Region"),
        ACTIVE_COLUMN,
    ];
    const FORM_FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("marketCode", "Code").required(),
        FieldSpec::text("name", "Name").required(),
        FieldSpec::optional("region", "Region"),
        FieldSpec::flag("isActive", "Active"),
    ];

    fn row_id(&self) -> String {
        self.id.to_string()
    }
}
