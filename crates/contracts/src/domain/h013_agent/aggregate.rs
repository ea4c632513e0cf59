use serde::{Deserialize, Serialize};

use crate::domain::common::audit::ACTIVE_COLUMN;
use crate::domain::common::AuditFields;
use crate::shared::list_resource::{CellFormat, ColumnSpec, FieldSpec, ListResource};

/// Travel agent / tour operator contracted with the hotel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TravelAgent {
    pub id: i64,
    pub agent_code: String,
    pub name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Percent of room revenue
    pub commission: f64,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl ListResource for TravelAgent {
    const KEY: &'static str = "travel_agent";
    const TITLE: &'static str = "Travel Agents";
    const RESOURCE_PATH: &'static str = "/api/TravelAgent";
    const SEARCH_FIELDS: &'static [&'static str] = &["agentCode", "name", "contactPerson", "email"];
    const COLUMNS: &'static [ColumnSpec] = &[
        ColumnSpec::new("agentCode", "Code"),
        ColumnSpec::new("name", "Name"),
        ColumnSpec::new("contactPerson", "Contact"),
        ColumnSpec::new("phone", "Phone"),
        ColumnSpec::new("email", "Email"),
        ColumnSpec::new("commission", "Commission, %").formatted(CellFormat::Decimal2),
        ACTIVE_COLUMN,
    ];
    const FORM_FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("agentCode", "Code").required(),
        FieldSpec::text("name", "Name").required(),
        FieldSpec::optional("contactPerson", "Contact person"),
        FieldSpec::optional("phone", "Phone"),
        FieldSpec::optional("email", "Email"),
        FieldSpec::number("commission", "Commission, %"),
        FieldSpec::flag("isActive", "Active"),
    ];

    fn row_id(&self) -> String {
        self.id.to_string()
    }
}
