use serde::{Deserialize, Serialize};

use crate::domain::common::audit::ACTIVE_COLUMN;
use crate::domain::common::AuditFields;
use crate::shared::list_resource::{CellFormat, ColumnSpec, FieldSpec, ListResource, UpdateRoute};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SalesExecutive {
    pub id: i64,
    /// Business key; the backend addresses updates by this code, not by `id`
    pub sales_executive_code: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub commission_rate: f64,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl ListResource for SalesExecutive {
    const KEY: &'static str = "sales_executive";
    const TITLE: &'static str = "Sales Executives";
    const RESOURCE_PATH: &'static str = "/api/SalesExecutive";
    const SEARCH_FIELDS: &'static [&'static str] = &["salesExecutiveCode", "name", "email", "phone"];
    const COLUMNS: &'static [ColumnSpec] = &[
        ColumnSpec::new("salesExecutiveCode", "Code"),
        ColumnSpec::new("name", "Name"),
        ColumnSpec::new("email", "Email"),
        ColumnSpec::new("phone", "Phone"),
        ColumnSpec::new("commissionRate", "Commission %").formatted(CellFormat::Decimal2),
        ACTIVE_COLUMN,
    ];
    const FORM_FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("salesExecutiveCode", "Code").required(),
        FieldSpec::text("name", "Name").required(),
        FieldSpec::optional("email", "Email"),
        FieldSpec::optional("phone", "Phone"),
        FieldSpec::number("commissionRate", "Commission %"),
        FieldSpec::flag("isActive", "Active"),
    ];

    fn row_id(&self) -> String {
        self.id.to_string()
    }

    fn update_route() -> UpdateRoute {
        UpdateRoute::PutByField("salesExecutiveCode")
    }
}
