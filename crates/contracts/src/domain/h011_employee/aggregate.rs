use serde::{Deserialize, Serialize};

use crate::domain::common::audit::{ACTIVE_COLUMN, CREATED_ON_COLUMN};
use crate::domain::common::AuditFields;
use crate::shared::list_resource::{ColumnSpec, FieldSpec, ListResource};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Employee {
    pub id: i64,
    pub employee_code: String,
    pub full_name: String,
    pub department: Option<String>,
    pub position: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl ListResource for Employee {
    const KEY: &'static str = "employee";
    const TITLE: &'static str = "Employees";
    const RESOURCE_PATH: &'static str = "/api/Employee";
    const SEARCH_FIELDS: &'static [&'static str] =
        &["employeeCode", "fullName", "department", "position", "phone", "email"];
    const COLUMNS: &'static [ColumnSpec] = &[
        ColumnSpec::new("employeeCode", "Code"),
        ColumnSpec::new("fullName", "Name"),
        ColumnSpec::new("department", "Department"),
        ColumnSpec::new("position", "Position"),
        ColumnSpec::new("phone", "Phone"),
        ColumnSpec::new("email", "Email"),
        ACTIVE_COLUMN,
        CREATED_ON_COLUMN,
    ];
    const FORM_FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("employeeCode", "Code").required(),
        FieldSpec::text("fullName", "Full name").required(),
        FieldSpec::optional("department", "Department"),
        FieldSpec::optional("position", "Position"),
        FieldSpec::optional("phone", "Phone"),
        FieldSpec::optional("email", "Email"),
        FieldSpec::flag("isActive", "Active"),
    ];

    fn row_id(&self) -> String {
        self.id.to_string()
    }
}
