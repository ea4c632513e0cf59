use serde::{Deserialize, Serialize};

use crate::domain::common::audit::ACTIVE_COLUMN;
use crate::domain::common::AuditFields;
use crate::shared::list_resource::{ColumnSpec, FieldDefault, FieldSpec, ListResource};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Supplier {
    pub id: i64,
    pub supplier_code: String,
    pub name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub tax_number: Option<String>,
    /// Payment terms, days
    pub credit_days: i32,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl ListResource for Supplier {
    const KEY: &'static str = "supplier";
    const TITLE: &'static str = "Suppliers";
    const RESOURCE_PATH: &'static str = "/api/Supplier";
    const SEARCH_FIELDS: &'static [&'static str] =
        &["supplierCode", "name", "contactPerson", "phone", "email", "taxNumber"];
    const COLUMNS: &'static [ColumnSpec] = &[
        ColumnSpec::new("supplierCode", "Code"),
        ColumnSpec::new("name", "Name"),
        ColumnSpec::new("contactPerson", "Contact"),
        ColumnSpec::new("phone", "Phone"),
        ColumnSpec::new("email", "Email"),
        ColumnSpec::new("creditDays", "Credit days"),
        ACTIVE_COLUMN,
    ];
    const FORM_FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("supplierCode", "Code").required(),
        FieldSpec::text("name", "Name").required(),
        FieldSpec::optional("contactPerson", "Contact person"),
        FieldSpec::optional("phone", "Phone"),
        FieldSpec::optional("email", "Email"),
        FieldSpec::optional("taxNumber", "Tax number"),
        FieldSpec::number("creditDays", "Credit days").with_default(FieldDefault::Text("30")),
        FieldSpec::flag("isActive", "Active"),
    ];

    fn row_id(&self) -> String {
        self.id.to_string()
    }
}
