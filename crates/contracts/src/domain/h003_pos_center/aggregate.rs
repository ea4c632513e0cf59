use serde::{Deserialize, Serialize};

use crate::domain::common::audit::{ACTIVE_COLUMN, CREATED_ON_COLUMN};
use crate::domain::common::AuditFields;
use crate::shared::list_resource::{CellFormat, ColumnSpec, FieldDefault, FieldSpec, ListResource};

/// Point-of-sale outlet (restaurant, bar, spa, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PosCenter {
    pub id: i64,
    pub pos_center_code: String,
    pub name: String,
    pub outlet_type: Option<String>,
    pub service_charge_percent: f64,
    pub tax_inclusive: bool,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl ListResource for PosCenter {
    const KEY: &'static str = "pos_center";
    const TITLE: &'static str = "POS Centers";
    const RESOURCE_PATH: &'static str = "/api/POSCenter";
    const SEARCH_FIELDS: &'static [&'static str] = &["posCenterCode", "name", "outletType"];
    const COLUMNS: &'static [ColumnSpec] = &[
        ColumnSpec::new("posCenterCode", "Code"),
        ColumnSpec::new("name", "Name"),
        ColumnSpec::new("outletType", "Outlet type"),
        ColumnSpec::new("serviceChargePercent", "Service charge %").formatted(CellFormat::Decimal2),
        ColumnSpec::new("taxInclusive", "Tax incl.").formatted(CellFormat::YesNo),
        ACTIVE_COLUMN,
        CREATED_ON_COLUMN,
    ];
    const FORM_FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("posCenterCode", "Code").required(),
        FieldSpec::text("name", "Name").required(),
        FieldSpec::optional("outletType", "Outlet type"),
        FieldSpec::number("serviceChargePercent", "Service charge %"),
        FieldSpec::flag("taxInclusive", "Tax inclusive").with_default(FieldDefault::Flag(false)),
        FieldSpec::flag("isActive", "Active"),
    ];

    fn row_id(&self) -> String {
        self.id.to_string()
    }
}
