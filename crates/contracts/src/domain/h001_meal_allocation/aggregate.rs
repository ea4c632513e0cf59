use serde::{Deserialize, Serialize};

use crate::domain::common::audit::{ACTIVE_COLUMN, CREATED_ON_COLUMN};
use crate::domain::common::AuditFields;
use crate::shared::list_resource::{CellFormat, ColumnSpec, FieldDefault, FieldSpec, ListResource};

/// Meal plan attached to rates (BB, HB, FB, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MealAllocation {
    pub id: i64,
    pub meal_code: String,
    pub description: String,
    pub breakfast: bool,
    pub lunch: bool,
    pub dinner: bool,
    /// Price per person per night
    pub rate: f64,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl ListResource for MealAllocation {
    const KEY: &'static str = "meal_allocation";
    const TITLE: &'static str = "Meal Allocation";
    const RESOURCE_PATH: &'static str = "/api/MealAllocation";
    const SEARCH_FIELDS: &'static [&'static str] = &["mealCode", "description"];
    const COLUMNS: &'static [ColumnSpec] = &[
        ColumnSpec::new("mealCode", "Code"),
        ColumnSpec::new("description", "Description"),
        ColumnSpec::new("breakfast", "Breakfast").formatted(CellFormat::YesNo),
        ColumnSpec::new("lunch", "Lunch").formatted(CellFormat::YesNo),
        ColumnSpec::new("dinner", "Dinner").formatted(CellFormat::YesNo),
        ColumnSpec::new("rate", "Rate").formatted(CellFormat::Decimal2),
        ACTIVE_COLUMN,
        CREATED_ON_COLUMN,
    ];
    const FORM_FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("mealCode", "Meal code").required(),
        FieldSpec::text("description", "Description").required(),
        FieldSpec::flag("breakfast", "Breakfast"),
        FieldSpec::flag("lunch", "Lunch").with_default(FieldDefault::Flag(false)),
        FieldSpec::flag("dinner", "Dinner").with_default(FieldDefault::Flag(false)),
        FieldSpec::number("rate", "Rate"),
        FieldSpec::flag("isActive", "Active"),
    ];

    fn row_id(&self) -> String {
        self.id.to_string()
    }
}
