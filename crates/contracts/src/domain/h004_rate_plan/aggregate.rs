use serde::{Deserialize, Serialize};

use crate::domain::common::audit::ACTIVE_COLUMN;
use crate::domain::common::validation::date_range;
use crate::domain::common::AuditFields;
use crate::shared::list_resource::resource::required_fields;
use crate::shared::list_resource::{
    CellFormat, ColumnSpec, FieldDefault, FieldSpec, FormDraft, ListResource, UpdateRoute,
};

/// Hotel rate plan.
///
/// Updates go through the create endpoint with `?isUpdate=true`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RatePlan {
    pub id: i64,
    pub rate_code: String,
    pub title: String,
    pub currency: String,
    pub base_rate: f64,
    /// `MealAllocation::meal_code` included in the rate
    pub meal_allocation_code: Option<String>,
    pub valid_from: Option<String>,
    pub valid_to: Option<String>,
    pub is_refundable: bool,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl ListResource for RatePlan {
    const KEY: &'static str = "rate_plan";
    const TITLE: &'static str = "Rate Plans";
    const RESOURCE_PATH: &'static str = "/api/HotelRatePlans";
    const SEARCH_FIELDS: &'static [&'static str] = &["rateCode", "title", "currency", "mealAllocationCode"];
    const COLUMNS: &'static [ColumnSpec] = &[
        ColumnSpec::new("rateCode", "Rate code"),
        ColumnSpec::new("title", "Title"),
        ColumnSpec::new("currency", "Currency"),
        ColumnSpec::new("baseRate", "Base rate").formatted(CellFormat::Decimal2),
        ColumnSpec::new("mealAllocationCode", "Meal plan"),
        ColumnSpec::new("validFrom", "Valid from").formatted(CellFormat::Date),
        ColumnSpec::new("validTo", "Valid to").formatted(CellFormat::Date),
        ColumnSpec::new("isRefundable", "Refundable").formatted(CellFormat::YesNo),
        ACTIVE_COLUMN,
    ];
    const FORM_FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("rateCode", "Rate code").required(),
        FieldSpec::text("title", "Title").required(),
        FieldSpec::text("currency", "Currency")
            .required()
            .with_default(FieldDefault::Text("USD")),
        FieldSpec::number("baseRate", "Base rate"),
        FieldSpec::optional("mealAllocationCode", "Meal plan"),
        FieldSpec::date("validFrom", "Valid from"),
        FieldSpec::date("validTo", "Valid to"),
        FieldSpec::flag("isRefundable", "Refundable"),
        FieldSpec::flag("isActive", "Active"),
    ];

    fn row_id(&self) -> String {
        self.id.to_string()
    }

    fn update_route() -> UpdateRoute {
        UpdateRoute::PostWithFlag("isUpdate")
    }

    fn validate(draft: &FormDraft) -> Result<(), String> {
        required_fields(Self::FORM_FIELDS, draft)?;
        date_range(draft, ("validFrom", "Valid from"), ("validTo", "Valid to"))
    }
}
