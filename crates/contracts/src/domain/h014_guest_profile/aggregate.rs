use serde::{Deserialize, Serialize};

use crate::domain::common::audit::CREATED_ON_COLUMN;
use crate::domain::common::validation::draft_date;
use crate::domain::common::AuditFields;
use crate::shared::list_resource::resource::required_fields;
use crate::shared::list_resource::{
    CellFormat, ColumnSpec, FieldDefault, FieldSpec, FormDraft, HotelScope, ListResource,
};

/// Guest card. The hotel travels in the `X-Hotel-Id` header for this endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuestProfile {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub nationality: Option<String>,
    pub passport_no: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<String>,
    pub is_vip: bool,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl ListResource for GuestProfile {
    const KEY: &'static str = "guest_profile";
    const TITLE: &'static str = "Guest Profiles";
    const RESOURCE_PATH: &'static str = "/api/GuestProfile";
    const SEARCH_FIELDS: &'static [&'static str] =
        &["firstName", "lastName", "nationality", "passportNo", "phone", "email"];
    const COLUMNS: &'static [ColumnSpec] = &[
        ColumnSpec::new("lastName", "Last name"),
        ColumnSpec::new("firstName", "First name"),
        ColumnSpec::new("nationality", "Nationality"),
        ColumnSpec::new("passportNo", "Passport"),
        ColumnSpec::new("phone", "Phone"),
        ColumnSpec::new("email", "Email"),
        ColumnSpec::new("isVip", "VIP").formatted(CellFormat::YesNo),
        CREATED_ON_COLUMN,
    ];
    const FORM_FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("firstName", "First name"),
        FieldSpec::text("lastName", "Last name").required(),
        FieldSpec::optional("nationality", "Nationality"),
        FieldSpec::optional("passportNo", "Passport"),
        FieldSpec::optional("phone", "Phone"),
        FieldSpec::optional("email", "Email"),
        FieldSpec::date("dateOfBirth", "Date of birth"),
        FieldSpec::flag("isVip", "VIP").with_default(FieldDefault::Flag(false)),
    ];

    fn row_id(&self) -> String {
        self.id.to_string()
    }

    fn hotel_scope() -> HotelScope {
        HotelScope::Header("X-Hotel-Id")
    }

    fn validate(draft: &FormDraft) -> Result<(), String> {
        required_fields(Self::FORM_FIELDS, draft)?;
        draft_date(draft, "dateOfBirth", "Date of birth").map(|_| ())
    }
}
