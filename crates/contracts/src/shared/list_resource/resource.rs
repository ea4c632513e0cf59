use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

use super::columns::ColumnSpec;
use super::draft::{FieldSpec, FormDraft};

/// How an existing record is saved.
///
/// The backend is not uniform: most resources take `PUT {path}/{id}`, rate plans reuse
/// the create endpoint with a flag, sales executives are keyed by business code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateRoute {
    /// `PUT {path}/{id}`
    PutById,
    /// `POST {path}?{flag}=true`
    PostWithFlag(&'static str),
    /// `PUT {path}/{draft[field]}`
    PutByField(&'static str),
}

/// How list requests are narrowed to the selected hotel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotelScope {
    None,
    QueryParam(&'static str),
    Header(&'static str),
}

/// Per-entity configuration of the generic list controller.
///
/// Implemented directly on the wire type of the entity.
pub trait ListResource:
    Serialize + DeserializeOwned + Clone + Debug + PartialEq + Send + Sync + 'static
{
    /// Stable page key (sidebar, `?active=`)
    const KEY: &'static str;
    /// Page title
    const TITLE: &'static str;
    /// REST collection path, e.g. `/api/MealAllocation`
    const RESOURCE_PATH: &'static str;
    /// Wire name of the identity field
    const ID_FIELD: &'static str = "id";
    /// Wire name of the hotel field stamped on create, if the entity has one
    const HOTEL_FIELD: Option<&'static str> = Some("hotelId");
    /// Whether `createdBy`/`updatedBy` are stamped with the session user
    const AUDITED: bool = true;
    /// Fields matched by the search box
    const SEARCH_FIELDS: &'static [&'static str];
    const COLUMNS: &'static [ColumnSpec];
    const FORM_FIELDS: &'static [FieldSpec];

    fn row_id(&self) -> String;

    fn update_route() -> UpdateRoute {
        UpdateRoute::PutById
    }

    fn hotel_scope() -> HotelScope {
        HotelScope::QueryParam("hotelId")
    }

    /// Client-side check before dispatching a mutation.
    ///
    /// Default: every required field is non-blank.
    fn validate(draft: &FormDraft) -> Result<(), String> {
        required_fields(Self::FORM_FIELDS, draft)
    }
}

/// `"<label> is required"` for the first blank required field
pub fn required_fields(fields: &[FieldSpec], draft: &FormDraft) -> Result<(), String> {
    for spec in fields.iter().filter(|spec| spec.required) {
        let blank = draft.get(spec.name).map(|v| v.is_blank()).unwrap_or(true);
        if blank {
            return Err(format!("{} is required", spec.label));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_resource::draft::DraftValue;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::text("code", "Code").required(),
        FieldSpec::text("name", "Name").required(),
        FieldSpec::optional("note", "Note"),
    ];

    #[test]
    fn first_blank_required_field_is_reported() {
        let mut draft = FormDraft::new();
        draft.insert("code".into(), DraftValue::Text("  ".into()));
        assert_eq!(required_fields(FIELDS, &draft), Err("Code is required".into()));

        draft.insert("code".into(), DraftValue::Text("BB".into()));
        assert_eq!(required_fields(FIELDS, &draft), Err("Name is required".into()));

        draft.insert("name".into(), DraftValue::Text("Bed & Breakfast".into()));
        assert_eq!(required_fields(FIELDS, &draft), Ok(()));
    }
}
