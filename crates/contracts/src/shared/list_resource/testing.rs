//! Fixture resource shared by the list-resource tests

use serde::{Deserialize, Serialize};

use super::columns::{CellFormat, ColumnSpec};
use super::draft::{FieldDefault, FieldSpec};
use super::resource::{HotelScope, ListResource, UpdateRoute};
use crate::shared::session::SessionContext;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    #[serde(default)]
    pub id: i64,
    pub room_code: String,
    pub name: String,
    pub max_occupancy: i32,
    pub rack_rate: f64,
    pub is_active: bool,
    pub remarks: Option<String>,
    pub hotel_id: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

impl ListResource for RoomType {
    const KEY: &'static str = "room_type";
    const TITLE: &'static str = "Room Types";
    const RESOURCE_PATH: &'static str = "/api/RoomType";
    const SEARCH_FIELDS: &'static [&'static str] = &["roomCode", "name"];
    const COLUMNS: &'static [ColumnSpec] = &[
        ColumnSpec::new("roomCode", "Code"),
        ColumnSpec::new("name", "Name"),
        ColumnSpec::new("rackRate", "Rack rate").formatted(CellFormat::Decimal2),
        ColumnSpec::new("isActive", "Active").formatted(CellFormat::YesNo),
    ];
    const FORM_FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("roomCode", "Code").required(),
        FieldSpec::text("name", "Name").required(),
        FieldSpec::number("maxOccupancy", "Max occupancy"),
        FieldSpec::number("rackRate", "Rack rate"),
        FieldSpec::flag("isActive", "Active"),
        FieldSpec::optional("remarks", "Remarks"),
        FieldSpec::optional("createdBy", "Created by").with_default(FieldDefault::Actor),
    ];

    fn row_id(&self) -> String {
        self.id.to_string()
    }
}

/// Same entity, keyed by business code and scoped by header
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodedRoomType {
    #[serde(default)]
    pub id: i64,
    pub room_code: String,
}

impl ListResource for CodedRoomType {
    const KEY: &'static str = "coded_room_type";
    const TITLE: &'static str = "Coded Room Types";
    const RESOURCE_PATH: &'static str = "/api/CodedRoomType/";
    const HOTEL_FIELD: Option<&'static str> = None;
    const AUDITED: bool = false;
    const SEARCH_FIELDS: &'static [&'static str] = &["roomCode"];
    const COLUMNS: &'static [ColumnSpec] = &[ColumnSpec::new("roomCode", "Code")];
    const FORM_FIELDS: &'static [FieldSpec] = &[FieldSpec::text("roomCode", "Code").required()];

    fn row_id(&self) -> String {
        self.id.to_string()
    }

    fn update_route() -> UpdateRoute {
        UpdateRoute::PutByField("roomCode")
    }

    fn hotel_scope() -> HotelScope {
        HotelScope::Header("X-Hotel-Id")
    }
}

/// Flag-style update, no hotel scoping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlaggedRoomType {
    #[serde(default)]
    pub id: i64,
    pub room_code: String,
}

impl ListResource for FlaggedRoomType {
    const KEY: &'static str = "flagged_room_type";
    const TITLE: &'static str = "Flagged Room Types";
    const RESOURCE_PATH: &'static str = "/api/FlaggedRoomType";
    const HOTEL_FIELD: Option<&'static str> = None;
    const AUDITED: bool = false;
    const SEARCH_FIELDS: &'static [&'static str] = &["roomCode"];
    const COLUMNS: &'static [ColumnSpec] = &[ColumnSpec::new("roomCode", "Code")];
    const FORM_FIELDS: &'static [FieldSpec] = &[FieldSpec::text("roomCode", "Code").required()];

    fn row_id(&self) -> String {
        self.id.to_string()
    }

    fn update_route() -> UpdateRoute {
        UpdateRoute::PostWithFlag("isUpdate")
    }

    fn hotel_scope() -> HotelScope {
        HotelScope::None
    }
}

pub fn room(id: i64, code: &str, name: &str) -> RoomType {
    RoomType {
        id,
        room_code: code.to_string(),
        name: name.to_string(),
        max_occupancy: 2,
        rack_rate: 120.5,
        is_active: true,
        remarks: None,
        hotel_id: Some("H1".to_string()),
        created_by: Some("admin".to_string()),
        updated_by: None,
    }
}

/// `count` rooms named `Room 1..=count`
pub fn rooms(count: i64) -> Vec<RoomType> {
    (1..=count)
        .map(|i| room(i, &format!("R{:03}", i), &format!("Room {}", i)))
        .collect()
}

pub fn session() -> SessionContext {
    SessionContext {
        actor: Some("night.audit".to_string()),
        hotel_id: Some("H1".to_string()),
        access_token: Some("tok".to_string()),
        ..SessionContext::default()
    }
}
