use serde::{Deserialize, Serialize};

use crate::shared::list_resource::{CellFormat, ColumnSpec};

/// Hotel scope and audit trail carried by every persisted record.
///
/// Flattened into the entity so the wire format stays `{"hotelId": .., "createdBy": ..}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditFields {
    pub hotel_id: Option<String>,
    pub created_by: Option<String>,
    /// ISO-8601, set by the server
    pub created_on: Option<String>,
    pub updated_by: Option<String>,
    pub updated_on: Option<String>,
}

pub const CREATED_ON_COLUMN: ColumnSpec =
    ColumnSpec::new("createdOn", "Created").formatted(CellFormat::Timestamp);

pub const ACTIVE_COLUMN: ColumnSpec = ColumnSpec::new("isActive", "Active").formatted(CellFormat::YesNo);
