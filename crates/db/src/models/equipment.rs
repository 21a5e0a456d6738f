//! Equipment record shapes.

use fieldvoice_core::clock::iso_millis;
use fieldvoice_core::lenient;
use fieldvoice_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Storage table for project equipment.
pub const TABLE: &str = "equipment";

/// Status substituted when a piece of equipment has none.
pub const STATUS_ACTIVE: &str = "active";

/// A row read from the `equipment` table.
#[derive(Debug, Clone, Default, PartialEq, FromRow, Deserialize)]
pub struct EquipmentRow {
    #[sqlx(default)]
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<RecordId>,
    #[sqlx(default)]
    #[serde(default, deserialize_with = "lenient::text")]
    pub contractor_id: Option<RecordId>,
    #[sqlx(default, rename = "type")]
    #[serde(default, rename = "type", deserialize_with = "lenient::text")]
    pub equipment_type: Option<String>,
    #[sqlx(default)]
    #[serde(default, deserialize_with = "lenient::text")]
    pub model: Option<String>,
    #[sqlx(default)]
    #[serde(default, deserialize_with = "lenient::text")]
    pub identifier: Option<String>,
    #[sqlx(default)]
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: Option<String>,
    #[sqlx(default)]
    #[serde(default, deserialize_with = "lenient::text")]
    pub added_date: Option<String>,
    #[sqlx(default)]
    #[serde(default, deserialize_with = "lenient::text")]
    pub removed_date: Option<String>,
}

/// Payload written to the `equipment` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentUpsert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub project_id: RecordId,
    pub contractor_id: Option<RecordId>,
    #[serde(rename = "type")]
    pub equipment_type: String,
    pub model: String,
    pub identifier: Option<String>,
    pub status: String,
    pub added_date: Option<String>,
    pub removed_date: Option<String>,
    #[serde(with = "iso_millis")]
    pub updated_at: Timestamp,
}

/// A piece of equipment as held by the application layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub contractor_id: Option<RecordId>,
    #[serde(default, rename = "type", deserialize_with = "lenient::string")]
    pub equipment_type: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub model: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub identifier: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub added_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub removed_date: Option<String>,
}
