//! Contractor record shapes.

use fieldvoice_core::clock::iso_millis;
use fieldvoice_core::lenient;
use fieldvoice_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Storage table for contractors.
pub const TABLE: &str = "contractors";

/// Contractor type substituted when none is recorded.
pub const TYPE_SUBCONTRACTOR: &str = "subcontractor";

/// Status substituted when a contractor has none.
pub const STATUS_ACTIVE: &str = "active";

/// A row read from the `contractors` table.
#[derive(Debug, Clone, Default, PartialEq, FromRow, Deserialize)]
pub struct ContractorRow {
    #[sqlx(default)]
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<RecordId>,
    #[sqlx(default)]
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[sqlx(default)]
    #[serde(default, deserialize_with = "lenient::text")]
    pub abbreviation: Option<String>,
    #[sqlx(default, rename = "type")]
    #[serde(default, rename = "type", deserialize_with = "lenient::text")]
    pub contractor_type: Option<String>,
    /// Postgres `text[]`. Older rows stored a single delimited string, which
    /// the JSON decoder splits.
    #[sqlx(default)]
    #[serde(default, deserialize_with = "lenient::trade_list")]
    pub trades: Option<Vec<String>>,
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

/// Payload written to the `contractors` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractorUpsert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub project_id: RecordId,
    pub name: String,
    pub abbreviation: String,
    #[serde(rename = "type")]
    pub contractor_type: String,
    pub trades: Vec<String>,
    pub status: String,
    pub added_date: Option<String>,
    pub removed_date: Option<String>,
    #[serde(with = "iso_millis")]
    pub updated_at: Timestamp,
}

/// A contractor as held by the application layer.
///
/// `trades` is the display form, e.g. `"Paving; Grading"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contractor {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub abbreviation: String,
    #[serde(default, rename = "type", deserialize_with = "lenient::string")]
    pub contractor_type: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub trades: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub added_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub removed_date: Option<String>,
}
