//! Project record shapes.

use fieldvoice_core::clock::iso_millis;
use fieldvoice_core::lenient;
use fieldvoice_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::contractor::Contractor;
use crate::models::equipment::Equipment;

/// Storage table for projects.
pub const TABLE: &str = "projects";

/// Status substituted when a project has none.
pub const STATUS_ACTIVE: &str = "active";

/// Solicitation number shown for projects that were not solicited.
pub const CNO_SOLICITATION_NONE: &str = "N/A";

// ---------------------------------------------------------------------------
// Storage shapes
// ---------------------------------------------------------------------------

/// A row read from the `projects` table.
///
/// Every column is optional. Date columns are expected as text
/// (`notice_to_proceed::text`), matching what the Supabase REST API returns.
#[derive(Debug, Clone, Default, PartialEq, FromRow, Deserialize)]
pub struct ProjectRow {
    #[sqlx(default)]
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<RecordId>,
    #[sqlx(default)]
    #[serde(default, deserialize_with = "lenient::text")]
    pub project_name: Option<String>,
    #[sqlx(default)]
    #[serde(default, deserialize_with = "lenient::text")]
    pub noab_project_no: Option<String>,
    #[sqlx(default)]
    #[serde(default, deserialize_with = "lenient::text")]
    pub cno_solicitation_no: Option<String>,
    #[sqlx(default)]
    #[serde(default, deserialize_with = "lenient::text")]
    pub location: Option<String>,
    #[sqlx(default)]
    #[serde(default, deserialize_with = "lenient::text")]
    pub engineer: Option<String>,
    #[sqlx(default)]
    #[serde(default, deserialize_with = "lenient::text")]
    pub prime_contractor: Option<String>,
    #[sqlx(default)]
    #[serde(default, deserialize_with = "lenient::text")]
    pub notice_to_proceed: Option<String>,
    #[sqlx(default)]
    #[serde(default, deserialize_with = "lenient::text")]
    pub contract_duration: Option<String>,
    #[sqlx(default)]
    #[serde(default, deserialize_with = "lenient::integer32")]
    pub weather_days: Option<i32>,
    #[sqlx(default)]
    #[serde(default, deserialize_with = "lenient::text")]
    pub expected_completion: Option<String>,
    #[sqlx(default)]
    #[serde(default, deserialize_with = "lenient::text")]
    pub default_start_time: Option<String>,
    #[sqlx(default)]
    #[serde(default, deserialize_with = "lenient::text")]
    pub default_end_time: Option<String>,
    #[sqlx(default)]
    #[serde(default, deserialize_with = "lenient::text")]
    pub logo: Option<String>,
    #[sqlx(default)]
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: Option<String>,
}

/// Payload written to the `projects` table.
///
/// `id` is omitted when the project has not been persisted yet so the
/// database assigns one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectUpsert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub project_name: String,
    pub noab_project_no: String,
    pub cno_solicitation_no: String,
    pub location: String,
    pub engineer: String,
    pub prime_contractor: String,
    pub notice_to_proceed: Option<String>,
    pub contract_duration: Option<String>,
    pub weather_days: i32,
    pub expected_completion: Option<String>,
    pub default_start_time: String,
    pub default_end_time: String,
    pub logo: Option<String>,
    pub status: String,
    #[serde(with = "iso_millis")]
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Application shape
// ---------------------------------------------------------------------------

/// A project as held by the application layer.
///
/// `contractors` and `equipment` are filled by the caller from their own
/// tables; conversions from storage leave them empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub noab_project_no: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub cno_solicitation_no: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub engineer: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub prime_contractor: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub notice_to_proceed: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub contract_duration: String,
    #[serde(default, deserialize_with = "lenient::integer32_or_zero")]
    pub weather_days: i32,
    #[serde(default, deserialize_with = "lenient::string")]
    pub expected_completion: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub default_start_time: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub default_end_time: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::records")]
    pub contractors: Vec<Contractor>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub equipment: Vec<Equipment>,
}
