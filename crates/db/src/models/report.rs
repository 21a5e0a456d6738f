//! Daily report shapes.
//!
//! Reports are only ever written from the application side, so there is no
//! read row here: the application [`Report`] feeds the `reports` row and the
//! `report_raw_capture` row.

use chrono::NaiveDate;
use fieldvoice_core::clock::iso_millis;
use fieldvoice_core::lenient;
use fieldvoice_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::daily_work::{ContractorActivity, ContractorOperations, EquipmentEntry};
use crate::models::photo::Photo;

/// Storage table for report headers.
pub const TABLE: &str = "reports";

/// Storage table for the captured field notes of a report.
pub const RAW_CAPTURE_TABLE: &str = "report_raw_capture";

/// Status of a report that has not been submitted.
pub const STATUS_DRAFT: &str = "draft";

/// Capture mode substituted when a report does not record one.
pub const CAPTURE_MODE_GUIDED: &str = "guided";

// ---------------------------------------------------------------------------
// Application shape
// ---------------------------------------------------------------------------

/// A daily report as held by the application layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(default, deserialize_with = "lenient::record")]
    pub overview: Option<ReportOverview>,
    #[serde(default, deserialize_with = "lenient::record")]
    pub meta: Option<ReportMeta>,
    #[serde(default, deserialize_with = "lenient::record")]
    pub field_notes: Option<FieldNotes>,
    #[serde(default, deserialize_with = "lenient::record")]
    pub guided_notes: Option<GuidedNotes>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub general_issues: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::record")]
    pub safety: Option<SafetyNotes>,

    /// Per-contractor work narratives.
    #[serde(default, deserialize_with = "lenient::records")]
    pub activities: Vec<ContractorActivity>,
    /// Per-contractor personnel counts.
    #[serde(default, deserialize_with = "lenient::records")]
    pub operations: Vec<ContractorOperations>,
    /// Equipment hours for the day.
    #[serde(default, deserialize_with = "lenient::records")]
    pub equipment: Vec<EquipmentEntry>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub photos: Vec<Photo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOverview {
    /// Name of the inspector who completed the report.
    #[serde(default, deserialize_with = "lenient::text")]
    pub completed_by: Option<String>,
    /// Weather observations; stored as an opaque JSON object.
    #[serde(default, deserialize_with = "lenient::object")]
    pub weather: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMeta {
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub capture_mode: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldNotes {
    #[serde(default, deserialize_with = "lenient::text")]
    pub freeform_notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidedNotes {
    #[serde(default, deserialize_with = "lenient::text")]
    pub work_summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SafetyNotes {
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub notes: Option<Vec<String>>,
}

/// Session settings of the signed-in user, consulted for the inspector name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(default, deserialize_with = "lenient::text")]
    pub full_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Storage shapes
// ---------------------------------------------------------------------------

/// Payload inserted into the `reports` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportInsert {
    pub project_id: RecordId,
    /// Serialized as `YYYY-MM-DD`.
    pub report_date: NaiveDate,
    pub inspector_name: String,
    pub status: String,
    #[serde(with = "iso_millis")]
    pub updated_at: Timestamp,
}

/// Payload inserted into the `report_raw_capture` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCaptureInsert {
    pub report_id: RecordId,
    pub capture_mode: String,
    pub freeform_notes: String,
    pub work_summary: String,
    /// General issues, one per line.
    pub issues_notes: String,
    /// Safety notes, one per line.
    pub safety_notes: String,
    pub weather_data: Map<String, Value>,
    #[serde(with = "iso_millis")]
    pub captured_at: Timestamp,
}
