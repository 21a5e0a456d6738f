//! Per-contractor and per-machine entries of a daily report.

use fieldvoice_core::lenient::{self, Nullable};
use fieldvoice_core::types::RecordId;
use serde::{Deserialize, Serialize};

/// Storage table for contractor work narratives.
pub const CONTRACTOR_WORK_TABLE: &str = "report_contractor_work";

/// Storage table for personnel counts.
pub const PERSONNEL_TABLE: &str = "report_personnel";

/// Storage table for equipment usage.
pub const EQUIPMENT_USAGE_TABLE: &str = "report_equipment";

/// Equipment that logged hours, or whose hours were not reported.
pub const USAGE_STATUS_ACTIVE: &str = "active";

/// Equipment explicitly reported as not used.
pub const USAGE_STATUS_IDLE: &str = "idle";

// ---------------------------------------------------------------------------
// Contractor work
// ---------------------------------------------------------------------------

/// What a contractor did on the report day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractorActivity {
    #[serde(default, deserialize_with = "lenient::text")]
    pub contractor_id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub no_work: Option<bool>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub narrative: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub equipment_used: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub crew: Option<String>,
}

/// Payload inserted into `report_contractor_work`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractorWorkInsert {
    pub report_id: RecordId,
    pub contractor_id: Option<RecordId>,
    pub no_work_performed: bool,
    pub narrative: String,
    pub equipment_used: String,
    pub crew: String,
}

// ---------------------------------------------------------------------------
// Personnel
// ---------------------------------------------------------------------------

/// Headcount by role for one contractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractorOperations {
    #[serde(default, deserialize_with = "lenient::text")]
    pub contractor_id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient::integer32")]
    pub superintendents: Option<i32>,
    #[serde(default, deserialize_with = "lenient::integer32")]
    pub foremen: Option<i32>,
    #[serde(default, deserialize_with = "lenient::integer32")]
    pub operators: Option<i32>,
    #[serde(default, deserialize_with = "lenient::integer32")]
    pub laborers: Option<i32>,
    #[serde(default, deserialize_with = "lenient::integer32")]
    pub surveyors: Option<i32>,
    #[serde(default, deserialize_with = "lenient::integer32")]
    pub others: Option<i32>,
}

/// Payload inserted into `report_personnel`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonnelInsert {
    pub report_id: RecordId,
    pub contractor_id: Option<RecordId>,
    pub superintendents: i32,
    pub foremen: i32,
    pub operators: i32,
    pub laborers: i32,
    pub surveyors: i32,
    pub others: i32,
}

// ---------------------------------------------------------------------------
// Equipment usage
// ---------------------------------------------------------------------------

/// Hours logged for one machine.
///
/// `hours_utilized` set to an explicit `null` marks the machine idle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentEntry {
    #[serde(default, deserialize_with = "lenient::text")]
    pub equipment_id: Option<RecordId>,
    #[serde(
        default,
        deserialize_with = "lenient::nullable_number",
        skip_serializing_if = "Nullable::is_absent"
    )]
    pub hours_utilized: Nullable<f64>,
}

/// Payload inserted into `report_equipment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentUsageInsert {
    pub report_id: RecordId,
    pub equipment_id: Option<RecordId>,
    pub status: String,
    pub hours_used: f64,
    pub notes: String,
}
