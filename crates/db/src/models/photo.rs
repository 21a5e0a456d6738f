//! Report photo shapes. The image bytes live in blob storage; these records
//! only carry the storage path and capture metadata.

use fieldvoice_core::clock::iso_millis;
use fieldvoice_core::lenient;
use fieldvoice_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};

/// Storage table for photo metadata.
pub const TABLE: &str = "photos";

/// A photo attached to a report, as held by the application layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// Client-side id; doubles as the file name when `file_name` is unset.
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub storage_path: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub file_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub caption: Option<String>,
    #[serde(default, deserialize_with = "lenient::record")]
    pub gps: Option<GpsFix>,
    /// Capture time as recorded by the device.
    #[serde(default, deserialize_with = "lenient::text")]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GpsFix {
    #[serde(default, deserialize_with = "lenient::number")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub lng: Option<f64>,
}

/// Payload inserted into the `photos` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoInsert {
    pub report_id: RecordId,
    pub storage_path: String,
    pub filename: String,
    pub caption: String,
    pub gps_lat: Option<f64>,
    pub gps_lng: Option<f64>,
    pub taken_at: String,
    #[serde(with = "iso_millis")]
    pub created_at: Timestamp,
}
