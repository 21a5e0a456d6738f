use fieldvoice_core::clock::{iso8601, Clock};
use fieldvoice_core::coerce::{first_non_empty, non_empty_owned, text_or};
use fieldvoice_core::types::Timestamp;

use crate::models::photo::{Photo, PhotoInsert};
use crate::RecordMapper;

impl<C: Clock> RecordMapper<C> {
    /// Convert a report photo into a `photos` row.
    ///
    /// The file name falls back to the photo's client id, and the capture
    /// time falls back to the conversion time.
    pub fn to_supabase_photo(&self, photo: &Photo, report_id: &str) -> PhotoInsert {
        self.photo_insert(photo, report_id, self.now())
    }

    pub(super) fn photo_insert(&self, photo: &Photo, report_id: &str, now: Timestamp) -> PhotoInsert {
        tracing::trace!(entity = "photo", report_id, id = ?photo.id, "to_supabase");

        let gps = photo.gps.unwrap_or_default();

        PhotoInsert {
            report_id: report_id.to_string(),
            storage_path: text_or(photo.storage_path.as_deref(), ""),
            filename: first_non_empty([photo.file_name.as_deref(), photo.id.as_deref()])
                .unwrap_or_default()
                .to_string(),
            caption: text_or(photo.caption.as_deref(), ""),
            gps_lat: gps.lat,
            gps_lng: gps.lng,
            taken_at: non_empty_owned(photo.timestamp.as_deref()).unwrap_or_else(|| iso8601(&now)),
            created_at: now,
        }
    }
}
