use chrono::NaiveDate;
use fieldvoice_core::clock::Clock;
use fieldvoice_core::coerce::{first_non_empty, join_lines, text_or};
use fieldvoice_core::types::Timestamp;
use serde::Serialize;

use crate::models::daily_work::{ContractorWorkInsert, EquipmentUsageInsert, PersonnelInsert};
use crate::models::photo::PhotoInsert;
use crate::models::report::{
    RawCaptureInsert, Report, ReportInsert, UserSettings, CAPTURE_MODE_GUIDED, STATUS_DRAFT,
};
use crate::RecordMapper;

/// Every row produced from one report, stamped with a single clock reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRows {
    pub report: ReportInsert,
    pub raw_capture: RawCaptureInsert,
    pub contractor_work: Vec<ContractorWorkInsert>,
    pub personnel: Vec<PersonnelInsert>,
    pub equipment_usage: Vec<EquipmentUsageInsert>,
    pub photos: Vec<PhotoInsert>,
}

impl<C: Clock> RecordMapper<C> {
    /// Convert a report into its `reports` header row for `project_id`.
    ///
    /// The inspector is the report's own `completedBy`, else the signed-in
    /// user's name, else empty. `report_date` is today's date in the
    /// configured report timezone.
    pub fn to_supabase_report(
        &self,
        report: &Report,
        project_id: &str,
        user_settings: Option<&UserSettings>,
    ) -> ReportInsert {
        self.report_insert(report, project_id, user_settings, self.now())
    }

    /// Convert a report's captured notes into its `report_raw_capture` row.
    pub fn to_supabase_raw_capture(&self, report: &Report, report_id: &str) -> RawCaptureInsert {
        self.raw_capture_insert(report, report_id, self.now())
    }

    /// Convert a full report into every row it persists to: the header,
    /// the raw capture, and one row per activity, headcount, machine and
    /// photo.
    ///
    /// `report_id` is the id the header row was (or will be) stored under.
    pub fn to_supabase_report_rows(
        &self,
        report: &Report,
        project_id: &str,
        report_id: &str,
        user_settings: Option<&UserSettings>,
    ) -> ReportRows {
        let now = self.now();

        let rows = ReportRows {
            report: self.report_insert(report, project_id, user_settings, now),
            raw_capture: self.raw_capture_insert(report, report_id, now),
            contractor_work: report
                .activities
                .iter()
                .map(|a| self.to_supabase_contractor_work(a, report_id))
                .collect(),
            personnel: report
                .operations
                .iter()
                .map(|o| self.to_supabase_personnel(o, report_id))
                .collect(),
            equipment_usage: report
                .equipment
                .iter()
                .map(|e| self.to_supabase_equipment_usage(e, report_id))
                .collect(),
            photos: report
                .photos
                .iter()
                .map(|p| self.photo_insert(p, report_id, now))
                .collect(),
        };

        tracing::debug!(
            project_id,
            report_id,
            contractor_work = rows.contractor_work.len(),
            personnel = rows.personnel.len(),
            equipment_usage = rows.equipment_usage.len(),
            photos = rows.photos.len(),
            "Built report rows"
        );

        rows
    }

    fn report_insert(
        &self,
        report: &Report,
        project_id: &str,
        user_settings: Option<&UserSettings>,
        now: Timestamp,
    ) -> ReportInsert {
        tracing::trace!(entity = "report", project_id, "to_supabase");

        let completed_by = report
            .overview
            .as_ref()
            .and_then(|o| o.completed_by.as_deref());
        let user_name = user_settings.and_then(|u| u.full_name.as_deref());

        ReportInsert {
            project_id: project_id.to_string(),
            report_date: self.report_date(now),
            inspector_name: first_non_empty([completed_by, user_name])
                .unwrap_or_default()
                .to_string(),
            status: text_or(
                report.meta.as_ref().and_then(|m| m.status.as_deref()),
                STATUS_DRAFT,
            ),
            updated_at: now,
        }
    }

    fn raw_capture_insert(&self, report: &Report, report_id: &str, now: Timestamp) -> RawCaptureInsert {
        tracing::trace!(entity = "raw_capture", report_id, "to_supabase");

        RawCaptureInsert {
            report_id: report_id.to_string(),
            capture_mode: text_or(
                report.meta.as_ref().and_then(|m| m.capture_mode.as_deref()),
                CAPTURE_MODE_GUIDED,
            ),
            freeform_notes: text_or(
                report
                    .field_notes
                    .as_ref()
                    .and_then(|n| n.freeform_notes.as_deref()),
                "",
            ),
            work_summary: text_or(
                report
                    .guided_notes
                    .as_ref()
                    .and_then(|n| n.work_summary.as_deref()),
                "",
            ),
            issues_notes: join_lines(report.general_issues.as_deref()),
            safety_notes: join_lines(report.safety.as_ref().and_then(|s| s.notes.as_deref())),
            weather_data: report
                .overview
                .as_ref()
                .and_then(|o| o.weather.clone())
                .unwrap_or_default(),
            captured_at: now,
        }
    }

    /// Calendar date of `now` in the configured report timezone.
    fn report_date(&self, now: Timestamp) -> NaiveDate {
        now.with_timezone(&self.config.report_date_offset())
            .date_naive()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use fieldvoice_core::clock::FixedClock;
    use fieldvoice_core::config::MapperConfig;
    use serde_json::json;

    use super::*;
    use crate::FromJson;

    fn mapper() -> RecordMapper<FixedClock> {
        RecordMapper::with_clock(FixedClock(
            Utc.with_ymd_and_hms(2026, 4, 1, 14, 30, 0).unwrap(),
        ))
    }

    fn jane() -> UserSettings {
        UserSettings {
            full_name: Some("Jane".to_string()),
        }
    }

    #[test]
    fn inspector_falls_back_to_user_settings() {
        let report = Report::from_json(json!({ "overview": {} }));
        let insert = mapper().to_supabase_report(&report, "P1", Some(&jane()));
        assert_eq!(insert.inspector_name, "Jane");
    }

    #[test]
    fn inspector_prefers_completed_by() {
        let report = Report::from_json(json!({ "overview": { "completedBy": "Bob" } }));
        let insert = mapper().to_supabase_report(&report, "P1", Some(&jane()));
        assert_eq!(insert.inspector_name, "Bob");
    }

    #[test]
    fn empty_completed_by_falls_through() {
        let report = Report::from_json(json!({ "overview": { "completedBy": "" } }));
        let insert = mapper().to_supabase_report(&report, "P1", Some(&jane()));
        assert_eq!(insert.inspector_name, "Jane");
    }

    #[test]
    fn inspector_is_empty_without_any_name() {
        let insert = mapper().to_supabase_report(&Report::default(), "P1", None);
        assert_eq!(insert.inspector_name, "");
    }

    #[test]
    fn report_header_defaults() {
        let m = mapper();
        let insert = m.to_supabase_report(&Report::default(), "P1", None);

        assert_eq!(insert.project_id, "P1");
        assert_eq!(insert.status, "draft");
        assert_eq!(insert.report_date, NaiveDate::from_ymd_opt(2026, 4, 1).unwrap());
        assert_eq!(insert.updated_at, m.now());
    }

    #[test]
    fn report_status_comes_from_meta() {
        let report = Report::from_json(json!({ "meta": { "status": "submitted" } }));
        assert_eq!(mapper().to_supabase_report(&report, "P1", None).status, "submitted");
    }

    #[test]
    fn report_date_serializes_as_plain_date() {
        let value = serde_json::to_value(mapper().to_supabase_report(&Report::default(), "P1", None))
            .unwrap();
        assert_eq!(value["report_date"], "2026-04-01");
        assert_eq!(value["updated_at"], "2026-04-01T14:30:00.000Z");
    }

    #[test]
    fn report_date_uses_utc_by_default() {
        let m = RecordMapper::with_clock(FixedClock(
            Utc.with_ymd_and_hms(2026, 4, 2, 2, 0, 0).unwrap(),
        ));
        let insert = m.to_supabase_report(&Report::default(), "P1", None);
        assert_eq!(insert.report_date, NaiveDate::from_ymd_opt(2026, 4, 2).unwrap());
    }

    #[test]
    fn report_date_honours_configured_offset() {
        // 02:00 UTC is still the previous evening in US Central time.
        let config = MapperConfig {
            report_date_offset_minutes: -300,
            ..MapperConfig::default()
        };
        let m = RecordMapper::with_config(
            FixedClock(Utc.with_ymd_and_hms(2026, 4, 2, 2, 0, 0).unwrap()),
            config,
        );
        let insert = m.to_supabase_report(&Report::default(), "P1", None);
        assert_eq!(insert.report_date, NaiveDate::from_ymd_opt(2026, 4, 1).unwrap());
    }

    #[test]
    fn raw_capture_defaults() {
        let m = mapper();
        let capture = m.to_supabase_raw_capture(&Report::default(), "R1");

        assert_eq!(capture.report_id, "R1");
        assert_eq!(capture.capture_mode, "guided");
        assert_eq!(capture.freeform_notes, "");
        assert_eq!(capture.work_summary, "");
        assert_eq!(capture.issues_notes, "");
        assert_eq!(capture.safety_notes, "");
        assert!(capture.weather_data.is_empty());
        assert_eq!(capture.captured_at, m.now());
    }

    #[test]
    fn raw_capture_joins_note_lists() {
        let report = Report::from_json(json!({
            "meta": { "captureMode": "freeform" },
            "fieldNotes": { "freeformNotes": "Paving crew on site at 7" },
            "guidedNotes": { "workSummary": "Base course placed" },
            "generalIssues": ["Utility conflict at Sta. 12", "Late delivery"],
            "safety": { "notes": ["Hard hats enforced"] },
            "overview": { "weather": { "highTemp": 88, "conditions": "Clear" } }
        }));
        let capture = mapper().to_supabase_raw_capture(&report, "R1");

        assert_eq!(capture.capture_mode, "freeform");
        assert_eq!(capture.freeform_notes, "Paving crew on site at 7");
        assert_eq!(capture.work_summary, "Base course placed");
        assert_eq!(capture.issues_notes, "Utility conflict at Sta. 12\nLate delivery");
        assert_eq!(capture.safety_notes, "Hard hats enforced");
        assert_eq!(capture.weather_data["conditions"], "Clear");
        assert_eq!(capture.weather_data["highTemp"], 88);
    }

    #[test]
    fn non_object_weather_becomes_empty_object() {
        let report = Report::from_json(json!({ "overview": { "weather": "sunny" } }));
        let value = serde_json::to_value(mapper().to_supabase_raw_capture(&report, "R1")).unwrap();
        assert_eq!(value["weather_data"], json!({}));
    }

    #[test]
    fn report_rows_cover_every_child_collection() {
        let report = Report::from_json(json!({
            "overview": { "completedBy": "Bob" },
            "activities": [
                { "contractorId": "C1", "narrative": "Formed curb" },
                { "contractorId": "C2", "noWork": true }
            ],
            "operations": [{ "contractorId": "C1", "laborers": 5 }],
            "equipment": [
                { "equipmentId": "E1", "hoursUtilized": 8 },
                { "equipmentId": "E2", "hoursUtilized": null }
            ],
            "photos": [{ "id": "ph-1" }]
        }));
        let m = mapper();
        let rows = m.to_supabase_report_rows(&report, "P1", "R1", None);

        assert_eq!(rows.report.inspector_name, "Bob");
        assert_eq!(rows.raw_capture.report_id, "R1");
        assert_eq!(rows.contractor_work.len(), 2);
        assert!(rows.contractor_work[1].no_work_performed);
        assert_eq!(rows.personnel[0].laborers, 5);
        assert_eq!(rows.equipment_usage[0].status, "active");
        assert_eq!(rows.equipment_usage[1].status, "idle");
        assert_eq!(rows.photos[0].filename, "ph-1");
        assert!(rows
            .contractor_work
            .iter()
            .all(|w| w.report_id == "R1"));
        assert_eq!(rows.report.updated_at, rows.raw_capture.captured_at);
        assert_eq!(rows.raw_capture.captured_at, rows.photos[0].created_at);
    }

    #[test]
    fn malformed_children_are_skipped() {
        let report = Report::from_json(json!({
            "activities": [{ "contractorId": "C1" }, "not an activity", 42],
            "photos": "none"
        }));
        let rows = mapper().to_supabase_report_rows(&report, "P1", "R1", None);
        assert_eq!(rows.contractor_work.len(), 1);
        assert!(rows.photos.is_empty());
    }
}
