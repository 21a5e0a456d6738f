use fieldvoice_core::clock::Clock;
use fieldvoice_core::coerce::{non_empty_owned, text_or};

use crate::models::project::{
    Project, ProjectRow, ProjectUpsert, CNO_SOLICITATION_NONE, STATUS_ACTIVE,
};
use crate::RecordMapper;

impl<C: Clock> RecordMapper<C> {
    /// Convert a `projects` row into the application shape.
    ///
    /// `contractors` and `equipment` come back empty; the caller attaches
    /// them from their own tables.
    pub fn from_supabase_project(&self, row: &ProjectRow) -> Project {
        tracing::trace!(entity = "project", id = ?row.id, "from_supabase");

        Project {
            id: row.id.clone(),
            name: text_or(row.project_name.as_deref(), ""),
            noab_project_no: text_or(row.noab_project_no.as_deref(), ""),
            cno_solicitation_no: text_or(
                row.cno_solicitation_no.as_deref(),
                CNO_SOLICITATION_NONE,
            ),
            location: text_or(row.location.as_deref(), ""),
            engineer: text_or(row.engineer.as_deref(), ""),
            prime_contractor: text_or(row.prime_contractor.as_deref(), ""),
            notice_to_proceed: text_or(row.notice_to_proceed.as_deref(), ""),
            contract_duration: text_or(row.contract_duration.as_deref(), ""),
            weather_days: row.weather_days.unwrap_or(0),
            expected_completion: text_or(row.expected_completion.as_deref(), ""),
            default_start_time: text_or(
                row.default_start_time.as_deref(),
                &self.config.default_start_time,
            ),
            default_end_time: text_or(
                row.default_end_time.as_deref(),
                &self.config.default_end_time,
            ),
            logo: non_empty_owned(row.logo.as_deref()),
            status: text_or(row.status.as_deref(), STATUS_ACTIVE),
            contractors: Vec::new(),
            equipment: Vec::new(),
        }
    }

    /// Convert an application project into a `projects` upsert payload.
    ///
    /// Unset dates and durations are written as `NULL` rather than `""`.
    pub fn to_supabase_project(&self, project: &Project) -> ProjectUpsert {
        tracing::trace!(entity = "project", id = ?project.id, "to_supabase");

        ProjectUpsert {
            id: project.id.clone(),
            project_name: project.name.clone(),
            noab_project_no: project.noab_project_no.clone(),
            cno_solicitation_no: text_or(
                Some(project.cno_solicitation_no.as_str()),
                CNO_SOLICITATION_NONE,
            ),
            location: project.location.clone(),
            engineer: project.engineer.clone(),
            prime_contractor: project.prime_contractor.clone(),
            notice_to_proceed: non_empty_owned(Some(project.notice_to_proceed.as_str())),
            contract_duration: non_empty_owned(Some(project.contract_duration.as_str())),
            weather_days: project.weather_days,
            expected_completion: non_empty_owned(Some(project.expected_completion.as_str())),
            default_start_time: text_or(
                Some(project.default_start_time.as_str()),
                &self.config.default_start_time,
            ),
            default_end_time: text_or(
                Some(project.default_end_time.as_str()),
                &self.config.default_end_time,
            ),
            logo: non_empty_owned(project.logo.as_deref()),
            status: text_or(Some(project.status.as_str()), STATUS_ACTIVE),
            updated_at: self.now(),
        }
    }
}
