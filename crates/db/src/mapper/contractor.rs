use fieldvoice_core::clock::Clock;
use fieldvoice_core::coerce::{non_empty_owned, text_or};
use fieldvoice_core::trades;
use fieldvoice_core::types::Timestamp;

use crate::models::contractor::{
    Contractor, ContractorRow, ContractorUpsert, STATUS_ACTIVE, TYPE_SUBCONTRACTOR,
};
use crate::RecordMapper;

impl<C: Clock> RecordMapper<C> {
    /// Convert a `contractors` row into the application shape, joining the
    /// stored trade list with `"; "`.
    pub fn from_supabase_contractor(&self, row: &ContractorRow) -> Contractor {
        tracing::trace!(entity = "contractor", id = ?row.id, "from_supabase");

        Contractor {
            id: row.id.clone(),
            name: text_or(row.name.as_deref(), ""),
            abbreviation: text_or(row.abbreviation.as_deref(), ""),
            contractor_type: text_or(row.contractor_type.as_deref(), TYPE_SUBCONTRACTOR),
            trades: row.trades.as_deref().map(trades::join).unwrap_or_default(),
            status: text_or(row.status.as_deref(), STATUS_ACTIVE),
            added_date: non_empty_owned(row.added_date.as_deref()),
            removed_date: non_empty_owned(row.removed_date.as_deref()),
        }
    }

    /// Convert an application contractor into a `contractors` upsert payload
    /// owned by `project_id`, splitting the trade string into a list.
    pub fn to_supabase_contractor(&self, contractor: &Contractor, project_id: &str) -> ContractorUpsert {
        self.contractor_upsert(contractor, project_id, self.now())
    }

    /// Convert every contractor of a project, sharing one freshness stamp.
    pub fn to_supabase_contractors(
        &self,
        contractors: &[Contractor],
        project_id: &str,
    ) -> Vec<ContractorUpsert> {
        let now = self.now();
        contractors
            .iter()
            .map(|c| self.contractor_upsert(c, project_id, now))
            .collect()
    }

    fn contractor_upsert(
        &self,
        contractor: &Contractor,
        project_id: &str,
        now: Timestamp,
    ) -> ContractorUpsert {
        tracing::trace!(entity = "contractor", id = ?contractor.id, project_id, "to_supabase");

        ContractorUpsert {
            id: contractor.id.clone(),
            project_id: project_id.to_string(),
            name: contractor.name.clone(),
            abbreviation: contractor.abbreviation.clone(),
            contractor_type: text_or(Some(contractor.contractor_type.as_str()), TYPE_SUBCONTRACTOR),
            trades: trades::split(&contractor.trades),
            status: text_or(Some(contractor.status.as_str()), STATUS_ACTIVE),
            added_date: non_empty_owned(contractor.added_date.as_deref()),
            removed_date: non_empty_owned(contractor.removed_date.as_deref()),
            updated_at: now,
        }
    }
}
