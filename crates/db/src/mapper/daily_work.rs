use fieldvoice_core::clock::Clock;
use fieldvoice_core::coerce::text_or;
use fieldvoice_core::lenient::Nullable;

use crate::models::daily_work::{
    ContractorActivity, ContractorOperations, ContractorWorkInsert, EquipmentEntry,
    EquipmentUsageInsert, PersonnelInsert, USAGE_STATUS_ACTIVE, USAGE_STATUS_IDLE,
};
use crate::RecordMapper;

impl<C: Clock> RecordMapper<C> {
    /// Convert a contractor's work entry into a `report_contractor_work` row.
    pub fn to_supabase_contractor_work(
        &self,
        activity: &ContractorActivity,
        report_id: &str,
    ) -> ContractorWorkInsert {
        tracing::trace!(entity = "contractor_work", report_id, contractor_id = ?activity.contractor_id, "to_supabase");

        ContractorWorkInsert {
            report_id: report_id.to_string(),
            contractor_id: activity.contractor_id.clone(),
            no_work_performed: activity.no_work.unwrap_or(false),
            narrative: text_or(activity.narrative.as_deref(), ""),
            equipment_used: text_or(activity.equipment_used.as_deref(), ""),
            crew: text_or(activity.crew.as_deref(), ""),
        }
    }

    /// Convert a contractor's headcount into a `report_personnel` row.
    /// Missing counts are written as zero.
    pub fn to_supabase_personnel(
        &self,
        ops: &ContractorOperations,
        report_id: &str,
    ) -> PersonnelInsert {
        tracing::trace!(entity = "personnel", report_id, contractor_id = ?ops.contractor_id, "to_supabase");

        PersonnelInsert {
            report_id: report_id.to_string(),
            contractor_id: ops.contractor_id.clone(),
            superintendents: ops.superintendents.unwrap_or(0),
            foremen: ops.foremen.unwrap_or(0),
            operators: ops.operators.unwrap_or(0),
            laborers: ops.laborers.unwrap_or(0),
            surveyors: ops.surveyors.unwrap_or(0),
            others: ops.others.unwrap_or(0),
        }
    }

    /// Convert a machine's hours into a `report_equipment` row.
    ///
    /// Status is derived: an explicit `null` for hours means `idle`,
    /// anything else (including hours not reported at all) means `active`.
    pub fn to_supabase_equipment_usage(
        &self,
        entry: &EquipmentEntry,
        report_id: &str,
    ) -> EquipmentUsageInsert {
        tracing::trace!(entity = "equipment_usage", report_id, equipment_id = ?entry.equipment_id, "to_supabase");

        let status = match entry.hours_utilized {
            Nullable::Null => USAGE_STATUS_IDLE,
            Nullable::Absent | Nullable::Value(_) => USAGE_STATUS_ACTIVE,
        };

        EquipmentUsageInsert {
            report_id: report_id.to_string(),
            equipment_id: entry.equipment_id.clone(),
            status: status.to_string(),
            hours_used: entry.hours_utilized.value().copied().unwrap_or(0.0),
            notes: String::new(),
        }
    }
}
