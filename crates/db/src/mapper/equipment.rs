use fieldvoice_core::clock::Clock;
use fieldvoice_core::coerce::{non_empty_owned, text_or};
use fieldvoice_core::types::Timestamp;

use crate::models::equipment::{Equipment, EquipmentRow, EquipmentUpsert, STATUS_ACTIVE};
use crate::RecordMapper;

impl<C: Clock> RecordMapper<C> {
    /// Convert an `equipment` row into the application shape.
    pub fn from_supabase_equipment(&self, row: &EquipmentRow) -> Equipment {
        tracing::trace!(entity = "equipment", id = ?row.id, "from_supabase");

        Equipment {
            id: row.id.clone(),
            contractor_id: row.contractor_id.clone(),
            equipment_type: text_or(row.equipment_type.as_deref(), ""),
            model: text_or(row.model.as_deref(), ""),
            identifier: non_empty_owned(row.identifier.as_deref()),
            status: text_or(row.status.as_deref(), STATUS_ACTIVE),
            added_date: non_empty_owned(row.added_date.as_deref()),
            removed_date: non_empty_owned(row.removed_date.as_deref()),
        }
    }

    /// Convert application equipment into an `equipment` upsert payload
    /// owned by `project_id`. The owning contractor is taken from the
    /// equipment itself.
    pub fn to_supabase_equipment(&self, equipment: &Equipment, project_id: &str) -> EquipmentUpsert {
        self.equipment_upsert(equipment, project_id, self.now())
    }

    /// Convert every piece of equipment of a project, sharing one freshness
    /// stamp.
    pub fn to_supabase_equipment_list(
        &self,
        equipment: &[Equipment],
        project_id: &str,
    ) -> Vec<EquipmentUpsert> {
        let now = self.now();
        equipment
            .iter()
            .map(|e| self.equipment_upsert(e, project_id, now))
            .collect()
    }

    fn equipment_upsert(
        &self,
        equipment: &Equipment,
        project_id: &str,
        now: Timestamp,
    ) -> EquipmentUpsert {
        tracing::trace!(entity = "equipment", id = ?equipment.id, project_id, "to_supabase");

        EquipmentUpsert {
            id: equipment.id.clone(),
            project_id: project_id.to_string(),
            contractor_id: equipment.contractor_id.clone(),
            equipment_type: equipment.equipment_type.clone(),
            model: equipment.model.clone(),
            identifier: non_empty_owned(equipment.identifier.as_deref()),
            status: text_or(Some(equipment.status.as_str()), STATUS_ACTIVE),
            added_date: non_empty_owned(equipment.added_date.as_deref()),
            removed_date: non_empty_owned(equipment.removed_date.as_deref()),
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use fieldvoice_core::clock::FixedClock;
    use serde_json::json;

    use super::*;
    use crate::FromJson;

    fn mapper() -> RecordMapper<FixedClock> {
        RecordMapper::with_clock(FixedClock(
            Utc.with_ymd_and_hms(2026, 4, 1, 14, 30, 0).unwrap(),
        ))
    }

    #[test]
    fn empty_row_gets_documented_defaults() {
        let equipment = mapper().from_supabase_equipment(&EquipmentRow::default());

        assert_eq!(equipment.contractor_id, None);
        assert_eq!(equipment.equipment_type, "");
        assert_eq!(equipment.model, "");
        assert_eq!(equipment.identifier, None);
        assert_eq!(equipment.status, "active");
        assert_eq!(equipment.added_date, None);
    }

    #[test]
    fn row_maps_type_and_owner() {
        let row = EquipmentRow::from_json(json!({
            "id": "E1",
            "contractor_id": "C1",
            "type": "Excavator",
            "model": "CAT 320",
            "identifier": "EX-04",
            "status": "removed",
            "removed_date": "2026-03-15"
        }));
        let equipment = mapper().from_supabase_equipment(&row);

        assert_eq!(equipment.id.as_deref(), Some("E1"));
        assert_eq!(equipment.contractor_id.as_deref(), Some("C1"));
        assert_eq!(equipment.equipment_type, "Excavator");
        assert_eq!(equipment.model, "CAT 320");
        assert_eq!(equipment.identifier.as_deref(), Some("EX-04"));
        assert_eq!(equipment.status, "removed");
        assert_eq!(equipment.removed_date.as_deref(), Some("2026-03-15"));
    }

    #[test]
    fn upsert_carries_project_and_contractor() {
        let m = mapper();
        let equipment = Equipment::from_json(json!({
            "id": "E1",
            "contractorId": "C1",
            "type": "Roller",
            "identifier": ""
        }));
        let upsert = m.to_supabase_equipment(&equipment, "P1");

        assert_eq!(upsert.project_id, "P1");
        assert_eq!(upsert.contractor_id.as_deref(), Some("C1"));
        assert_eq!(upsert.equipment_type, "Roller");
        assert_eq!(upsert.identifier, None);
        assert_eq!(upsert.status, "active");
        assert_eq!(upsert.updated_at, m.now());
    }

    #[test]
    fn missing_contractor_serializes_as_null() {
        let value =
            serde_json::to_value(mapper().to_supabase_equipment(&Equipment::default(), "P1")).unwrap();
        assert!(value["contractor_id"].is_null());
        assert_eq!(value["type"], "");
    }

    #[test]
    fn storage_round_trip_preserves_fields() {
        let m = mapper();
        let original = Equipment::from_json(json!({
            "id": "E7",
            "contractorId": "C2",
            "type": "Loader",
            "model": "Deere 544",
            "identifier": "LD-2",
            "status": "active",
            "addedDate": "2026-01-10"
        }));
        let stored = serde_json::to_value(m.to_supabase_equipment(&original, "P1")).unwrap();
        let restored = m.from_supabase_equipment(&EquipmentRow::from_json(stored));
        assert_eq!(restored, original);
    }

    #[test]
    fn batch_conversion_shares_owner() {
        let list = vec![Equipment::default(), Equipment::default()];
        let upserts = mapper().to_supabase_equipment_list(&list, "P3");
        assert_eq!(upserts.len(), 2);
        assert!(upserts.iter().all(|u| u.project_id == "P3"));
    }
}
