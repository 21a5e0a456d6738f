//! Record shapes for each entity.
//!
//! Each submodule contains, as applicable:
//! - A `FromRow` + `Deserialize` row struct read from the table (all fields optional)
//! - A camelCase application struct as held by the UI layer
//! - A `Serialize` upsert/insert struct written back to the table

pub mod contractor;
pub mod daily_work;
pub mod equipment;
pub mod photo;
pub mod project;
pub mod report;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a loosely structured JSON payload without failing.
///
/// Objects go through the lenient field decoders; anything else (arrays,
/// scalars, `null`) yields the all-defaults record.
pub trait FromJson: DeserializeOwned + Default {
    fn from_json(value: Value) -> Self {
        if !value.is_object() {
            tracing::debug!(
                shape = std::any::type_name::<Self>(),
                kind = json_kind(&value),
                "Payload is not an object -- using defaults"
            );
            return Self::default();
        }
        match serde_json::from_value(value) {
            Ok(decoded) => decoded,
            Err(e) => {
                tracing::debug!(
                    shape = std::any::type_name::<Self>(),
                    error = %e,
                    "Payload could not be decoded -- using defaults"
                );
                Self::default()
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl FromJson for project::ProjectRow {}
impl FromJson for project::Project {}
impl FromJson for contractor::ContractorRow {}
impl FromJson for contractor::Contractor {}
impl FromJson for equipment::EquipmentRow {}
impl FromJson for equipment::Equipment {}
impl FromJson for report::Report {}
impl FromJson for report::UserSettings {}
impl FromJson for daily_work::ContractorActivity {}
impl FromJson for daily_work::ContractorOperations {}
impl FromJson for daily_work::EquipmentEntry {}
impl FromJson for photo::Photo {}
