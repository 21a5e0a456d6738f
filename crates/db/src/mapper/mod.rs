//! Conversions between storage and application shapes.
//!
//! [`RecordMapper`] carries the two things a conversion may need besides its
//! input: a [`Clock`] for freshness timestamps and the [`MapperConfig`]
//! defaults. Every conversion is a pure function of its arguments plus one
//! clock reading; none of them fail.
//!
//! | Entity | Storage -> application | Application -> storage |
//! |---|---|---|
//! | Project | `from_supabase_project` | `to_supabase_project` |
//! | Contractor | `from_supabase_contractor` | `to_supabase_contractor`, `to_supabase_contractors` |
//! | Equipment | `from_supabase_equipment` | `to_supabase_equipment`, `to_supabase_equipment_list` |
//! | Report | -- | `to_supabase_report`, `to_supabase_raw_capture` |
//! | Contractor work | -- | `to_supabase_contractor_work` |
//! | Personnel | -- | `to_supabase_personnel` |
//! | Equipment usage | -- | `to_supabase_equipment_usage` |
//! | Photo | -- | `to_supabase_photo` |
//!
//! [`RecordMapper::to_supabase_report_rows`] builds every row of a report in
//! one call.

mod contractor;
mod daily_work;
mod equipment;
mod photo;
mod project;
mod report;

pub use report::ReportRows;

use fieldvoice_core::clock::{Clock, SystemClock};
use fieldvoice_core::config::MapperConfig;
use fieldvoice_core::types::Timestamp;

/// Converts FieldVoice records between storage and application shapes.
#[derive(Debug, Clone, Default)]
pub struct RecordMapper<C = SystemClock> {
    clock: C,
    config: MapperConfig,
}

impl RecordMapper {
    /// A mapper on the system clock with default configuration.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> RecordMapper<C> {
    /// A mapper on the given clock with default configuration.
    pub fn with_clock(clock: C) -> Self {
        Self::with_config(clock, MapperConfig::default())
    }

    pub fn with_config(clock: C, config: MapperConfig) -> Self {
        Self { clock, config }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    fn now(&self) -> Timestamp {
        self.clock.now()
    }
}
