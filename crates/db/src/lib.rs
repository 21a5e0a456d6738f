//! `fieldvoice-db`: storage and application shapes for FieldVoice records,
//! and the [`RecordMapper`] that converts between them.
//!
//! Storage shapes mirror the Supabase tables (snake_case columns); read rows
//! derive [`sqlx::FromRow`] so the persistence layer can fetch them directly.
//! Application shapes are the camelCase objects the UI works with.

pub mod mapper;
pub mod models;

pub use mapper::RecordMapper;
pub use models::FromJson;
