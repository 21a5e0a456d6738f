/// Record identities are opaque strings (Supabase UUIDs, or client-side ids
/// for records not yet persisted).
pub type RecordId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
