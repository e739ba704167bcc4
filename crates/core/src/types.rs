/// Store-assigned primary keys, monotonically increasing per collection.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
