pub mod contact_repository;
pub mod message_repository;
pub mod user_repository;

use crate::{DbError, Result};

use chrono::{DateTime, Utc};

/// Timestamps are stored as Unix milliseconds.
pub(crate) fn to_millis(at: DateTime<Utc>) -> i64 {
    at.timestamp_millis()
}

#[track_caller]
pub(crate) fn from_millis(table: &'static str, millis: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| DbError::decode(table, format!("timestamp out of range: {millis}")))
}
