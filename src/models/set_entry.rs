use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::FromSqliteRow;

/// One logged set. Weight is always stored in kilograms, the canonical unit;
/// display-unit conversion is a presentation concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetEntry {
    pub id: String,
    pub exercise_id: String,
    pub weight: f64,
    pub reps: i64,
    pub logged_at: DateTime<Utc>,
}

impl SetEntry {
    /// The calendar day this set belongs to, used as the grouping key for
    /// sessions and statistics.
    pub fn day(&self) -> NaiveDate {
        self.logged_at.date_naive()
    }
}

impl FromSqliteRow for SetEntry {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            exercise_id: row.get("exercise_id")?,
            weight: row.get("weight")?,
            reps: row.get("reps")?,
            logged_at: row.get("logged_at")?,
        })
    }
}
