use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::FromSqliteRow;

/// A named weekly workout plan. Training weekdays are stored as a bit-mask
/// (bit 0 = Sunday .. bit 6 = Saturday); at most one split is active at a
/// time, enforced by the repository rather than the schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSplit {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub weekday_mask: i64,
}

impl WorkoutSplit {
    /// Training weekdays as a sorted list of 0=Sunday..6=Saturday indices.
    pub fn training_weekdays(&self) -> Vec<u8> {
        (0u8..7).filter(|d| self.weekday_mask & (1 << d) != 0).collect()
    }

    pub fn has_weekday(&self, weekday: u8) -> bool {
        weekday < 7 && self.weekday_mask & (1 << weekday) != 0
    }

    pub fn weekday_mask_from(weekdays: &[u8]) -> i64 {
        weekdays
            .iter()
            .filter(|&&d| d < 7)
            .fold(0i64, |mask, &d| mask | (1 << d))
    }
}

impl FromSqliteRow for WorkoutSplit {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            is_active: row.get("is_active")?,
            weekday_mask: row.get("weekday_mask")?,
        })
    }
}

/// A reusable day-template within a split. `day_order` is the explicit
/// ordering index; storage order is never relied upon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitDay {
    pub id: String,
    pub split_id: String,
    pub title: String,
    pub day_order: i64,
}

impl FromSqliteRow for SplitDay {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            split_id: row.get("split_id")?,
            title: row.get("title")?,
            day_order: row.get("day_order")?,
        })
    }
}
