use chrono::NaiveDate;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::FromSqliteRow;

/// One body-weight measurement per calendar day, in kilograms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyWeightRecord {
    pub id: String,
    pub date: NaiveDate,
    pub weight: f64,
}

impl FromSqliteRow for BodyWeightRecord {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            date: row.get("date")?,
            weight: row.get("weight")?,
        })
    }
}
