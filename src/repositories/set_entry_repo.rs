use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{FromSqliteRow, SetEntry};

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).expect("midnight is valid"))
}

#[derive(Clone)]
pub struct SetEntryRepository {
    pool: DbPool,
}

impl SetEntryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_exercise(&self, exercise_id: &str) -> Result<Vec<SetEntry>> {
        let pool = self.pool.clone();
        let exercise_id = exercise_id.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn
                .prepare("SELECT * FROM set_entries WHERE exercise_id = ? ORDER BY logged_at")?;
            let entries = stmt
                .query_map([&exercise_id], SetEntry::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(entries)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Entries for one exercise with `logged_at` on or after `from`.
    pub async fn find_by_exercise_since(
        &self,
        exercise_id: &str,
        from: NaiveDate,
    ) -> Result<Vec<SetEntry>> {
        let pool = self.pool.clone();
        let exercise_id = exercise_id.to_string();
        let cutoff = start_of_day(from);
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT * FROM set_entries WHERE exercise_id = ? AND logged_at >= ?
                 ORDER BY logged_at",
            )?;
            let entries = stmt
                .query_map(rusqlite::params![exercise_id, cutoff], SetEntry::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(entries)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Entries for one exercise dated strictly before the start of `before`,
    /// the input shape the progression recommender expects.
    pub async fn find_by_exercise_before(
        &self,
        exercise_id: &str,
        before: NaiveDate,
    ) -> Result<Vec<SetEntry>> {
        let pool = self.pool.clone();
        let exercise_id = exercise_id.to_string();
        let cutoff = start_of_day(before);
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT * FROM set_entries WHERE exercise_id = ? AND logged_at < ?
                 ORDER BY logged_at",
            )?;
            let entries = stmt
                .query_map(rusqlite::params![exercise_id, cutoff], SetEntry::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(entries)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_for_day(&self, exercise_id: &str, date: NaiveDate) -> Result<Vec<SetEntry>> {
        let pool = self.pool.clone();
        let exercise_id = exercise_id.to_string();
        let day_start = start_of_day(date);
        let day_end = day_start + Duration::days(1);
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT * FROM set_entries
                 WHERE exercise_id = ? AND logged_at >= ? AND logged_at < ?
                 ORDER BY logged_at",
            )?;
            let entries = stmt
                .query_map(
                    rusqlite::params![exercise_id, day_start, day_end],
                    SetEntry::from_row,
                )?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(entries)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Replaces the full day's entries for one exercise: existing rows for
    /// that calendar day are deleted and the new list inserted in a single
    /// transaction. Logging an empty list clears the day.
    pub async fn replace_day_entries(
        &self,
        exercise_id: &str,
        date: NaiveDate,
        sets: &[(f64, i64)],
    ) -> Result<Vec<SetEntry>> {
        for &(weight, reps) in sets {
            if weight < 0.0 {
                return Err(AppError::Validation("weight must not be negative".to_string()));
            }
            if reps < 1 {
                return Err(AppError::Validation("reps must be at least 1".to_string()));
            }
        }

        let day_start = start_of_day(date);
        let day_end = day_start + Duration::days(1);

        let entries: Vec<SetEntry> = sets
            .iter()
            .enumerate()
            .map(|(i, &(weight, reps))| SetEntry {
                id: Uuid::new_v4().to_string(),
                exercise_id: exercise_id.to_string(),
                weight,
                reps,
                // Spread within the day so insertion order survives sorting.
                logged_at: day_start + Duration::hours(12) + Duration::seconds(i as i64),
            })
            .collect();
        let entries_clone = entries.clone();

        let pool = self.pool.clone();
        let exercise_id = exercise_id.to_string();
        tokio::task::spawn_blocking(move || -> Result<()> {
            let mut conn = pool.get()?;
            let tx = conn.transaction()?;
            tx.execute(
                "DELETE FROM set_entries
                 WHERE exercise_id = ? AND logged_at >= ? AND logged_at < ?",
                rusqlite::params![exercise_id, day_start, day_end],
            )?;
            for entry in &entries_clone {
                tx.execute(
                    "INSERT INTO set_entries (id, exercise_id, weight, reps, logged_at)
                     VALUES (?, ?, ?, ?, ?)",
                    rusqlite::params![
                        entry.id,
                        entry.exercise_id,
                        entry.weight,
                        entry.reps,
                        entry.logged_at
                    ],
                )?;
            }
            tx.commit()?;
            Ok(())
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

        Ok(entries)
    }
}
