use rusqlite::OptionalExtension;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{Exercise, FromSqliteRow, SplitDay, WorkoutSplit};

#[derive(Clone)]
pub struct SplitRepository {
    pool: DbPool,
}

impl SplitRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: &str, weekday_mask: i64) -> Result<WorkoutSplit> {
        let split = WorkoutSplit {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            is_active: false,
            weekday_mask,
        };
        let split_clone = split.clone();

        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<()> {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO splits (id, name, is_active, weekday_mask) VALUES (?, ?, ?, ?)",
                rusqlite::params![
                    split_clone.id,
                    split_clone.name,
                    split_clone.is_active,
                    split_clone.weekday_mask
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

        Ok(split)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<WorkoutSplit>> {
        let pool = self.pool.clone();
        let name = name.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare("SELECT * FROM splits WHERE name = ? COLLATE NOCASE")?;
            let result = stmt.query_row([&name], WorkoutSplit::from_row).optional()?;
            Ok(result)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_all(&self) -> Result<Vec<WorkoutSplit>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare("SELECT * FROM splits ORDER BY name")?;
            let splits = stmt
                .query_map([], WorkoutSplit::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(splits)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_active(&self) -> Result<Option<WorkoutSplit>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare("SELECT * FROM splits WHERE is_active = 1 LIMIT 1")?;
            let result = stmt.query_row([], WorkoutSplit::from_row).optional()?;
            Ok(result)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Marks one split active and clears the flag on every other split, so
    /// at most one split is active at a time.
    pub async fn activate(&self, id: &str) -> Result<bool> {
        let pool = self.pool.clone();
        let id = id.to_string();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            let tx = conn.transaction()?;
            tx.execute("UPDATE splits SET is_active = 0 WHERE id != ?", [&id])?;
            let rows = tx.execute("UPDATE splits SET is_active = 1 WHERE id = ?", [&id])?;
            tx.commit()?;
            Ok(rows > 0)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn set_training_weekdays(&self, id: &str, weekday_mask: i64) -> Result<bool> {
        let pool = self.pool.clone();
        let id = id.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let rows = conn.execute(
                "UPDATE splits SET weekday_mask = ? WHERE id = ?",
                rusqlite::params![weekday_mask, id],
            )?;
            Ok(rows > 0)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        let pool = self.pool.clone();
        let id = id.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let rows = conn.execute("DELETE FROM splits WHERE id = ?", [&id])?;
            Ok(rows > 0)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    // Split days

    pub async fn add_day(&self, split_id: &str, title: &str, day_order: i64) -> Result<SplitDay> {
        let day = SplitDay {
            id: Uuid::new_v4().to_string(),
            split_id: split_id.to_string(),
            title: title.to_string(),
            day_order,
        };
        let day_clone = day.clone();

        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<()> {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO split_days (id, split_id, title, day_order) VALUES (?, ?, ?, ?)",
                rusqlite::params![
                    day_clone.id,
                    day_clone.split_id,
                    day_clone.title,
                    day_clone.day_order
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

        Ok(day)
    }

    pub async fn find_days(&self, split_id: &str) -> Result<Vec<SplitDay>> {
        let pool = self.pool.clone();
        let split_id = split_id.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt =
                conn.prepare("SELECT * FROM split_days WHERE split_id = ? ORDER BY day_order")?;
            let days = stmt
                .query_map([&split_id], SplitDay::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(days)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    // Day exercise lists. The day owns its ordered reference list; the
    // exercises themselves are shared.

    pub async fn add_exercise_to_day(
        &self,
        split_day_id: &str,
        exercise_id: &str,
        position: i64,
    ) -> Result<()> {
        let pool = self.pool.clone();
        let split_day_id = split_day_id.to_string();
        let exercise_id = exercise_id.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            conn.execute(
                "INSERT OR REPLACE INTO split_day_exercises (split_day_id, exercise_id, position)
                 VALUES (?, ?, ?)",
                rusqlite::params![split_day_id, exercise_id, position],
            )?;
            Ok(())
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn remove_exercise_from_day(
        &self,
        split_day_id: &str,
        exercise_id: &str,
    ) -> Result<bool> {
        let pool = self.pool.clone();
        let split_day_id = split_day_id.to_string();
        let exercise_id = exercise_id.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let rows = conn.execute(
                "DELETE FROM split_day_exercises WHERE split_day_id = ? AND exercise_id = ?",
                rusqlite::params![split_day_id, exercise_id],
            )?;
            Ok(rows > 0)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_day_exercises(&self, split_day_id: &str) -> Result<Vec<Exercise>> {
        let pool = self.pool.clone();
        let split_day_id = split_day_id.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT e.* FROM exercises e
                 JOIN split_day_exercises sde ON sde.exercise_id = e.id
                 WHERE sde.split_day_id = ?
                 ORDER BY sde.position",
            )?;
            let exercises = stmt
                .query_map([&split_day_id], Exercise::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(exercises)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
