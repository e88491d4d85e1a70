use chrono::NaiveDate;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{BodyWeightRecord, FromSqliteRow};

#[derive(Clone)]
pub struct BodyWeightRepository {
    pool: DbPool,
}

impl BodyWeightRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// One conceptual record per calendar day: logging twice on the same
    /// day replaces the earlier measurement.
    pub async fn upsert_for_date(&self, date: NaiveDate, weight: f64) -> Result<BodyWeightRecord> {
        if weight < 0.0 {
            return Err(AppError::Validation("weight must not be negative".to_string()));
        }

        let record = BodyWeightRecord {
            id: Uuid::new_v4().to_string(),
            date,
            weight,
        };
        let record_clone = record.clone();

        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<()> {
            let mut conn = pool.get()?;
            let tx = conn.transaction()?;
            tx.execute(
                "DELETE FROM body_weight_records WHERE date = ?",
                [record_clone.date],
            )?;
            tx.execute(
                "INSERT INTO body_weight_records (id, date, weight) VALUES (?, ?, ?)",
                rusqlite::params![record_clone.id, record_clone.date, record_clone.weight],
            )?;
            tx.commit()?;
            Ok(())
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

        Ok(record)
    }

    pub async fn find_since(&self, from: NaiveDate) -> Result<Vec<BodyWeightRecord>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn
                .prepare("SELECT * FROM body_weight_records WHERE date >= ? ORDER BY date")?;
            let records = stmt
                .query_map([from], BodyWeightRecord::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(records)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_all(&self) -> Result<Vec<BodyWeightRecord>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare("SELECT * FROM body_weight_records ORDER BY date")?;
            let records = stmt
                .query_map([], BodyWeightRecord::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(records)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;
    use crate::migrations::run_migrations_for_tests;

    fn setup_test_db() -> DbPool {
        let pool = create_memory_pool().expect("Failed to create test database");
        run_migrations_for_tests(&pool).expect("Failed to run migrations");
        pool
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[tokio::test]
    async fn test_upsert_replaces_same_day_record() {
        let pool = setup_test_db();
        let repo = BodyWeightRepository::new(pool);

        repo.upsert_for_date(d(2025, 7, 1), 82.0).await.unwrap();
        repo.upsert_for_date(d(2025, 7, 1), 81.5).await.unwrap();

        let records = repo.find_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].weight, 81.5);
    }

    #[tokio::test]
    async fn test_find_since_filters_by_date() {
        let pool = setup_test_db();
        let repo = BodyWeightRepository::new(pool);

        repo.upsert_for_date(d(2025, 6, 1), 84.0).await.unwrap();
        repo.upsert_for_date(d(2025, 7, 1), 82.0).await.unwrap();

        let records = repo.find_since(d(2025, 6, 15)).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, d(2025, 7, 1));
    }

    #[tokio::test]
    async fn test_negative_weight_is_rejected() {
        let pool = setup_test_db();
        let repo = BodyWeightRepository::new(pool);

        let result = repo.upsert_for_date(d(2025, 7, 1), -1.0).await;
        assert!(matches!(result, Err(crate::error::AppError::Validation(_))));
    }
}
