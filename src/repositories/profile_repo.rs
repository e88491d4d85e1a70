use chrono::Utc;
use rusqlite::OptionalExtension;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{ExperienceLevel, FromSqliteRow, Gender, GoalType, MassUnit, UserProfile};

/// Fields captured by onboarding.
#[derive(Debug, Clone)]
pub struct CreateProfile {
    pub display_name: String,
    pub unit: MassUnit,
    pub height_cm: Option<f64>,
    pub current_weight: Option<f64>,
    pub goal: GoalType,
    pub experience: ExperienceLevel,
    pub gender: Gender,
}

#[derive(Clone)]
pub struct ProfileRepository {
    pool: DbPool,
}

impl ProfileRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// The installation's profile, if onboarding has run.
    pub async fn find(&self) -> Result<Option<UserProfile>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare("SELECT * FROM profiles LIMIT 1")?;
            let result = stmt.query_row([], UserProfile::from_row).optional()?;
            Ok(result)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Creates the single per-installation profile. Fails if one exists.
    pub async fn create(&self, create: CreateProfile) -> Result<UserProfile> {
        if self.find().await?.is_some() {
            return Err(AppError::Validation(
                "a profile already exists; onboarding can only run once".to_string(),
            ));
        }

        let profile = UserProfile {
            id: Uuid::new_v4().to_string(),
            display_name: create.display_name,
            unit: create.unit,
            height_cm: create.height_cm,
            current_weight: create.current_weight,
            goal: create.goal,
            experience: create.experience,
            gender: create.gender,
            signed_in: true,
            created_at: Utc::now(),
        };
        let profile_clone = profile.clone();

        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<()> {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO profiles
                 (id, display_name, unit, height_cm, current_weight, goal, experience, gender, signed_in, created_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                rusqlite::params![
                    profile_clone.id,
                    profile_clone.display_name,
                    profile_clone.unit.as_str(),
                    profile_clone.height_cm,
                    profile_clone.current_weight,
                    profile_clone.goal.as_str(),
                    profile_clone.experience.as_str(),
                    profile_clone.gender.as_str(),
                    profile_clone.signed_in,
                    profile_clone.created_at
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

        Ok(profile)
    }

    pub async fn update_current_weight(&self, id: &str, weight: f64) -> Result<bool> {
        let pool = self.pool.clone();
        let id = id.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let rows = conn.execute(
                "UPDATE profiles SET current_weight = ? WHERE id = ?",
                rusqlite::params![weight, id],
            )?;
            Ok(rows > 0)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
