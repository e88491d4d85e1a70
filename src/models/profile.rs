use chrono::{DateTime, Utc};
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::FromSqliteRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MassUnit {
    #[default]
    Kg,
    Lb,
}

impl MassUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            MassUnit::Kg => "kg",
            MassUnit::Lb => "lb",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "lb" => MassUnit::Lb,
            _ => MassUnit::Kg,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    #[default]
    BuildMuscle,
    LoseFat,
    Strength,
}

impl GoalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalType::BuildMuscle => "build_muscle",
            GoalType::LoseFat => "lose_fat",
            GoalType::Strength => "strength",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "lose_fat" => GoalType::LoseFat,
            "strength" => GoalType::Strength,
            _ => GoalType::BuildMuscle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    #[default]
    Novice,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Novice => "novice",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "intermediate" => ExperienceLevel::Intermediate,
            "advanced" => ExperienceLevel::Advanced,
            _ => ExperienceLevel::Novice,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
    Other,
    #[default]
    Undisclosed,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
            Gender::Other => "other",
            Gender::Undisclosed => "undisclosed",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "female" => Gender::Female,
            "male" => Gender::Male,
            "other" => Gender::Other,
            _ => Gender::Undisclosed,
        }
    }
}

/// The single per-installation profile. `signed_in` is a placeholder flag;
/// there is no real authentication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub display_name: String,
    pub unit: MassUnit,
    pub height_cm: Option<f64>,
    pub current_weight: Option<f64>,
    pub goal: GoalType,
    pub experience: ExperienceLevel,
    pub gender: Gender,
    pub signed_in: bool,
    pub created_at: DateTime<Utc>,
}

impl FromSqliteRow for UserProfile {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let unit: String = row.get("unit")?;
        let goal: String = row.get("goal")?;
        let experience: String = row.get("experience")?;
        let gender: String = row.get("gender")?;
        Ok(Self {
            id: row.get("id")?,
            display_name: row.get("display_name")?,
            unit: MassUnit::parse(&unit),
            height_cm: row.get("height_cm")?,
            current_weight: row.get("current_weight")?,
            goal: GoalType::parse(&goal),
            experience: ExperienceLevel::parse(&experience),
            gender: Gender::parse(&gender),
            signed_in: row.get("signed_in")?,
            created_at: row.get("created_at")?,
        })
    }
}
