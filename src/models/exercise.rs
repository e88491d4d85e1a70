use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::FromSqliteRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Shoulders,
    Biceps,
    Triceps,
    Forearms,
    Core,
    FullBody,
}

impl MuscleGroup {
    pub const ALL: &'static [MuscleGroup] = &[
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Legs,
        MuscleGroup::Shoulders,
        MuscleGroup::Biceps,
        MuscleGroup::Triceps,
        MuscleGroup::Forearms,
        MuscleGroup::Core,
        MuscleGroup::FullBody,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Legs => "legs",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Biceps => "biceps",
            MuscleGroup::Triceps => "triceps",
            MuscleGroup::Forearms => "forearms",
            MuscleGroup::Core => "core",
            MuscleGroup::FullBody => "full_body",
        }
    }

    /// Unknown values fall back to FullBody, mirroring the catalog's
    /// default bucket.
    pub fn parse(s: &str) -> Self {
        match s {
            "chest" => MuscleGroup::Chest,
            "back" => MuscleGroup::Back,
            "legs" => MuscleGroup::Legs,
            "shoulders" => MuscleGroup::Shoulders,
            "biceps" => MuscleGroup::Biceps,
            "triceps" => MuscleGroup::Triceps,
            "forearms" => MuscleGroup::Forearms,
            "core" => MuscleGroup::Core,
            _ => MuscleGroup::FullBody,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Forearms => "Forearms",
            MuscleGroup::Core => "Core",
            MuscleGroup::FullBody => "Full Body",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub muscle_group: MuscleGroup,
    pub target_sets: i64,
    pub target_reps: i64,
}

impl FromSqliteRow for Exercise {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let muscle_group: String = row.get("muscle_group")?;
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            muscle_group: MuscleGroup::parse(&muscle_group),
            target_sets: row.get("target_sets")?,
            target_reps: row.get("target_reps")?,
        })
    }
}
