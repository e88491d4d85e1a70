//! One-time exercise catalog seeding.
//!
//! A bundled JSON catalog of exercise names grouped by muscle is inserted on
//! first launch, before any command runs. An installation that already has
//! exercises is left untouched.

use serde::Deserialize;

use crate::error::Result;
use crate::models::MuscleGroup;
use crate::repositories::ExerciseRepository;

const CATALOG_JSON: &str = include_str!("../data/exercises.json");

const DEFAULT_TARGET_SETS: i64 = 3;
const DEFAULT_TARGET_REPS: i64 = 10;

#[derive(Debug, Deserialize)]
struct SeedExercise {
    name: String,
    muscle: String,
}

/// Parsed bundled catalog.
pub fn catalog() -> Vec<(String, MuscleGroup)> {
    let items: Vec<SeedExercise> =
        serde_json::from_str(CATALOG_JSON).expect("bundled exercise catalog is valid JSON");
    items
        .into_iter()
        .map(|item| {
            let muscle = MuscleGroup::parse(&item.muscle);
            (item.name, muscle)
        })
        .collect()
}

/// Seeds the exercise table from the bundled catalog if it is empty.
/// Returns the number of exercises inserted.
pub async fn run(exercise_repo: &ExerciseRepository) -> Result<usize> {
    if exercise_repo.count().await? > 0 {
        tracing::debug!("Exercise catalog already seeded, skipping");
        return Ok(0);
    }

    let catalog = catalog();
    let total = catalog.len();
    for (name, muscle) in catalog {
        exercise_repo
            .create(&name, muscle, DEFAULT_TARGET_SETS, DEFAULT_TARGET_REPS)
            .await?;
    }

    tracing::info!("Seeded {} exercises from bundled catalog", total);
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;
    use crate::migrations::run_migrations_for_tests;

    #[test]
    fn test_catalog_parses_and_covers_every_muscle_group() {
        let catalog = catalog();
        assert!(!catalog.is_empty());

        for group in MuscleGroup::ALL {
            assert!(
                catalog.iter().any(|(_, muscle)| muscle == group),
                "no seed exercises for {}",
                group.as_str()
            );
        }
    }

    #[tokio::test]
    async fn test_seed_runs_once() {
        let pool = create_memory_pool().unwrap();
        run_migrations_for_tests(&pool).unwrap();
        let repo = ExerciseRepository::new(pool);

        let inserted = run(&repo).await.unwrap();
        assert!(inserted > 0);
        assert_eq!(repo.count().await.unwrap(), inserted as i64);

        // Second run is a no-op.
        assert_eq!(run(&repo).await.unwrap(), 0);
        assert_eq!(repo.count().await.unwrap(), inserted as i64);
    }
}
