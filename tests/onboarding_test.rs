mod common;

use overload::cli::OnboardArgs;
use overload::commands::onboard::{self, OnboardState};
use overload::error::AppError;
use overload::models::{ExperienceLevel, Gender, GoalType, MassUnit};
use overload::repositories::{ExerciseRepository, ProfileRepository, SplitRepository};

fn onboard_args(template: &str, weekdays: Option<&str>) -> OnboardArgs {
    OnboardArgs {
        name: "Sam".to_string(),
        unit: MassUnit::Kg,
        height_cm: Some(178.0),
        weight: Some(80.0),
        goal: GoalType::BuildMuscle,
        experience: ExperienceLevel::Novice,
        gender: Gender::Undisclosed,
        template: template.to_string(),
        weekdays: weekdays.map(|s| s.to_string()),
    }
}

fn state(pool: &overload::db::DbPool) -> OnboardState {
    OnboardState {
        profile_repo: ProfileRepository::new(pool.clone()),
        split_repo: SplitRepository::new(pool.clone()),
        exercise_repo: ExerciseRepository::new(pool.clone()),
    }
}

#[tokio::test]
async fn test_onboarding_creates_profile_and_active_split() {
    let pool = common::setup_seeded_db().await;
    let state = state(&pool);

    onboard::run(&state, onboard_args("Push / Pull / Legs", Some("1,3,5")))
        .await
        .unwrap();

    let profile = state.profile_repo.find().await.unwrap().unwrap();
    assert_eq!(profile.display_name, "Sam");
    assert!(profile.signed_in);

    let split = state.split_repo.find_active().await.unwrap().unwrap();
    assert_eq!(split.name, "Push / Pull / Legs");
    assert_eq!(split.training_weekdays(), vec![1, 3, 5]);

    let days = state.split_repo.find_days(&split.id).await.unwrap();
    let titles: Vec<_> = days.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, vec!["Push", "Pull", "Legs"]);

    // Every day is pre-filled from the catalog.
    for day in &days {
        let exercises = state.split_repo.find_day_exercises(&day.id).await.unwrap();
        assert!(!exercises.is_empty(), "day '{}' has no exercises", day.title);
        assert!(exercises.len() <= 6);
    }
}

#[tokio::test]
async fn test_onboarding_uses_template_default_weekdays() {
    let pool = common::setup_seeded_db().await;
    let state = state(&pool);

    onboard::run(&state, onboard_args("Upper / Lower", None))
        .await
        .unwrap();

    let split = state.split_repo.find_active().await.unwrap().unwrap();
    assert_eq!(split.training_weekdays(), vec![1, 4]);
}

#[tokio::test]
async fn test_onboarding_twice_is_rejected() {
    let pool = common::setup_seeded_db().await;
    let state = state(&pool);

    onboard::run(&state, onboard_args("Full-Body 3-Day", None))
        .await
        .unwrap();

    let result = onboard::run(&state, onboard_args("Full-Body 3-Day", None)).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_unknown_template_is_rejected() {
    let pool = common::setup_seeded_db().await;
    let state = state(&pool);

    let result = onboard::run(&state, onboard_args("Bro Split Deluxe", None)).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}
