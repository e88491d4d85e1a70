mod common;

use chrono::NaiveDate;

use overload::core::{
    compute_daily_sessions, compute_stats, recommend_next_weight, resolve_workout_for_date,
};
use overload::models::{MuscleGroup, TimeRange, WorkoutSplit};
use overload::repositories::{ExerciseRepository, SetEntryRepository, SplitRepository};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[tokio::test]
async fn test_log_then_recommend_progression() {
    let pool = common::setup_test_db();
    let exercise_repo = ExerciseRepository::new(pool.clone());
    let set_entry_repo = SetEntryRepository::new(pool);

    let bench = exercise_repo
        .create("Bench Press", MuscleGroup::Chest, 2, 5)
        .await
        .unwrap();

    // Two complete sessions five days apart.
    set_entry_repo
        .replace_day_entries(&bench.id, d(2025, 6, 25), &[(100.0, 5), (95.0, 5)])
        .await
        .unwrap();
    set_entry_repo
        .replace_day_entries(&bench.id, d(2025, 6, 30), &[(100.0, 5), (105.0, 5)])
        .await
        .unwrap();

    let as_of = d(2025, 7, 1);
    let prior = set_entry_repo
        .find_by_exercise_before(&bench.id, as_of)
        .await
        .unwrap();

    let rec = recommend_next_weight(&bench, &prior, as_of).unwrap();
    assert_eq!(rec.last_weight, 105.0);
    assert_eq!(rec.recommended_weight, 107.5);
    assert_eq!(rec.last_session_date, d(2025, 6, 30));
    assert_eq!(rec.days_since_last_session, 1);
}

#[tokio::test]
async fn test_relogging_a_day_replaces_it_for_progression() {
    let pool = common::setup_test_db();
    let exercise_repo = ExerciseRepository::new(pool.clone());
    let set_entry_repo = SetEntryRepository::new(pool);

    let squat = exercise_repo
        .create("Back Squat", MuscleGroup::Legs, 2, 5)
        .await
        .unwrap();

    set_entry_repo
        .replace_day_entries(&squat.id, d(2025, 6, 30), &[(140.0, 5), (140.0, 5)])
        .await
        .unwrap();
    // Correct the log: the actual top set was 150.
    set_entry_repo
        .replace_day_entries(&squat.id, d(2025, 6, 30), &[(150.0, 5), (140.0, 5)])
        .await
        .unwrap();

    let prior = set_entry_repo
        .find_by_exercise_before(&squat.id, d(2025, 7, 1))
        .await
        .unwrap();

    let rec = recommend_next_weight(&squat, &prior, d(2025, 7, 1)).unwrap();
    assert_eq!(rec.last_weight, 150.0);
    // Legs progress in 5 kg steps.
    assert_eq!(rec.recommended_weight, 155.0);
}

#[tokio::test]
async fn test_windowed_stats_and_history_from_store() {
    let pool = common::setup_test_db();
    let exercise_repo = ExerciseRepository::new(pool.clone());
    let set_entry_repo = SetEntryRepository::new(pool);

    let row = exercise_repo
        .create("Barbell Rows", MuscleGroup::Back, 3, 8)
        .await
        .unwrap();

    // One old session outside the month window, three inside.
    set_entry_repo
        .replace_day_entries(&row.id, d(2025, 4, 1), &[(70.0, 8)])
        .await
        .unwrap();
    set_entry_repo
        .replace_day_entries(&row.id, d(2025, 6, 10), &[(80.0, 8), (80.0, 8), (80.0, 7)])
        .await
        .unwrap();
    set_entry_repo
        .replace_day_entries(&row.id, d(2025, 6, 17), &[(82.5, 8), (82.5, 6)])
        .await
        .unwrap();
    set_entry_repo
        .replace_day_entries(&row.id, d(2025, 6, 24), &[(85.0, 8), (85.0, 8), (85.0, 8)])
        .await
        .unwrap();

    let as_of = d(2025, 7, 1);
    let window_start = TimeRange::Month.start_from(as_of);
    let sets = set_entry_repo
        .find_by_exercise_since(&row.id, window_start)
        .await
        .unwrap();

    let stats = compute_stats(&sets);
    assert_eq!(stats.max_weight, 85.0);
    assert_eq!(stats.total_sets, 8);
    assert_eq!(stats.workout_day_count, 3);
    assert_eq!(stats.weight_delta, 5.0);

    let sessions = compute_daily_sessions(&sets);
    assert_eq!(sessions.len(), 3);
    assert_eq!(sessions[0].date, d(2025, 6, 24));
    assert_eq!(sessions[0].avg_reps, 8);
    assert_eq!(sessions[2].date, d(2025, 6, 10));
    // (8 + 8 + 7) / 3 = 7.67, rounds to 8
    assert_eq!(sessions[2].avg_reps, 8);
}

#[tokio::test]
async fn test_schedule_resolution_over_a_week() {
    let pool = common::setup_test_db();
    let split_repo = SplitRepository::new(pool);

    let mask = WorkoutSplit::weekday_mask_from(&[0, 2, 4]);
    let split = split_repo.create("Push / Pull", mask).await.unwrap();
    split_repo.add_day(&split.id, "Push", 0).await.unwrap();
    split_repo.add_day(&split.id, "Pull", 1).await.unwrap();
    split_repo.activate(&split.id).await.unwrap();

    let split = split_repo.find_active().await.unwrap().unwrap();
    let days = split_repo.find_days(&split.id).await.unwrap();

    // 2025-06-01 is a Sunday.
    let expectations = [
        (d(2025, 6, 1), Some("Push")), // Sunday
        (d(2025, 6, 2), None),         // Monday
        (d(2025, 6, 3), Some("Pull")), // Tuesday
        (d(2025, 6, 4), None),         // Wednesday
        (d(2025, 6, 5), Some("Push")), // Thursday, cycles back
        (d(2025, 6, 6), None),         // Friday
        (d(2025, 6, 7), None),         // Saturday
    ];

    for (date, expected) in expectations {
        let resolved = resolve_workout_for_date(&split, &days, date);
        match expected {
            Some(title) => {
                assert!(resolved.is_training_day, "{date} should be a training day");
                assert_eq!(resolved.day.unwrap().title, title, "wrong day for {date}");
            }
            None => assert!(!resolved.is_training_day, "{date} should be a rest day"),
        }
    }
}
