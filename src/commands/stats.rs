use chrono::{Local, NaiveDate};

use crate::cli::{HistoryArgs, StatsArgs};
use crate::core::{compute_daily_sessions, compute_stats, progress_points, recommend_next_weight};
use crate::error::{AppError, Result};
use crate::models::Exercise;
use crate::repositories::{ExerciseRepository, SetEntryRepository};

pub struct StatsState {
    pub exercise_repo: ExerciseRepository,
    pub set_entry_repo: SetEntryRepository,
}

async fn lookup_exercise(state: &StatsState, name: &str) -> Result<Exercise> {
    state
        .exercise_repo
        .find_by_name(name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("exercise '{name}'")))
}

pub async fn run_stats(state: &StatsState, args: StatsArgs) -> Result<()> {
    let as_of: NaiveDate = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    let exercise = lookup_exercise(state, &args.exercise).await?;

    let window_start = args.range.start_from(as_of);
    let sets = state
        .set_entry_repo
        .find_by_exercise_since(&exercise.id, window_start)
        .await?;

    let stats = compute_stats(&sets);

    println!(
        "{} — last {} (since {window_start})",
        exercise.name,
        args.range.display_name()
    );
    println!("  max weight:   {:.1} kg", stats.max_weight);
    println!("  total sets:   {}", stats.total_sets);
    println!("  workout days: {}", stats.workout_day_count);
    println!("  weight delta: {:+.1} kg", stats.weight_delta);

    let points = progress_points(&sets);
    if !points.is_empty() {
        println!("  trend:");
        for point in points {
            println!("    {}  {:.1} kg", point.date, point.max_weight);
        }
    }

    let prior = state
        .set_entry_repo
        .find_by_exercise_before(&exercise.id, as_of)
        .await?;
    match recommend_next_weight(&exercise, &prior, as_of) {
        Some(rec) => println!(
            "  next session: try {:.1} kg (last {:.1} kg, {} days ago)",
            rec.recommended_weight, rec.last_weight, rec.days_since_last_session
        ),
        None => println!("  next session: no recommendation yet"),
    }

    Ok(())
}

pub async fn run_history(state: &StatsState, args: HistoryArgs) -> Result<()> {
    let as_of: NaiveDate = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    let exercise = lookup_exercise(state, &args.exercise).await?;

    let window_start = args.range.start_from(as_of);
    let sets = state
        .set_entry_repo
        .find_by_exercise_since(&exercise.id, window_start)
        .await?;

    let sessions = compute_daily_sessions(&sets);
    if sessions.is_empty() {
        println!(
            "No sessions for {} in the last {}.",
            exercise.name,
            args.range.display_name()
        );
        return Ok(());
    }

    println!("{} — {} sessions:", exercise.name, sessions.len());
    for session in sessions {
        println!(
            "  {}  {:>6.1} kg  {} sets  ~{} reps",
            session.date, session.max_weight, session.total_sets, session.avg_reps
        );
    }

    Ok(())
}
