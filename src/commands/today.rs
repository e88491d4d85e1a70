use chrono::{Local, NaiveDate};

use crate::cli::TodayArgs;
use crate::core::{recommend_next_weight, resolve_workout_for_date};
use crate::error::Result;
use crate::repositories::{SetEntryRepository, SplitRepository};

pub struct TodayState {
    pub split_repo: SplitRepository,
    pub set_entry_repo: SetEntryRepository,
}

pub async fn run(state: &TodayState, args: TodayArgs) -> Result<()> {
    let date: NaiveDate = args.date.unwrap_or_else(|| Local::now().date_naive());

    let Some(split) = state.split_repo.find_active().await? else {
        println!("No active split. Run `overload onboard` or `overload split activate` first.");
        return Ok(());
    };

    let days = state.split_repo.find_days(&split.id).await?;
    let resolved = resolve_workout_for_date(&split, &days, date);

    let Some(day) = resolved.day else {
        println!("{date}: rest day. Nothing scheduled.");
        return Ok(());
    };

    println!("{date}: {} ({})", day.title, split.name);

    let exercises = state.split_repo.find_day_exercises(&day.id).await?;
    if exercises.is_empty() {
        println!("  No exercises on this day yet.");
        return Ok(());
    }

    for exercise in &exercises {
        let prior = state
            .set_entry_repo
            .find_by_exercise_before(&exercise.id, date)
            .await?;

        print!(
            "  {} [{}] {}x{}",
            exercise.name,
            exercise.muscle_group.display_name(),
            exercise.target_sets,
            exercise.target_reps
        );

        match recommend_next_weight(exercise, &prior, date) {
            Some(rec) => println!(
                " — last {:.1} kg on {} ({} days ago), try {:.1} kg",
                rec.last_weight,
                rec.last_session_date,
                rec.days_since_last_session,
                rec.recommended_weight
            ),
            None => println!(" — no qualifying session yet"),
        }
    }

    Ok(())
}
