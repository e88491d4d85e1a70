use chrono::{Local, NaiveDate};

use crate::cli::{parse_set_spec, LogArgs};
use crate::error::{AppError, Result};
use crate::repositories::{ExerciseRepository, SetEntryRepository};

pub struct LogState {
    pub exercise_repo: ExerciseRepository,
    pub set_entry_repo: SetEntryRepository,
}

pub async fn run(state: &LogState, args: LogArgs) -> Result<()> {
    let date: NaiveDate = args.date.unwrap_or_else(|| Local::now().date_naive());

    let exercise = state
        .exercise_repo
        .find_by_name(&args.exercise)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("exercise '{}'", args.exercise)))?;

    let sets = args
        .sets
        .iter()
        .map(|spec| parse_set_spec(spec))
        .collect::<Result<Vec<_>>>()?;

    let entries = state
        .set_entry_repo
        .replace_day_entries(&exercise.id, date, &sets)
        .await?;

    if entries.is_empty() {
        println!("Cleared all sets for {} on {date}.", exercise.name);
    } else {
        println!("Logged {} sets for {} on {date}:", entries.len(), exercise.name);
        for (i, entry) in entries.iter().enumerate() {
            println!("  set {}: {:.1} kg x {}", i + 1, entry.weight, entry.reps);
        }
        if (entries.len() as i64) < exercise.target_sets {
            println!(
                "  ({} of {} target sets — this day won't count toward progression yet)",
                entries.len(),
                exercise.target_sets
            );
        }
    }

    Ok(())
}
