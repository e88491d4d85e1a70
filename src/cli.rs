use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::error::{AppError, Result};
use crate::models::{ExperienceLevel, Gender, GoalType, MassUnit, MuscleGroup, TimeRange};

#[derive(Parser)]
#[command(name = "overload", version, about = "Progressive-overload workout tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create your profile and an initial split from a template
    Onboard(OnboardArgs),
    /// Show the workout scheduled for a date
    Today(TodayArgs),
    /// Log a day's sets for an exercise, replacing that day's entries
    Log(LogArgs),
    /// Windowed statistics and the next-weight recommendation for an exercise
    Stats(StatsArgs),
    /// Per-day session history for an exercise
    History(HistoryArgs),
    /// Track body weight
    Weight {
        #[command(subcommand)]
        command: WeightCommand,
    },
    /// Browse or extend the exercise catalog
    Exercises {
        #[command(subcommand)]
        command: ExercisesCommand,
    },
    /// Manage workout splits
    Split {
        #[command(subcommand)]
        command: SplitCommand,
    },
}

#[derive(Args)]
pub struct OnboardArgs {
    /// Display name for the profile
    #[arg(long)]
    pub name: String,
    #[arg(long, value_enum, default_value_t = MassUnit::Kg)]
    pub unit: MassUnit,
    #[arg(long)]
    pub height_cm: Option<f64>,
    /// Current body weight in kg
    #[arg(long)]
    pub weight: Option<f64>,
    #[arg(long, value_enum, default_value_t = GoalType::BuildMuscle)]
    pub goal: GoalType,
    #[arg(long, value_enum, default_value_t = ExperienceLevel::Novice)]
    pub experience: ExperienceLevel,
    #[arg(long, value_enum, default_value_t = Gender::Undisclosed)]
    pub gender: Gender,
    /// Split template name, e.g. "Push / Pull / Legs"
    #[arg(long, default_value = "Push / Pull / Legs")]
    pub template: String,
    /// Training weekdays as comma-separated 0=Sun..6=Sat indices, e.g. 1,3,5.
    /// Defaults to the template's usual schedule.
    #[arg(long)]
    pub weekdays: Option<String>,
}

#[derive(Args)]
pub struct TodayArgs {
    /// Date to resolve, defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Args)]
pub struct LogArgs {
    /// Exercise name
    #[arg(long)]
    pub exercise: String,
    /// Date the sets belong to, defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// A set as WEIGHTxREPS (kg), e.g. 100x5; repeat per set.
    /// Passing no sets clears the day.
    #[arg(long = "set", value_name = "WEIGHTxREPS")]
    pub sets: Vec<String>,
}

#[derive(Args)]
pub struct StatsArgs {
    #[arg(long)]
    pub exercise: String,
    #[arg(long, value_enum, default_value_t = TimeRange::Month)]
    pub range: TimeRange,
    /// Reference date for the window, defaults to today
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

#[derive(Args)]
pub struct HistoryArgs {
    #[arg(long)]
    pub exercise: String,
    #[arg(long, value_enum, default_value_t = TimeRange::Month)]
    pub range: TimeRange,
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

#[derive(Subcommand)]
pub enum WeightCommand {
    /// Record a body-weight measurement (kg); same-day records are replaced
    Log {
        weight: f64,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show the body-weight trend over a window
    Show {
        #[arg(long, value_enum, default_value_t = TimeRange::Month)]
        range: TimeRange,
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
}

#[derive(Subcommand)]
pub enum ExercisesCommand {
    /// List exercises, optionally filtered by muscle group
    List {
        #[arg(long, value_enum)]
        muscle: Option<MuscleGroup>,
    },
    /// Add a custom exercise
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, value_enum)]
        muscle: MuscleGroup,
        #[arg(long, default_value_t = 3)]
        sets: i64,
        #[arg(long, default_value_t = 10)]
        reps: i64,
    },
    /// Change an exercise's target sets and reps
    SetTargets {
        #[arg(long)]
        name: String,
        #[arg(long)]
        sets: i64,
        #[arg(long)]
        reps: i64,
    },
}

#[derive(Subcommand)]
pub enum SplitCommand {
    /// List all splits
    List,
    /// Show a split's days and exercises (the active split by default)
    Show {
        #[arg(long)]
        name: Option<String>,
    },
    /// Make a split the active one
    Activate {
        #[arg(long)]
        name: String,
    },
    /// Change a split's training weekdays
    SetDays {
        #[arg(long)]
        name: String,
        /// Comma-separated 0=Sun..6=Sat indices, e.g. 1,3,5
        #[arg(long)]
        weekdays: String,
    },
    /// Delete a split and its days; logged sets are kept
    Delete {
        #[arg(long)]
        name: String,
    },
}

/// Parses a `WEIGHTxREPS` set spec such as `100x5` or `62.5x8`.
pub fn parse_set_spec(spec: &str) -> Result<(f64, i64)> {
    let (weight, reps) = spec
        .split_once(['x', 'X'])
        .ok_or_else(|| AppError::Validation(format!("invalid set '{spec}', expected WEIGHTxREPS")))?;

    let weight: f64 = weight
        .trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("invalid weight in set '{spec}'")))?;
    let reps: i64 = reps
        .trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("invalid reps in set '{spec}'")))?;

    if weight < 0.0 {
        return Err(AppError::Validation("weight must not be negative".to_string()));
    }
    if reps < 1 {
        return Err(AppError::Validation("reps must be at least 1".to_string()));
    }

    Ok((weight, reps))
}

/// Parses a comma-separated weekday list like `1,3,5` (0=Sunday..6=Saturday).
pub fn parse_weekdays(spec: &str) -> Result<Vec<u8>> {
    let mut weekdays = Vec::new();
    for part in spec.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let day: u8 = part
            .parse()
            .map_err(|_| AppError::Validation(format!("invalid weekday '{part}'")))?;
        if day > 6 {
            return Err(AppError::Validation(format!(
                "weekday {day} out of range, use 0=Sunday..6=Saturday"
            )));
        }
        if !weekdays.contains(&day) {
            weekdays.push(day);
        }
    }
    weekdays.sort_unstable();
    Ok(weekdays)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set_spec() {
        assert_eq!(parse_set_spec("100x5").unwrap(), (100.0, 5));
        assert_eq!(parse_set_spec("62.5X8").unwrap(), (62.5, 8));
        assert!(parse_set_spec("100").is_err());
        assert!(parse_set_spec("ax5").is_err());
        assert!(parse_set_spec("100x0").is_err());
        assert!(parse_set_spec("-5x5").is_err());
    }

    #[test]
    fn test_parse_weekdays() {
        assert_eq!(parse_weekdays("1,3,5").unwrap(), vec![1, 3, 5]);
        assert_eq!(parse_weekdays("5, 3, 1, 3").unwrap(), vec![1, 3, 5]);
        assert!(parse_weekdays("7").is_err());
        assert!(parse_weekdays("mon").is_err());
        assert_eq!(parse_weekdays("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
