use crate::cli::{parse_weekdays, SplitCommand};
use crate::error::{AppError, Result};
use crate::models::WorkoutSplit;
use crate::repositories::SplitRepository;

const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub struct SplitState {
    pub split_repo: SplitRepository,
}

pub async fn run(state: &SplitState, command: SplitCommand) -> Result<()> {
    match command {
        SplitCommand::List => list(state).await,
        SplitCommand::Show { name } => show(state, name).await,
        SplitCommand::Activate { name } => activate(state, name).await,
        SplitCommand::SetDays { name, weekdays } => set_days(state, name, weekdays).await,
        SplitCommand::Delete { name } => delete(state, name).await,
    }
}

fn weekday_summary(split: &WorkoutSplit) -> String {
    let days: Vec<_> = split
        .training_weekdays()
        .iter()
        .map(|&d| WEEKDAY_NAMES[d as usize])
        .collect();
    if days.is_empty() {
        "no training days".to_string()
    } else {
        days.join("/")
    }
}

async fn list(state: &SplitState) -> Result<()> {
    let splits = state.split_repo.find_all().await?;
    if splits.is_empty() {
        println!("No splits yet. Run `overload onboard` to create one.");
        return Ok(());
    }

    for split in splits {
        let marker = if split.is_active { "*" } else { " " };
        println!("{marker} {:<25} {}", split.name, weekday_summary(&split));
    }

    Ok(())
}

async fn show(state: &SplitState, name: Option<String>) -> Result<()> {
    let split = match name {
        Some(name) => state
            .split_repo
            .find_by_name(&name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("split '{name}'")))?,
        None => state
            .split_repo
            .find_active()
            .await?
            .ok_or_else(|| AppError::NotFound("no active split".to_string()))?,
    };

    println!(
        "{}{} — {}",
        split.name,
        if split.is_active { " (active)" } else { "" },
        weekday_summary(&split)
    );

    for day in state.split_repo.find_days(&split.id).await? {
        println!("  {}. {}", day.day_order + 1, day.title);
        for exercise in state.split_repo.find_day_exercises(&day.id).await? {
            println!(
                "     {} [{}] {}x{}",
                exercise.name,
                exercise.muscle_group.display_name(),
                exercise.target_sets,
                exercise.target_reps
            );
        }
    }

    Ok(())
}

async fn activate(state: &SplitState, name: String) -> Result<()> {
    let split = state
        .split_repo
        .find_by_name(&name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("split '{name}'")))?;

    state.split_repo.activate(&split.id).await?;
    println!("'{}' is now the active split.", split.name);
    Ok(())
}

async fn set_days(state: &SplitState, name: String, weekdays: String) -> Result<()> {
    let split = state
        .split_repo
        .find_by_name(&name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("split '{name}'")))?;

    let parsed = parse_weekdays(&weekdays)?;
    let mask = WorkoutSplit::weekday_mask_from(&parsed);
    state.split_repo.set_training_weekdays(&split.id, mask).await?;

    let updated = WorkoutSplit {
        weekday_mask: mask,
        ..split
    };
    println!(
        "'{}' now trains on {}.",
        updated.name,
        weekday_summary(&updated)
    );
    Ok(())
}

async fn delete(state: &SplitState, name: String) -> Result<()> {
    let split = state
        .split_repo
        .find_by_name(&name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("split '{name}'")))?;

    state.split_repo.delete(&split.id).await?;
    println!("Deleted '{}'.", split.name);
    Ok(())
}
