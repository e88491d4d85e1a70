use crate::cli::ExercisesCommand;
use crate::error::{AppError, Result};
use crate::models::MuscleGroup;
use crate::repositories::ExerciseRepository;

pub struct ExercisesState {
    pub exercise_repo: ExerciseRepository,
}

pub async fn run(state: &ExercisesState, command: ExercisesCommand) -> Result<()> {
    match command {
        ExercisesCommand::List { muscle } => list(state, muscle).await,
        ExercisesCommand::Add {
            name,
            muscle,
            sets,
            reps,
        } => add(state, name, muscle, sets, reps).await,
        ExercisesCommand::SetTargets { name, sets, reps } => {
            set_targets(state, name, sets, reps).await
        }
    }
}

async fn list(state: &ExercisesState, muscle: Option<MuscleGroup>) -> Result<()> {
    let exercises = match muscle {
        Some(group) => state.exercise_repo.find_by_muscle_group(group).await?,
        None => state.exercise_repo.find_all().await?,
    };

    if exercises.is_empty() {
        println!("No exercises found.");
        return Ok(());
    }

    for exercise in exercises {
        println!(
            "{:<35} {:<10} {}x{}",
            exercise.name,
            exercise.muscle_group.display_name(),
            exercise.target_sets,
            exercise.target_reps
        );
    }

    Ok(())
}

async fn add(
    state: &ExercisesState,
    name: String,
    muscle: MuscleGroup,
    sets: i64,
    reps: i64,
) -> Result<()> {
    let exercise = state.exercise_repo.create(&name, muscle, sets, reps).await?;
    println!(
        "Added {} [{}] {}x{}.",
        exercise.name,
        exercise.muscle_group.display_name(),
        exercise.target_sets,
        exercise.target_reps
    );
    Ok(())
}

async fn set_targets(state: &ExercisesState, name: String, sets: i64, reps: i64) -> Result<()> {
    let exercise = state
        .exercise_repo
        .find_by_name(&name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("exercise '{name}'")))?;

    state
        .exercise_repo
        .update_targets(&exercise.id, sets, reps)
        .await?;

    println!("{} now targets {}x{}.", exercise.name, sets, reps);
    Ok(())
}
