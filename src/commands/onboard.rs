use crate::cli::{parse_weekdays, OnboardArgs};
use crate::error::{AppError, Result};
use crate::models::WorkoutSplit;
use crate::repositories::{CreateProfile, ExerciseRepository, ProfileRepository, SplitRepository};
use crate::templates;

/// Exercises pre-filled into each new split day.
const EXERCISES_PER_GROUP: usize = 2;
const MAX_EXERCISES_PER_DAY: usize = 6;

pub struct OnboardState {
    pub profile_repo: ProfileRepository,
    pub split_repo: SplitRepository,
    pub exercise_repo: ExerciseRepository,
}

pub async fn run(state: &OnboardState, args: OnboardArgs) -> Result<()> {
    let template = templates::find(&args.template).ok_or_else(|| {
        let names: Vec<_> = templates::CATALOG.iter().map(|t| t.name).collect();
        AppError::NotFound(format!(
            "unknown template '{}'; available: {}",
            args.template,
            names.join(", ")
        ))
    })?;

    let weekdays = match &args.weekdays {
        Some(spec) => {
            let parsed = parse_weekdays(spec)?;
            if parsed.is_empty() {
                template.default_weekdays.to_vec()
            } else {
                parsed
            }
        }
        None => template.default_weekdays.to_vec(),
    };

    let profile = state
        .profile_repo
        .create(CreateProfile {
            display_name: args.name,
            unit: args.unit,
            height_cm: args.height_cm,
            current_weight: args.weight,
            goal: args.goal,
            experience: args.experience,
            gender: args.gender,
        })
        .await?;

    let mask = WorkoutSplit::weekday_mask_from(&weekdays);
    let split = state.split_repo.create(template.name, mask).await?;

    for (order, title) in template.day_titles.iter().enumerate() {
        let day = state
            .split_repo
            .add_day(&split.id, title, order as i64)
            .await?;

        let mut position: i64 = 0;
        'fill: for group in templates::recommended_muscle_groups(title) {
            let candidates = state.exercise_repo.find_by_muscle_group(group).await?;
            for exercise in candidates.iter().take(EXERCISES_PER_GROUP) {
                state
                    .split_repo
                    .add_exercise_to_day(&day.id, &exercise.id, position)
                    .await?;
                position += 1;
                if position as usize >= MAX_EXERCISES_PER_DAY {
                    break 'fill;
                }
            }
        }
    }

    state.split_repo.activate(&split.id).await?;

    tracing::info!(split = %split.name, "Onboarding complete");
    println!("Welcome, {}!", profile.display_name);
    println!(
        "Created split '{}' with {} days, training on weekdays {:?} (0=Sun..6=Sat).",
        split.name,
        template.day_titles.len(),
        weekdays
    );
    println!("Run `overload today` to see your first workout.");

    Ok(())
}
