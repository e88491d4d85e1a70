use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use overload::cli::{Cli, Command};
use overload::commands::{exercises, log, onboard, split, stats, today, weight};
use overload::config::Config;
use overload::migrations::run_migrations;
use overload::repositories::{
    BodyWeightRepository, ExerciseRepository, ProfileRepository, SetEntryRepository,
    SplitRepository,
};
use overload::{db, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "overload=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    tracing::debug!("Connecting to database: {}", config.database_url);

    let pool = db::create_pool(&config.database_url)?;
    run_migrations(&pool)?;

    // Create repositories
    let exercise_repo = ExerciseRepository::new(pool.clone());
    let split_repo = SplitRepository::new(pool.clone());
    let set_entry_repo = SetEntryRepository::new(pool.clone());
    let profile_repo = ProfileRepository::new(pool.clone());
    let body_weight_repo = BodyWeightRepository::new(pool.clone());

    // Seed the bundled exercise catalog before any command reads it.
    seed::run(&exercise_repo).await?;

    match cli.command {
        Command::Onboard(args) => {
            let state = onboard::OnboardState {
                profile_repo,
                split_repo,
                exercise_repo,
            };
            onboard::run(&state, args).await?;
        }
        Command::Today(args) => {
            let state = today::TodayState {
                split_repo,
                set_entry_repo,
            };
            today::run(&state, args).await?;
        }
        Command::Log(args) => {
            let state = log::LogState {
                exercise_repo,
                set_entry_repo,
            };
            log::run(&state, args).await?;
        }
        Command::Stats(args) => {
            let state = stats::StatsState {
                exercise_repo,
                set_entry_repo,
            };
            stats::run_stats(&state, args).await?;
        }
        Command::History(args) => {
            let state = stats::StatsState {
                exercise_repo,
                set_entry_repo,
            };
            stats::run_history(&state, args).await?;
        }
        Command::Weight { command } => {
            let state = weight::WeightState {
                body_weight_repo,
                profile_repo,
            };
            weight::run(&state, command).await?;
        }
        Command::Exercises { command } => {
            let state = exercises::ExercisesState { exercise_repo };
            exercises::run(&state, command).await?;
        }
        Command::Split { command } => {
            let state = split::SplitState { split_repo };
            split::run(&state, command).await?;
        }
    }

    Ok(())
}
