use chrono::{Local, NaiveDate};

use crate::cli::WeightCommand;
use crate::core::body_weight_trend;
use crate::error::Result;
use crate::models::TimeRange;
use crate::repositories::{BodyWeightRepository, ProfileRepository};

pub struct WeightState {
    pub body_weight_repo: BodyWeightRepository,
    pub profile_repo: ProfileRepository,
}

pub async fn run(state: &WeightState, command: WeightCommand) -> Result<()> {
    match command {
        WeightCommand::Log { weight, date } => log_weight(state, weight, date).await,
        WeightCommand::Show { range, as_of } => show_trend(state, range, as_of).await,
    }
}

async fn log_weight(state: &WeightState, weight: f64, date: Option<NaiveDate>) -> Result<()> {
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let record = state.body_weight_repo.upsert_for_date(date, weight).await?;

    // Keep the profile's snapshot in sync with the latest measurement.
    if let Some(profile) = state.profile_repo.find().await? {
        state
            .profile_repo
            .update_current_weight(&profile.id, weight)
            .await?;
    }

    println!("Recorded {:.1} kg on {}.", record.weight, record.date);
    Ok(())
}

async fn show_trend(
    state: &WeightState,
    range: TimeRange,
    as_of: Option<NaiveDate>,
) -> Result<()> {
    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
    let records = state
        .body_weight_repo
        .find_since(range.start_from(as_of))
        .await?;

    let Some(trend) = body_weight_trend(&records) else {
        println!("No body-weight records in the last {}.", range.display_name());
        return Ok(());
    };

    println!("Body weight — last {}:", range.display_name());
    println!("  current: {:.1} kg", trend.current);
    println!("  change:  {:+.1} kg", trend.change);
    println!("  average: {:.1} kg", trend.average);
    for record in &records {
        println!("  {}  {:.1} kg", record.date, record.weight);
    }

    Ok(())
}
