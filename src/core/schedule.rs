use chrono::{Datelike, NaiveDate};

use crate::models::{SplitDay, WorkoutSplit};

/// Outcome of resolving a calendar date against a split. A rest day is a
/// normal outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDay<'a> {
    pub is_training_day: bool,
    pub day: Option<&'a SplitDay>,
}

impl ResolvedDay<'_> {
    fn rest() -> Self {
        ResolvedDay {
            is_training_day: false,
            day: None,
        }
    }
}

/// Maps a calendar date onto the split's day-template for that weekday.
///
/// Weekdays use the 0=Sunday..6=Saturday convention. Templates are assigned
/// round-robin: the date's position within the sorted training weekdays,
/// modulo the number of templates ordered by `day_order`. With more training
/// weekdays than templates, templates repeat in order from the first.
pub fn resolve_workout_for_date<'a>(
    split: &WorkoutSplit,
    days: &'a [SplitDay],
    date: NaiveDate,
) -> ResolvedDay<'a> {
    if days.is_empty() {
        return ResolvedDay::rest();
    }

    let weekday = date.weekday().num_days_from_sunday() as u8;
    let weekdays = split.training_weekdays();
    let Some(position) = weekdays.iter().position(|&d| d == weekday) else {
        return ResolvedDay::rest();
    };

    let mut ordered: Vec<&SplitDay> = days.iter().collect();
    ordered.sort_by_key(|d| d.day_order);

    ResolvedDay {
        is_training_day: true,
        day: Some(ordered[position % ordered.len()]),
    }
}
