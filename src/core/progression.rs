use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Exercise, MuscleGroup, SetEntry};

/// Weight increments for linear progression. Lower-body compound lifts
/// progress in larger steps than upper-body and isolation lifts.
const LOWER_BODY_INCREMENT: f64 = 5.0;
const UPPER_BODY_INCREMENT: f64 = 2.5;

/// Suggested starting weight for the next session of an exercise, derived
/// from the most recent qualifying session.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub last_weight: f64,
    pub recommended_weight: f64,
    pub last_session_date: NaiveDate,
    pub days_since_last_session: i64,
}

/// Computes a recommended weight for `exercise` as of `as_of`.
///
/// Prior sets are grouped by calendar day and scanned most-recent-first. A
/// day qualifies when it holds at least `target_sets` entries; an incomplete
/// session is skipped as not representative. The first qualifying day whose
/// max weight is positive wins. Whether those sets hit target reps is not
/// considered.
///
/// Returns `None` when no qualifying session exists; the caller falls back
/// to last-used weight or zero.
pub fn recommend_next_weight(
    exercise: &Exercise,
    prior_sets: &[SetEntry],
    as_of: NaiveDate,
) -> Option<Recommendation> {
    let mut by_day: BTreeMap<NaiveDate, Vec<&SetEntry>> = BTreeMap::new();
    for set in prior_sets {
        if set.exercise_id != exercise.id || set.day() >= as_of {
            continue;
        }
        by_day.entry(set.day()).or_default().push(set);
    }

    for (&day, day_sets) in by_day.iter().rev() {
        if (day_sets.len() as i64) < exercise.target_sets {
            continue;
        }

        let max_weight = day_sets.iter().map(|s| s.weight).fold(0.0, f64::max);
        if max_weight <= 0.0 {
            continue;
        }

        let increment = if exercise.muscle_group == MuscleGroup::Legs {
            LOWER_BODY_INCREMENT
        } else {
            UPPER_BODY_INCREMENT
        };

        return Some(Recommendation {
            last_weight: max_weight,
            recommended_weight: max_weight + increment,
            last_session_date: day,
            days_since_last_session: (as_of - day).num_days(),
        });
    }

    None
}
