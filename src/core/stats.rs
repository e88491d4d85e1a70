use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{BodyWeightRecord, SetEntry};

/// Summary statistics over a time-windowed collection of sets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WindowStats {
    pub max_weight: f64,
    pub total_sets: i64,
    pub workout_day_count: i64,
    /// Max weight of the last day minus max weight of the first day, by
    /// date. A trend indicator, not a min/max range; zero with fewer than
    /// two distinct days.
    pub weight_delta: f64,
}

/// One summary row per distinct training day, for history display.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySession {
    pub date: NaiveDate,
    pub max_weight: f64,
    pub total_sets: i64,
    pub avg_reps: i64,
}

/// One chart point per day with a positive max weight.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressPoint {
    pub date: NaiveDate,
    pub max_weight: f64,
}

/// Body-weight summary over a date-ascending window.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyWeightTrend {
    pub current: f64,
    pub change: f64,
    pub average: f64,
}

fn group_by_day(sets: &[SetEntry]) -> BTreeMap<NaiveDate, Vec<&SetEntry>> {
    let mut by_day: BTreeMap<NaiveDate, Vec<&SetEntry>> = BTreeMap::new();
    for set in sets {
        by_day.entry(set.day()).or_default().push(set);
    }
    by_day
}

fn max_weight_of(sets: &[&SetEntry]) -> f64 {
    sets.iter().map(|s| s.weight).fold(0.0, f64::max)
}

pub fn compute_stats(sets: &[SetEntry]) -> WindowStats {
    let by_day = group_by_day(sets);

    let max_weight = sets.iter().map(|s| s.weight).fold(0.0, f64::max);
    let total_sets = sets.len() as i64;
    let workout_day_count = by_day.len() as i64;

    let mut weight_delta = 0.0;
    if by_day.len() >= 2 {
        // BTreeMap iterates in date order, so first/last are by date.
        let first = by_day.values().next().map(|v| max_weight_of(v)).unwrap_or(0.0);
        let last = by_day.values().next_back().map(|v| max_weight_of(v)).unwrap_or(0.0);
        weight_delta = last - first;
    }

    WindowStats {
        max_weight,
        total_sets,
        workout_day_count,
        weight_delta,
    }
}

/// One row per distinct day, most recent first. Average reps are rounded to
/// the nearest integer.
pub fn compute_daily_sessions(sets: &[SetEntry]) -> Vec<DailySession> {
    group_by_day(sets)
        .iter()
        .rev()
        .map(|(&date, day_sets)| {
            let total_reps: i64 = day_sets.iter().map(|s| s.reps).sum();
            let avg_reps = (total_reps as f64 / day_sets.len() as f64).round() as i64;
            DailySession {
                date,
                max_weight: max_weight_of(day_sets),
                total_sets: day_sets.len() as i64,
                avg_reps,
            }
        })
        .collect()
}

/// Chart series: days with no positive weight (bodyweight-only sessions)
/// are omitted rather than plotted at zero.
pub fn progress_points(sets: &[SetEntry]) -> Vec<ProgressPoint> {
    group_by_day(sets)
        .iter()
        .filter_map(|(&date, day_sets)| {
            let max_weight = max_weight_of(day_sets);
            (max_weight > 0.0).then_some(ProgressPoint { date, max_weight })
        })
        .collect()
}

pub fn body_weight_trend(records: &[BodyWeightRecord]) -> Option<BodyWeightTrend> {
    if records.is_empty() {
        return None;
    }

    let mut ordered: Vec<&BodyWeightRecord> = records.iter().collect();
    ordered.sort_by_key(|r| r.date);

    let current = ordered.last().map(|r| r.weight)?;
    let change = current - ordered.first().map(|r| r.weight)?;
    let average = ordered.iter().map(|r| r.weight).sum::<f64>() / ordered.len() as f64;

    Some(BodyWeightTrend {
        current,
        change,
        average,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn set_on(date: NaiveDate, weight: f64, reps: i64) -> SetEntry {
        SetEntry {
            id: uuid::Uuid::new_v4().to_string(),
            exercise_id: "ex1".to_string(),
            weight,
            reps,
            logged_at: Utc
                .from_utc_datetime(&date.and_hms_opt(18, 30, 0).unwrap()),
        }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_empty_window_stats_are_all_zero() {
        let stats = compute_stats(&[]);
        assert_eq!(stats, WindowStats::default());
    }

    #[test]
    fn test_single_day_has_zero_delta() {
        let sets = vec![set_on(d(2025, 7, 1), 100.0, 5), set_on(d(2025, 7, 1), 95.0, 5)];
        let stats = compute_stats(&sets);

        assert_eq!(stats.max_weight, 100.0);
        assert_eq!(stats.total_sets, 2);
        assert_eq!(stats.workout_day_count, 1);
        assert_eq!(stats.weight_delta, 0.0);
    }

    #[test]
    fn test_delta_is_first_versus_last_day_by_date() {
        // Middle day has the highest weight; delta must ignore it.
        let sets = vec![
            set_on(d(2025, 7, 1), 100.0, 5),
            set_on(d(2025, 7, 3), 120.0, 3),
            set_on(d(2025, 7, 5), 95.0, 8),
        ];
        let stats = compute_stats(&sets);

        assert_eq!(stats.max_weight, 120.0);
        assert_eq!(stats.workout_day_count, 3);
        assert_eq!(stats.weight_delta, -5.0);
    }

    #[test]
    fn test_daily_sessions_sorted_descending_with_rounded_reps() {
        let sets = vec![
            set_on(d(2025, 7, 1), 100.0, 5),
            set_on(d(2025, 7, 1), 95.0, 6),
            set_on(d(2025, 7, 3), 102.5, 5),
        ];

        let sessions = compute_daily_sessions(&sets);
        assert_eq!(sessions.len(), 2);

        assert_eq!(sessions[0].date, d(2025, 7, 3));
        assert_eq!(sessions[0].max_weight, 102.5);
        assert_eq!(sessions[0].total_sets, 1);
        assert_eq!(sessions[0].avg_reps, 5);

        assert_eq!(sessions[1].date, d(2025, 7, 1));
        assert_eq!(sessions[1].total_sets, 2);
        // (5 + 6) / 2 = 5.5, rounds to 6
        assert_eq!(sessions[1].avg_reps, 6);
    }

    #[test]
    fn test_progress_points_skip_zero_weight_days() {
        let sets = vec![
            set_on(d(2025, 7, 1), 0.0, 15),
            set_on(d(2025, 7, 2), 80.0, 8),
            set_on(d(2025, 7, 4), 82.5, 8),
        ];

        let points = progress_points(&sets);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date, d(2025, 7, 2));
        assert_eq!(points[1].date, d(2025, 7, 4));
        assert_eq!(points[1].max_weight, 82.5);
    }

    fn record(date: NaiveDate, weight: f64) -> BodyWeightRecord {
        BodyWeightRecord {
            id: uuid::Uuid::new_v4().to_string(),
            date,
            weight,
        }
    }

    #[test]
    fn test_body_weight_trend_empty_is_none() {
        assert!(body_weight_trend(&[]).is_none());
    }

    #[test]
    fn test_body_weight_trend_sorts_by_date() {
        // Out of order on purpose.
        let records = vec![
            record(d(2025, 7, 10), 81.0),
            record(d(2025, 7, 1), 84.0),
            record(d(2025, 7, 5), 82.5),
        ];

        let trend = body_weight_trend(&records).unwrap();
        assert_eq!(trend.current, 81.0);
        assert_eq!(trend.change, -3.0);
        assert!((trend.average - 82.5).abs() < 1e-9);
    }
}
