//! Pure domain logic: schedule resolution, progressive-overload
//! recommendations and windowed statistics.
//!
//! Everything in here operates on already-fetched in-memory collections and
//! an explicit reference date. No function performs I/O or reads the clock,
//! which keeps each invocation deterministic and directly testable.

pub mod progression;
pub mod schedule;
pub mod stats;

pub use progression::{recommend_next_weight, Recommendation};
pub use schedule::{resolve_workout_for_date, ResolvedDay};
pub use stats::{
    body_weight_trend, compute_daily_sessions, compute_stats, progress_points, BodyWeightTrend,
    DailySession, ProgressPoint, WindowStats,
};
