pub mod body_weight;
pub mod exercise;
pub mod from_row;
pub mod profile;
pub mod set_entry;
pub mod split;
pub mod time_range;

pub use body_weight::BodyWeightRecord;
pub use exercise::{Exercise, MuscleGroup};
pub use from_row::FromSqliteRow;
pub use profile::{ExperienceLevel, Gender, GoalType, MassUnit, UserProfile};
pub use set_entry::SetEntry;
pub use split::{SplitDay, WorkoutSplit};
pub use time_range::TimeRange;
