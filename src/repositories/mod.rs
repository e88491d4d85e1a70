pub mod body_weight_repo;
pub mod exercise_repo;
pub mod profile_repo;
pub mod set_entry_repo;
pub mod split_repo;

pub use body_weight_repo::BodyWeightRepository;
pub use exercise_repo::ExerciseRepository;
pub use profile_repo::{CreateProfile, ProfileRepository};
pub use set_entry_repo::SetEntryRepository;
pub use split_repo::SplitRepository;
