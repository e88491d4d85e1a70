//! CLI command implementations. These are thin display shells: each command
//! fetches records through the repositories, calls into `core`, and prints
//! the result. No domain logic lives here.

pub mod exercises;
pub mod log;
pub mod onboard;
pub mod split;
pub mod stats;
pub mod today;
pub mod weight;
