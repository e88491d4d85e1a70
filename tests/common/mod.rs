use overload::db::{create_memory_pool, DbPool};
use overload::migrations::run_migrations_for_tests;
use overload::repositories::ExerciseRepository;

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    run_migrations_for_tests(&pool).expect("Failed to run migrations");
    pool
}

/// Fresh database with the bundled exercise catalog seeded, the state the
/// app guarantees before any command runs.
#[allow(dead_code)]
pub async fn setup_seeded_db() -> DbPool {
    let pool = setup_test_db();
    let exercise_repo = ExerciseRepository::new(pool.clone());
    overload::seed::run(&exercise_repo)
        .await
        .expect("Failed to seed exercise catalog");
    pool
}
