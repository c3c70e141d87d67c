// Common test utilities shared across test files

use sqlx::SqlitePool;
use std::path::{Path, PathBuf};

use halos_seed::config::SeedConfig;
use halos_seed::{db, template};

/// Path to the schema template shipped at the repository root.
#[allow(dead_code)]
pub fn template_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("schema-template.sql")
}

/// Load the shipped schema template through the real loader.
#[allow(dead_code)]
pub fn load_template() -> String {
    template::load_schema_template(&template_path()).expect("Failed to load schema template")
}

/// Set up an in-memory SQLite database for testing
#[allow(dead_code)]
pub async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create in-memory database");

    // Enable foreign keys
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    pool
}

/// Seed an in-memory database with the default configuration.
/// Returns the pool and the bearer credential the seeder issued.
#[allow(dead_code)]
pub async fn seed_default() -> (SqlitePool, String) {
    let pool = setup_test_db().await;
    let schema_sql = load_template();

    let api_key = db::seed::seed_database(&pool, &schema_sql, &SeedConfig::default())
        .await
        .expect("Failed to seed database");

    (pool, api_key)
}
