// End-to-end tests for the full run pipeline: template in, database file and
// credential file out.

mod common;

use sqlx::sqlite::SqlitePool;
use std::fs;
use std::path::Path;

use halos_seed::config::{SeedConfig, BOOTSTRAP_API_KEY_TOKEN};
use halos_seed::{db, run, RunPaths};

fn paths_in(dir: &Path) -> RunPaths {
    RunPaths {
        template: common::template_path(),
        output_db: dir.join("db-seed.sqlite3"),
        output_key: dir.join("bootstrap-api-key"),
    }
}

async fn open_db(path: &Path) -> SqlitePool {
    SqlitePool::connect(&format!("sqlite:{}", path.display()))
        .await
        .expect("Failed to open seeded database")
}

#[tokio::test]
async fn test_run_produces_database_and_key_file() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths_in(dir.path());

    run(&paths, &SeedConfig::default()).await.unwrap();

    assert!(paths.output_db.exists());
    let key_file = fs::read_to_string(&paths.output_key).unwrap();
    assert_eq!(
        key_file,
        "halos-bootstrap.halos-bootstrap-rotate-me-on-first-boot-abc123\n"
    );

    let pool = open_db(&paths.output_db).await;
    let users = db::get_users(&pool).await.unwrap();
    let ids: Vec<&str> = users.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["admin", "halos-sync"]);

    // Baseline rows owned by the template survive alongside the seeded ones.
    let groups: Vec<String> = sqlx::query_scalar("SELECT name FROM `group` ORDER BY position")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(groups, vec!["everyone".to_string(), "admins".to_string()]);

    pool.close().await;
}

#[tokio::test]
async fn test_raw_token_never_reaches_database_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths_in(dir.path());

    run(&paths, &SeedConfig::default()).await.unwrap();

    let bytes = fs::read(&paths.output_db).unwrap();
    let token = BOOTSTRAP_API_KEY_TOKEN.as_bytes();
    assert!(
        !bytes.windows(token.len()).any(|w| w == token),
        "raw token leaked into the database file"
    );
}

#[tokio::test]
async fn test_rerunning_reproduces_identical_rows() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths_in(dir.path());
    let config = SeedConfig::default();

    run(&paths, &config).await.unwrap();
    let first_key_file = fs::read_to_string(&paths.output_key).unwrap();

    let pool = open_db(&paths.output_db).await;
    let first_users = db::get_users(&pool).await.unwrap();
    let first_onboarding = db::get_onboarding_rows(&pool).await.unwrap();
    let first_members = db::get_group_member_ids(&pool, &config.admins_group_id)
        .await
        .unwrap();
    let first_analytics = db::get_server_setting(&pool, "analytics").await.unwrap();
    let first_api_key = db::get_api_key(&pool, &config.api_key_id)
        .await
        .unwrap()
        .unwrap();
    pool.close().await;

    // Destroy-and-recreate: the second run replaces the database wholesale.
    run(&paths, &config).await.unwrap();

    let pool = open_db(&paths.output_db).await;
    let second_users = db::get_users(&pool).await.unwrap();
    let second_onboarding = db::get_onboarding_rows(&pool).await.unwrap();
    let second_members = db::get_group_member_ids(&pool, &config.admins_group_id)
        .await
        .unwrap();
    let second_analytics = db::get_server_setting(&pool, "analytics").await.unwrap();
    let second_api_key = db::get_api_key(&pool, &config.api_key_id)
        .await
        .unwrap()
        .unwrap();
    pool.close().await;

    assert_eq!(first_users, second_users);
    assert_eq!(first_onboarding, second_onboarding);
    assert_eq!(first_members, second_members);
    assert_eq!(first_analytics, second_analytics);

    // The salt is regenerated per run, so only the stable fields match.
    assert_eq!(first_api_key.id, second_api_key.id);
    assert_eq!(first_api_key.user_id, second_api_key.user_id);

    assert_eq!(first_key_file, fs::read_to_string(&paths.output_key).unwrap());
}

#[tokio::test]
async fn test_missing_template_creates_no_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let mut paths = paths_in(dir.path());
    paths.template = dir.path().join("nope.sql");

    let err = run(&paths, &SeedConfig::default()).await.unwrap_err();
    assert!(err.to_string().contains("Schema template not found"));

    assert!(!paths.output_db.exists());
    assert!(!paths.output_key.exists());
}

#[tokio::test]
async fn test_existing_outputs_are_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths_in(dir.path());

    fs::write(&paths.output_db, b"not a database").unwrap();
    fs::write(&paths.output_key, b"stale key material\n").unwrap();

    run(&paths, &SeedConfig::default()).await.unwrap();

    let key_file = fs::read_to_string(&paths.output_key).unwrap();
    assert_eq!(
        key_file,
        "halos-bootstrap.halos-bootstrap-rotate-me-on-first-boot-abc123\n"
    );

    let pool = open_db(&paths.output_db).await;
    let users = db::get_users(&pool).await.unwrap();
    assert_eq!(users.len(), 2);
    pool.close().await;
}

#[tokio::test]
async fn test_output_directories_are_created() {
    let dir = tempfile::tempdir().unwrap();
    let paths = RunPaths {
        template: common::template_path(),
        output_db: dir.path().join("state/db/db-seed.sqlite3"),
        output_key: dir.path().join("secrets/bootstrap-api-key"),
    };

    run(&paths, &SeedConfig::default()).await.unwrap();

    assert!(paths.output_db.exists());
    assert!(paths.output_key.exists());
}
