// Database module: connection setup, row models, and insert/query helpers

pub mod seed;

use anyhow::{Context, Result};
use sqlx::sqlite::SqlitePool;
use sqlx::SqliteConnection;
use std::path::Path;

use crate::auth::HashedToken;
use crate::config::UserSeed;

// Create a fresh database file and connect to it. An existing file at the
// path is deleted first: reseeding is destroy-and-recreate, never a merge
// into a populated database.
pub async fn create_database(db_path: &Path) -> Result<SqlitePool> {
    if db_path.exists() {
        std::fs::remove_file(db_path).with_context(|| {
            format!("Failed to remove existing database {}", db_path.display())
        })?;
    }
    std::fs::File::create(db_path)
        .with_context(|| format!("Failed to create database file {}", db_path.display()))?;

    let database_url = format!("sqlite:{}", db_path.display());
    let pool = SqlitePool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    // Enable foreign keys
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .context("Failed to enable foreign keys")?;

    Ok(pool)
}

// Execute the schema template script: all table definitions plus whatever
// baseline rows the template itself carries (default groups, icon
// repositories, migration bookkeeping).
pub async fn apply_schema(pool: &SqlitePool, schema_sql: &str) -> Result<()> {
    sqlx::query(schema_sql)
        .execute(pool)
        .await
        .context("Failed to apply schema template")?;

    Ok(())
}

// Row models

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub email_verified: bool,
    pub provider: String,
    pub color_scheme: String,
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ApiKey {
    pub id: String,
    pub api_key: String,
    pub salt: String,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct OnboardingState {
    pub id: String,
    pub step: String,
    pub previous_step: String,
}

// Insert the singleton row marking onboarding as already completed
pub async fn insert_onboarding(
    conn: &mut SqliteConnection,
    id: &str,
    step: &str,
    previous_step: &str,
) -> Result<()> {
    sqlx::query("INSERT INTO onboarding (id, step, previous_step) VALUES (?, ?, ?)")
        .bind(id)
        .bind(step)
        .bind(previous_step)
        .execute(&mut *conn)
        .await?;

    Ok(())
}

// Insert a user account. email_verified is always set: account linking only
// matches accounts whose email is verified.
pub async fn insert_user(
    conn: &mut SqliteConnection,
    user: &UserSeed,
    provider: &str,
    color_scheme: &str,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO user (id, name, email, email_verified, provider, color_scheme)
         VALUES (?, ?, ?, 1, ?, ?)",
    )
    .bind(&user.id)
    .bind(&user.name)
    .bind(&user.email)
    .bind(provider)
    .bind(color_scheme)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

pub async fn insert_group_member(
    conn: &mut SqliteConnection,
    group_id: &str,
    user_id: &str,
) -> Result<()> {
    sqlx::query("INSERT INTO groupMember (group_id, user_id) VALUES (?, ?)")
        .bind(group_id)
        .bind(user_id)
        .execute(&mut *conn)
        .await?;

    Ok(())
}

// Insert an API key row. Only the hash and salt are persisted; the raw token
// never reaches the database.
pub async fn insert_api_key(
    conn: &mut SqliteConnection,
    id: &str,
    token: &HashedToken,
    user_id: &str,
) -> Result<()> {
    sqlx::query("INSERT INTO apiKey (id, api_key, salt, user_id) VALUES (?, ?, ?, ?)")
        .bind(id)
        .bind(&token.hash)
        .bind(&token.salt)
        .bind(user_id)
        .execute(&mut *conn)
        .await?;

    Ok(())
}

pub async fn insert_server_setting(
    conn: &mut SqliteConnection,
    key: &str,
    value: &str,
) -> Result<()> {
    sqlx::query("INSERT INTO serverSetting (setting_key, value) VALUES (?, ?)")
        .bind(key)
        .bind(value)
        .execute(&mut *conn)
        .await?;

    Ok(())
}

// Query helpers

pub async fn get_users(pool: &SqlitePool) -> Result<Vec<User>> {
    let users = sqlx::query_as::<_, User>(
        "SELECT id, name, email, email_verified, provider, color_scheme FROM user ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}

pub async fn get_onboarding_rows(pool: &SqlitePool) -> Result<Vec<OnboardingState>> {
    let rows = sqlx::query_as::<_, OnboardingState>(
        "SELECT id, step, previous_step FROM onboarding",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn get_api_key(pool: &SqlitePool, id: &str) -> Result<Option<ApiKey>> {
    let key = sqlx::query_as::<_, ApiKey>(
        "SELECT id, api_key, salt, user_id FROM apiKey WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(key)
}

pub async fn get_group_member_ids(pool: &SqlitePool, group_id: &str) -> Result<Vec<String>> {
    let ids: Vec<String> =
        sqlx::query_scalar("SELECT user_id FROM groupMember WHERE group_id = ? ORDER BY user_id")
            .bind(group_id)
            .fetch_all(pool)
            .await?;

    Ok(ids)
}

pub async fn get_server_setting(pool: &SqlitePool, key: &str) -> Result<Option<String>> {
    let value: Option<String> =
        sqlx::query_scalar("SELECT value FROM serverSetting WHERE setting_key = ?")
            .bind(key)
            .fetch_optional(pool)
            .await?;

    Ok(value)
}

// Column names of a table, for checking that the schema template defines
// everything the seeder is about to touch
pub async fn table_columns(pool: &SqlitePool, table: &str) -> Result<Vec<String>> {
    let columns: Vec<String> = sqlx::query_scalar("SELECT name FROM pragma_table_info(?)")
        .bind(table)
        .fetch_all(pool)
        .await
        .with_context(|| format!("Failed to read columns of table {}", table))?;

    Ok(columns)
}
