// Seed data insertion
//
// Applies the schema template, then provisions the fixed data set inside a
// single transaction: onboarding marked complete, the two accounts, admins
// group memberships, the bootstrap API key, and the default server settings.
// A constraint failure anywhere rolls the row inserts back and aborts the
// run; the tool is re-run from scratch rather than resumed.

use anyhow::{Context, Result};
use sqlx::SqlitePool;

use crate::auth;
use crate::config::SeedConfig;
use crate::db;
use crate::settings;

// The singleton onboarding row records the terminal step and the step the
// flow would have come from.
const ONBOARDING_ROW_ID: &str = "init";
const ONBOARDING_STEP: &str = "finish";
const ONBOARDING_PREVIOUS_STEP: &str = "settings";

/// Seed a fresh database and return the bearer credential in the
/// `<id>.<token>` form a client must present.
pub async fn seed_database(
    pool: &SqlitePool,
    schema_sql: &str,
    config: &SeedConfig,
) -> Result<String> {
    db::apply_schema(pool, schema_sql).await?;

    let mut tx = pool
        .begin()
        .await
        .context("Failed to begin seed transaction")?;

    db::insert_onboarding(
        &mut tx,
        ONBOARDING_ROW_ID,
        ONBOARDING_STEP,
        ONBOARDING_PREVIOUS_STEP,
    )
    .await
    .context("Failed to insert onboarding state")?;

    db::insert_user(&mut tx, &config.service_user, &config.provider, &config.color_scheme)
        .await
        .context("Failed to insert service account")?;

    db::insert_user(&mut tx, &config.admin_user, &config.provider, &config.color_scheme)
        .await
        .context("Failed to insert admin account")?;

    db::insert_group_member(&mut tx, &config.admins_group_id, &config.service_user.id)
        .await
        .context("Failed to add service account to admins group")?;

    db::insert_group_member(&mut tx, &config.admins_group_id, &config.admin_user.id)
        .await
        .context("Failed to add admin account to admins group")?;

    // The key belongs to the service account, keeping programmatic API access
    // separate from the human OIDC login.
    let token = auth::hash_api_token(&config.api_key_token)?;
    db::insert_api_key(&mut tx, &config.api_key_id, &token, &config.service_user.id)
        .await
        .context("Failed to insert bootstrap API key")?;

    db::insert_server_setting(&mut tx, "analytics", &settings::analytics_disabled()?)
        .await
        .context("Failed to insert analytics settings")?;

    db::insert_server_setting(&mut tx, "crawlingAndIndexing", &settings::crawling_opt_out()?)
        .await
        .context("Failed to insert crawling settings")?;

    tx.commit()
        .await
        .context("Failed to commit seed transaction")?;

    Ok(format!("{}.{}", config.api_key_id, config.api_key_token))
}
