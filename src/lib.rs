// halos-seed: generate a pre-seeded dashboard database with a bootstrap
// API key, so the application boots with onboarding complete, two admin
// accounts provisioned, and one rotatable credential issued.

pub mod auth;
pub mod config;
pub mod db;
pub mod settings;
pub mod template;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use config::SeedConfig;

/// Filesystem locations for one seeding run.
#[derive(Debug, Clone)]
pub struct RunPaths {
    pub template: PathBuf,
    pub output_db: PathBuf,
    pub output_key: PathBuf,
}

/// Load the template, seed a fresh database, and emit the credential file.
pub async fn run(paths: &RunPaths, config: &SeedConfig) -> Result<()> {
    // Read the template up front so a missing file aborts the run before any
    // output exists.
    println!("Loading schema from: {}", paths.template.display());
    let schema_sql = template::load_schema_template(&paths.template)?;

    create_parent_dir(&paths.output_db)?;
    create_parent_dir(&paths.output_key)?;

    println!("Creating seed database: {}", paths.output_db.display());
    let pool = db::create_database(&paths.output_db).await?;
    let seed_result = db::seed::seed_database(&pool, &schema_sql, config).await;
    pool.close().await;
    let api_key = seed_result?;

    println!("Writing bootstrap API key to: {}", paths.output_key.display());
    fs::write(&paths.output_key, format!("{api_key}\n"))
        .with_context(|| format!("Failed to write API key file {}", paths.output_key.display()))?;

    Ok(())
}

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    Ok(())
}
