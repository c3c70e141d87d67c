use anyhow::Result;
use clap::Arg;
use std::path::PathBuf;

use halos_seed::config::SeedConfig;
use halos_seed::RunPaths;

const DEFAULT_TEMPLATE: &str = "schema-template.sql";
const DEFAULT_OUTPUT_DB: &str = "db-seed.sqlite3";
const DEFAULT_OUTPUT_KEY: &str = "bootstrap-api-key";

#[tokio::main]
async fn main() -> Result<()> {
    let matches = clap::Command::new("halos-seed")
        .about("Generate a pre-seeded dashboard database with a bootstrap API key")
        .arg(
            Arg::new("template")
                .short('t')
                .long("template")
                .value_name("TEMPLATE")
                .help("Path to the SQL schema template")
                .default_value(DEFAULT_TEMPLATE),
        )
        .arg(
            Arg::new("output-db")
                .long("output-db")
                .value_name("OUTPUT_DB")
                .help("Output path for the seed database")
                .default_value(DEFAULT_OUTPUT_DB),
        )
        .arg(
            Arg::new("output-key")
                .long("output-key")
                .value_name("OUTPUT_KEY")
                .help("Output path for the bootstrap API key file")
                .default_value(DEFAULT_OUTPUT_KEY),
        )
        .get_matches();

    let paths = RunPaths {
        template: matches
            .get_one::<String>("template")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE)),
        output_db: matches
            .get_one::<String>("output-db")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DB)),
        output_key: matches
            .get_one::<String>("output-key")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_KEY)),
    };

    let config = SeedConfig::default();
    halos_seed::run(&paths, &config).await?;

    println!("Done!");
    println!("  Database: {}", paths.output_db.display());
    println!("  API Key:  {}", paths.output_key.display());
    println!();
    println!("Bootstrap API key ID: {}", config.api_key_id);
    println!("This key should be rotated when the dashboard first boots.");

    Ok(())
}
