// Schema template loading

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

// Marker comments in the template document where the seeder inserts rows
// after the schema is applied. They are stripped before execution; markers
// outside this set pass through untouched so newer templates keep loading.
const MARKERS: [&str; 5] = [
    "-- {{ONBOARDING}}",
    "-- {{USER}}",
    "-- {{API_KEY}}",
    "-- {{SERVER_SETTINGS}}",
    "-- {{GROUP_MEMBERS}}",
];

/// Read the schema template and strip the recognized placeholder markers,
/// yielding the SQL script the seeder executes against a fresh database.
pub fn load_schema_template(path: &Path) -> Result<String> {
    if !path.exists() {
        bail!("Schema template not found: {}", path.display());
    }

    let sql = fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema template {}", path.display()))?;

    Ok(strip_markers(&sql))
}

fn strip_markers(sql: &str) -> String {
    let mut sql = sql.to_string();
    for marker in MARKERS {
        sql = sql.replace(marker, "");
    }
    sql
}
