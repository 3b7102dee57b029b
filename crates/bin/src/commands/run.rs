//! Batch command - runs every check from a JSON file.

use setmatch::{Check, check};

use crate::cli::RunArgs;
use crate::commands::load_state;
use crate::output::{OutputFormat, print_outcomes};

/// Run the checks file, returning whether every check passed
pub fn run(
    state_path: &std::path::Path,
    args: &RunArgs,
    format: OutputFormat,
) -> Result<bool, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(&args.checks)
        .map_err(|e| format!("Failed to read checks from {}: {e}", args.checks.display()))?;
    let checks: Vec<Check> = serde_json::from_str(&json)?;
    tracing::info!(checks = checks.len(), "Loaded checks");

    let state = load_state(state_path)?;
    let outcomes = check::run_all(&checks, &state);
    print_outcomes(&outcomes, format)?;
    Ok(outcomes.iter().all(|o| o.passed))
}
