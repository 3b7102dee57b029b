//! Subcommand implementations.

use std::path::Path;

use setmatch::ModuleState;

pub mod check;
pub mod resources;
pub mod run;

/// Load the state file every subcommand operates on
pub fn load_state(path: &Path) -> Result<ModuleState, Box<dyn std::error::Error>> {
    let state = ModuleState::load_from_file(path)
        .map_err(|e| format!("Failed to load state from {}: {e}", path.display()))?;
    tracing::info!(
        resources = state.len(),
        module = state.path(),
        "Loaded state from {}",
        path.display()
    );
    Ok(state)
}
