//! Resources command - lists resources and their primary instance.

use setmatch::ModuleState;

use crate::commands::load_state;
use crate::output::{OutputFormat, print_table};

/// Run the resources command
pub fn run(
    state_path: &std::path::Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = load_state(state_path)?;
    let rows = rows(&state);

    match format {
        OutputFormat::Human => {
            if rows.is_empty() {
                println!("No resources in module {}", state.path());
            }
            print_table(&["NAME", "ID", "ATTRIBUTES"], &rows);
        }
        OutputFormat::Json => {
            let value: Vec<serde_json::Value> = rows
                .iter()
                .map(|row| {
                    serde_json::json!({
                        "name": row[0],
                        "id": row[1],
                        "attributes": row[2],
                    })
                })
                .collect();
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}

fn rows(state: &ModuleState) -> Vec<Vec<String>> {
    state
        .resource_names()
        .map(|name| {
            let primary = state.resource(name).and_then(|rs| rs.primary.as_ref());
            match primary {
                Some(instance) => vec![
                    name.to_string(),
                    instance.id.clone(),
                    instance.attributes.len().to_string(),
                ],
                None => vec![name.to_string(), "-".to_string(), "-".to_string()],
            }
        })
        .collect()
}
