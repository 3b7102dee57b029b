//! Output formatting helpers for human-readable and JSON output.

use clap::ValueEnum;
use setmatch::check::CheckOutcome;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Print a table with aligned columns in human-readable format.
///
/// Rows shorter than `headers` are padded with empty cells.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(String::len)
                .fold(h.len(), usize::max)
        })
        .collect();

    let render = |cells: Vec<&str>| {
        let line: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect();
        println!("{}", line.join("  ").trim_end());
    };

    render(headers.to_vec());
    for row in rows {
        render(
            (0..headers.len())
                .map(|i| row.get(i).map_or("", String::as_str))
                .collect(),
        );
    }
}

/// Print check outcomes, failures with their error on the following line.
pub fn print_outcomes(
    outcomes: &[CheckOutcome],
    format: OutputFormat,
) -> Result<(), serde_json::Error> {
    match format {
        OutputFormat::Human => {
            for outcome in outcomes {
                let status = if outcome.passed { "PASS" } else { "FAIL" };
                println!("{status}  {}", outcome.check);
                if let Some(error) = &outcome.error {
                    println!("      {error}");
                }
            }
            let failed = outcomes.iter().filter(|o| !o.passed).count();
            println!();
            println!("{} passed, {failed} failed", outcomes.len() - failed);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(outcomes)?);
        }
    }
    Ok(())
}
