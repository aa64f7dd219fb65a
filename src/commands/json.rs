//! `json` subcommand: fetch and write a JSON file

use anyhow::{Context, Result};
use currency_rates::writer;
use tracing::info;

use super::FetchArgs;

pub fn run(args: FetchArgs, output: Option<String>) -> Result<()> {
    let (table, _symbols) = super::fetch(&args)?;

    match output {
        Some(path) => {
            info!("Attempting to save data to {}", path);
            let written = writer::save_json(&table, &path)
                .with_context(|| format!("Failed to write JSON to {}", path))?;
            println!("Data saved to {}", written.display());
        }
        None => {
            let rendered =
                serde_json::to_string_pretty(&table).context("Failed to render table")?;
            println!("{}", rendered);
        }
    }

    Ok(())
}
