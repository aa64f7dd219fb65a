//! `csv` subcommand: fetch and write JSON + CSV files from one path stem

use anyhow::{Context, Result};
use currency_rates::writer;
use tracing::info;

use super::FetchArgs;

pub fn run(args: FetchArgs, output: String) -> Result<()> {
    let (table, symbols) = super::fetch(&args)?;

    info!("Attempting to save data to {} json and csv files", output);

    let json_path = writer::save_json(&table, format!("{}.json", output))
        .with_context(|| format!("Failed to write JSON to {}.json", output))?;
    let csv_path = writer::save_csv(&table, &symbols, format!("{}.csv", output))
        .with_context(|| format!("Failed to write CSV to {}.csv", output))?;

    println!("Data saved to {}", json_path.display());
    println!("Data saved to {}", csv_path.display());

    Ok(())
}
