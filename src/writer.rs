//! Output writers
//!
//! Serializes a `RateTable` to JSON and CSV files. Target files are created
//! or overwritten; missing parent directories are created first.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::types::{Currency, FetchError, RateTable};

/// Append `ext` to the path when it has no extension of its own
fn with_default_extension(path: &Path, ext: &str) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        let mut os = path.as_os_str().to_os_string();
        os.push(".");
        os.push(ext);
        PathBuf::from(os)
    }
}

fn ensure_parent_dir(path: &Path) -> Result<(), FetchError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            info!("Creating output directory: {}", parent.display());
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Write the table to a JSON file, pretty-printed
///
/// The serialized form mirrors the reshaped per-date mapping:
/// `{"2023-01-01": {"EUR": 0.91}, ...}`. Returns the path actually written,
/// with `.json` appended when the input path had no extension.
pub fn save_json(table: &RateTable, path: impl AsRef<Path>) -> Result<PathBuf, FetchError> {
    let filepath = with_default_extension(path.as_ref(), "json");
    ensure_parent_dir(&filepath)?;

    let file = File::create(&filepath)?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, table)?;
    out.flush()?;

    info!("Saved {} dates to {}", table.len(), filepath.display());
    Ok(filepath)
}

/// Write the table to a CSV file
///
/// Header is `date` followed by the requested destination codes in request
/// order; one row per date ascending. A rate the API did not return for a
/// given date/currency becomes an empty field. Returns the path actually
/// written, with `.csv` appended when the input path had no extension.
pub fn save_csv(
    table: &RateTable,
    symbols: &[Currency],
    path: impl AsRef<Path>,
) -> Result<PathBuf, FetchError> {
    let filepath = with_default_extension(path.as_ref(), "csv");
    ensure_parent_dir(&filepath)?;

    let mut writer = csv::Writer::from_path(&filepath)?;

    let mut header = vec!["date".to_string()];
    header.extend(symbols.iter().map(|s| s.as_str().to_string()));
    writer.write_record(&header)?;

    for (date, rates) in table.iter() {
        let mut row = vec![date.to_string()];
        for symbol in symbols {
            let field = rates
                .get(symbol.as_str())
                .map(|rate| rate.to_string())
                .unwrap_or_default();
            row.push(field);
        }
        writer.write_record(&row)?;
    }

    writer.flush()?;
    info!("Saved {} rows to {}", table.len(), filepath.display());
    Ok(filepath)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reshape::format_data;
    use crate::types::parse_currency_list;
    use serde_json::json;

    fn sample_table() -> RateTable {
        let body = json!({
            "response": {
                "2023-01-01": {"EUR": 0.91},
                "2023-01-02": {"EUR": 0.92}
            }
        });
        format_data(&body).unwrap()
    }

    #[test]
    fn test_with_default_extension() {
        assert_eq!(
            with_default_extension(Path::new("out/result"), "json"),
            PathBuf::from("out/result.json")
        );
        assert_eq!(
            with_default_extension(Path::new("out/result.json"), "json"),
            PathBuf::from("out/result.json")
        );
    }

    #[test]
    fn test_save_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let table = sample_table();

        let path = save_json(&table, dir.path().join("rates")).unwrap();
        assert_eq!(path.extension().unwrap(), "json");

        let contents = fs::read_to_string(&path).unwrap();
        let parsed: RateTable = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, table);

        // The file mirrors the reshaped response mapping exactly
        let raw: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(
            raw,
            json!({
                "2023-01-01": {"EUR": 0.91},
                "2023-01-02": {"EUR": 0.92}
            })
        );
    }

    #[test]
    fn test_save_csv_matches_expected_layout() {
        let dir = tempfile::tempdir().unwrap();
        let table = sample_table();
        let symbols = parse_currency_list("EUR").unwrap();

        let path = save_csv(&table, &symbols, dir.path().join("rates")).unwrap();
        assert_eq!(path.extension().unwrap(), "csv");

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "date,EUR\n2023-01-01,0.91\n2023-01-02,0.92\n");
    }

    #[test]
    fn test_save_csv_missing_rate_is_empty_field() {
        let dir = tempfile::tempdir().unwrap();
        let body = json!({
            "response": {
                "2024-10-22": {"EUR": 0.92574291, "GBP": 0.77009081},
                "2024-10-23": {"GBP": 0.77363489}
            }
        });
        let table = format_data(&body).unwrap();
        let symbols = parse_currency_list("EUR,GBP").unwrap();

        let path = save_csv(&table, &symbols, dir.path().join("partial.csv")).unwrap();
        let contents = fs::read_to_string(&path).unwrap();

        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "date,EUR,GBP");
        assert_eq!(lines[1], "2024-10-22,0.92574291,0.77009081");
        assert_eq!(lines[2], "2024-10-23,,0.77363489");
    }

    #[test]
    fn test_save_csv_column_order_follows_request() {
        let dir = tempfile::tempdir().unwrap();
        let body = json!({
            "response": {
                "2024-10-22": {"EUR": 0.92, "GBP": 0.77}
            }
        });
        let table = format_data(&body).unwrap();
        // Request order differs from alphabetical order
        let symbols = parse_currency_list("GBP,EUR").unwrap();

        let path = save_csv(&table, &symbols, dir.path().join("ordered")).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("date,GBP,EUR\n"));
        assert!(contents.contains("2024-10-22,0.77,0.92"));
    }

    #[test]
    fn test_writers_create_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let table = sample_table();
        let nested = dir.path().join("unversioned").join("result");

        let json_path = save_json(&table, &nested).unwrap();
        assert!(json_path.exists());

        let symbols = parse_currency_list("EUR").unwrap();
        let csv_path = save_csv(&table, &symbols, &nested).unwrap();
        assert!(csv_path.exists());
    }
}
