//! CSV export of the accumulated listings table.
//!
//! Export failures are logged and swallowed; the table itself is only
//! borrowed and stays valid whatever happens here.

use std::path::{Path, PathBuf};

use carscout_scraper::ResultTable;
use chrono::Local;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// `used_cars_<YYYYmmdd_HHMMSS>.csv` in the current directory.
pub(crate) fn default_output_path() -> PathBuf {
    PathBuf::from(format!(
        "used_cars_{}.csv",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

/// Writes `table` to `path` with a header row and returns the number of data
/// rows written. Missing cells are written as empty fields. A table with no
/// columns produces an empty file.
///
/// # Errors
///
/// Returns [`ExportError`] if the file cannot be created or written.
pub(crate) fn write_csv(table: &ResultTable, path: &Path) -> Result<usize, ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    if !table.columns().is_empty() {
        writer.write_record(table.columns())?;
    }
    for record in table.records() {
        writer.write_record(
            record
                .into_iter()
                .map(|cell| cell.map(ToString::to_string).unwrap_or_default()),
        )?;
    }
    writer.flush()?;
    Ok(table.len())
}

/// Exports `table` and logs the result. Returns `true` when a file was written.
///
/// An empty table is skipped unless `write_empty` is set, which the CLI does
/// when the user named the output file.
pub(crate) fn export_table(table: &ResultTable, path: &Path, write_empty: bool) -> bool {
    if table.is_empty() && !write_empty {
        tracing::warn!(path = %path.display(), "nothing to export; no listings were fetched");
        return false;
    }

    match write_csv(table, path) {
        Ok(rows) => {
            tracing::info!(
                path = %path.display(),
                rows,
                columns = table.columns().len(),
                "exported listings"
            );
            true
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "failed to export listings");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use carscout_scraper::{flatten_listing, CellValue, ListingRow};
    use serde_json::json;

    use super::*;

    fn row(value: serde_json::Value) -> ListingRow {
        match value {
            serde_json::Value::Object(map) => flatten_listing(map),
            other => panic!("fixture must be an object, got {other}"),
        }
    }

    fn sample_table() -> ResultTable {
        let mut table = ResultTable::new();
        table.append_page(vec![
            row(json!({ "make": "Ford", "price": 8500, "dealer": { "city": "Austin, TX" } })),
            row(json!({ "make": "Kia", "certified": true })),
        ]);
        table
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("carscout-{}-{name}.csv", std::process::id()))
    }

    #[test]
    fn default_output_path_is_timestamped_csv() {
        let name = default_output_path().to_string_lossy().into_owned();
        assert!(name.starts_with("used_cars_"), "got: {name}");
        assert!(
            Path::new(&name)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv")),
            "got: {name}"
        );
    }

    #[test]
    fn written_file_reads_back_with_same_shape() {
        let table = sample_table();
        let path = temp_path("roundtrip");

        let rows = write_csv(&table, &path).unwrap();
        assert_eq!(rows, 2);

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader
            .headers()
            .unwrap()
            .iter()
            .map(str::to_owned)
            .collect();
        assert_eq!(headers, table.columns());

        let records: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(records.len(), 2);

        let col = |name: &str| headers.iter().position(|h| h == name).unwrap();
        assert_eq!(&records[0][col("dealer.city")], "Austin, TX");
        assert_eq!(&records[0][col("price")], "8500");
        assert_eq!(&records[0][col("certified")], "");
        assert_eq!(&records[1][col("certified")], "true");
        assert_eq!(&records[1][col("dealer.city")], "");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn export_to_missing_directory_fails_without_touching_table() {
        let table = sample_table();
        let path = std::env::temp_dir()
            .join("carscout-does-not-exist")
            .join("nested")
            .join("out.csv");

        assert!(write_csv(&table, &path).is_err());
        assert!(!export_table(&table, &path, true));
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.cell(0, "make"),
            Some(&CellValue::Text("Ford".into()))
        );
    }

    #[test]
    fn empty_table_is_not_written() {
        let path = temp_path("empty");
        assert!(!export_table(&ResultTable::new(), &path, false));
        assert!(!path.exists());
    }

    #[test]
    fn empty_table_is_written_when_output_was_named() {
        let path = temp_path("empty-named");
        assert!(export_table(&ResultTable::new(), &path, true));
        assert!(path.exists());

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert!(reader.headers().unwrap().is_empty());
        assert_eq!(reader.records().count(), 0);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn export_table_reports_success() {
        let path = temp_path("success");
        assert!(export_table(&sample_table(), &path, false));
        assert!(path.exists());
        std::fs::remove_file(&path).ok();
    }
}
