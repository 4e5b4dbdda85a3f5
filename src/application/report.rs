//! Report writers: two-column CSV tables and the TOC text file.
//!
//! The tabular `key,count` format matches the analysis output shape; keys
//! are lowercase letter runs (optionally space-joined), so no CSV quoting
//! is ever needed.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::instrument;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::{FrequencyEntry, TocTree};

/// Renders a frequency table as CSV with the given key-column header.
pub fn frequency_csv(header: &str, table: &[FrequencyEntry]) -> String {
    let mut csv = format!("{header},count\n");
    for entry in table {
        // write! to a String cannot fail
        let _ = writeln!(csv, "{},{}", entry.key, entry.count);
    }
    csv
}

/// Writes a frequency table to `<dir>/<file_name>` and returns the path.
#[instrument(level = "debug", skip(table))]
pub fn write_frequency_csv(
    dir: &Path,
    file_name: &str,
    header: &str,
    table: &[FrequencyEntry],
) -> ApplicationResult<PathBuf> {
    let path = dir.join(file_name);
    fs::write(&path, frequency_csv(header, table)).map_err(|e| ApplicationError::io(&path, e))?;
    Ok(path)
}

/// Writes the numbered outline to `<dir>/table_of_contents.txt`.
#[instrument(level = "debug", skip(toc))]
pub fn write_toc(dir: &Path, toc: &TocTree) -> ApplicationResult<PathBuf> {
    let path = dir.join("table_of_contents.txt");
    let mut content = toc.outline().join("\n");
    content.push('\n');
    fs::write(&path, content).map_err(|e| ApplicationError::io(&path, e))?;
    Ok(path)
}

/// Creates the report directory (and parents) if missing.
pub fn ensure_dir(dir: &Path) -> ApplicationResult<()> {
    fs::create_dir_all(dir).map_err(|e| ApplicationError::io(dir, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_table_when_rendering_csv_then_header_and_rows() {
        let table = vec![
            FrequencyEntry::new("data science", 2),
            FrequencyEntry::new("is fun", 1),
        ];
        let csv = frequency_csv("2gram", &table);
        assert_eq!(csv, "2gram,count\ndata science,2\nis fun,1\n");
    }

    #[test]
    fn given_empty_table_when_rendering_csv_then_header_only() {
        assert_eq!(frequency_csv("token", &[]), "token,count\n");
    }
}
