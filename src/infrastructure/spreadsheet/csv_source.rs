use std::fs;
use std::path::PathBuf;

use csv::{ReaderBuilder, StringRecord};

use super::{display_path, RowSource};
use crate::domain::catalog::InputRow;
use crate::domain::error::{AppError, Result};

/// Reads catalog rows from a comma-delimited export of the sheet
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse rows from in-memory content; the first record is the header
    pub fn parse_content(&self, content: &str) -> Result<Vec<InputRow>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::CsvError(format!("Failed to parse CSV row {}: {}", index + 2, e))
            })?;
            rows.push(Self::parse_record(&record));
        }

        Ok(rows)
    }

    fn parse_record(record: &StringRecord) -> InputRow {
        let cells: Vec<Option<String>> = record
            .iter()
            .map(|field| {
                if field.is_empty() {
                    None
                } else {
                    Some(field.to_string())
                }
            })
            .collect();
        InputRow::from_cells(&cells)
    }

    /// UTF-8 first, lossy replacement otherwise
    fn read_content(&self) -> Result<String> {
        let buffer = fs::read(&self.path).map_err(|e| {
            AppError::IoError(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))
        })?;

        match String::from_utf8(buffer) {
            Ok(content) => Ok(content),
            Err(err) => {
                tracing::warn!(
                    "{} is not valid UTF-8, replacing invalid sequences",
                    self.path.display()
                );
                Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
            }
        }
    }
}

impl RowSource for CsvSource {
    fn read_rows(&self) -> Result<Vec<InputRow>> {
        let content = self.read_content()?;
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
        let rows = self.parse_content(content)?;

        tracing::info!("Read {} data rows from {}", rows.len(), self.describe());

        Ok(rows)
    }

    fn describe(&self) -> String {
        format!("csv:{}", display_path(&self.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_content_skips_header() {
        let content = "n,acc,x,desc,date,mat,size\n\
                       1,ЭРР-1,,\"Карикатура: \"\"Scene\"\"\",1785-1790,\"Холст, масло\",30x40\n\
                       2,ЭРР-2,,,,,\n";
        let rows = CsvSource::new("unused.csv").parse_content(content).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].acc_num.as_deref(), Some("ЭРР-1"));
        assert_eq!(rows[0].description.as_deref(), Some("Карикатура: \"Scene\""));
        assert_eq!(rows[0].material_technique.as_deref(), Some("Холст, масло"));
        assert_eq!(rows[1].date_expr, None);
    }

    #[test]
    fn test_short_records_are_accepted() {
        let content = "a,b,c\n1,ЭРР-3\n";
        let rows = CsvSource::new("unused.csv").parse_content(content).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].acc_num.as_deref(), Some("ЭРР-3"));
        assert_eq!(rows[0].size, None);
    }

    #[test]
    fn test_read_rows_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.csv");
        fs::write(&path, "\u{feff}h0,h1,h2,h3,h4,h5,h6\n0,ЭРР-9,,Рынок,1823,Бумага,10x10\n").unwrap();

        let rows = CsvSource::new(&path).read_rows().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date_expr.as_deref(), Some("1823"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = CsvSource::new("/definitely/missing/catalog.csv")
            .read_rows()
            .unwrap_err();
        assert!(matches!(err, AppError::IoError(_)));
    }
}
