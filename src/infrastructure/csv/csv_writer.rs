// ============================================================
// CSV EXPORT WRITER
// ============================================================
// Header row followed by one row per record, in input order

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::domain::catalog::OutputRecord;
use crate::domain::error::{AppError, Result};

const DELIMITER: u8 = b',';

/// CSV writer for export records
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvExportWriter;

impl CsvExportWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write header and records to any writer
    ///
    /// The header is always written, even with no records.
    pub fn write_to<W: Write>(&self, writer: W, records: &[OutputRecord]) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(false)
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::CRLF)
            .from_writer(writer);

        writer.write_record(OutputRecord::HEADER)?;
        for (index, record) in records.iter().enumerate() {
            writer.serialize(record).map_err(|e| {
                AppError::CsvError(format!("Failed to write record {}: {}", index + 1, e))
            })?;
        }
        writer.flush()?;

        Ok(())
    }

    /// Write to a file, creating missing parent directories
    pub fn write_file(&self, path: &Path, records: &[OutputRecord]) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(path).map_err(|e| {
            AppError::IoError(format!("Failed to create {}: {}", path.display(), e))
        })?;
        self.write_to(BufWriter::new(file), records)?;

        tracing::debug!("Wrote {} records to {}", records.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER_LINE: &str =
        "acc_num,eng_name,rus_name,description,date_from,date_to,notes,material,technique,size\r\n";

    fn render(records: &[OutputRecord]) -> String {
        let mut buffer = Vec::new();
        CsvExportWriter::new().write_to(&mut buffer, records).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn record() -> OutputRecord {
        OutputRecord {
            acc_num: Some("ЭРР-1".to_string()),
            english_title: None,
            russian_title: Some("Рынок".to_string()),
            description: Some("Бытовая сцена: Рынок".to_string()),
            date_from: Some(1785),
            date_to: Some(1790),
            date_note: None,
            material: "Холст".to_string(),
            technique: "масло".to_string(),
            size: Some("30 x 40".to_string()),
        }
    }

    #[test]
    fn test_header_written_without_records() {
        let output = render(&[]);
        assert_eq!(output, HEADER_LINE);
    }

    #[test]
    fn test_absent_fields_are_empty() {
        let output = render(&[record()]);
        assert_eq!(
            output,
            format!(
                "{}ЭРР-1,,Рынок,Бытовая сцена: Рынок,1785,1790,,Холст,масло,30 x 40\r\n",
                HEADER_LINE
            )
        );
    }

    #[test]
    fn test_fields_with_delimiter_or_quotes_are_quoted() {
        let mut rec = record();
        rec.description = Some(r#"Карикатура: "Scene of Life""#.to_string());
        rec.english_title = Some("Scene, Life".to_string());
        rec.size = Some("24,5 x 18".to_string());

        let output = render(&[rec]);
        let line = output.lines().nth(1).unwrap();

        assert_eq!(
            line,
            r#"ЭРР-1,"Scene, Life",Рынок,"Карикатура: ""Scene of Life""",1785,1790,,Холст,масло,"24,5 x 18""#
        );
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.csv");

        CsvExportWriter::new().write_file(&path, &[record()]).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with(HEADER_LINE));
        assert_eq!(written.lines().count(), 2);
    }
}
