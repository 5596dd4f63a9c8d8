// ============================================================
// BATCH RUNNER USE CASE
// ============================================================
// Read all rows, transform each, write the export table

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{InputRow, OutputRecord};
use crate::domain::error::Result;
use crate::infrastructure::config::ExportConfig;
use crate::infrastructure::csv::CsvExportWriter;
use crate::infrastructure::spreadsheet::{open_source, RowSource};

use super::record_transformer::transform;

/// Transform every row, preserving order; no row is dropped
pub fn run(rows: &[InputRow]) -> Vec<OutputRecord> {
    rows.iter().map(transform).collect()
}

/// Counts describing one export run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub row_count: usize,
    pub range_count: usize,
    pub note_count: usize,
    pub english_title_count: usize,
    pub russian_title_count: usize,
}

impl BatchSummary {
    pub fn from_records(records: &[OutputRecord]) -> Self {
        let count = |pred: fn(&OutputRecord) -> bool| records.iter().filter(|r| pred(r)).count();

        Self {
            row_count: records.len(),
            range_count: count(|r| r.date_from.is_some()),
            note_count: count(|r| r.date_note.is_some()),
            english_title_count: count(|r| r.english_title.is_some()),
            russian_title_count: count(|r| r.russian_title.is_some()),
        }
    }
}

/// Export use case: source file in, CSV file out
pub struct CatalogExporter {
    config: ExportConfig,
    writer: CsvExportWriter,
}

impl CatalogExporter {
    pub fn new(config: ExportConfig) -> Self {
        Self {
            config,
            writer: CsvExportWriter::new(),
        }
    }

    /// Run the export against the configured source
    pub fn export(&self) -> Result<BatchSummary> {
        self.config.validate()?;
        let source = open_source(&self.config.input_path, self.config.sheet.clone());
        self.export_from(source.as_ref())
    }

    /// Run the export against an explicit source
    pub fn export_from(&self, source: &dyn RowSource) -> Result<BatchSummary> {
        let start = Instant::now();
        tracing::info!("Reading catalog rows from {}", source.describe());

        let rows = source.read_rows()?;
        let records = run(&rows);

        self.writer.write_file(&self.config.output_path, &records)?;

        let summary = BatchSummary::from_records(&records);
        tracing::info!(
            rows = summary.row_count,
            ranges = summary.range_count,
            notes = summary.note_count,
            english_titles = summary.english_title_count,
            russian_titles = summary.russian_title_count,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Processing complete! Result saved to '{}'",
            self.config.output_path.display()
        );

        Ok(summary)
    }
}
