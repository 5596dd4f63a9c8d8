// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// Serialize export records to delimited text

mod csv_writer;

pub use csv_writer::CsvExportWriter;
