// ============================================================
// SPREADSHEET SOURCE LAYER
// ============================================================
// Read catalog rows from a workbook or a delimited text file

mod csv_source;
mod workbook_source;

use std::path::Path;

use crate::domain::catalog::InputRow;
use crate::domain::error::Result;

pub use csv_source::CsvSource;
pub use workbook_source::{cell_to_string, rows_from_range, WorkbookSource};

/// Anything that yields source rows, header already skipped
pub trait RowSource {
    fn read_rows(&self) -> Result<Vec<InputRow>>;

    /// Human-readable name for logging
    fn describe(&self) -> String;
}

/// Pick a source by file extension; anything but `.csv` is opened as a workbook
pub fn open_source(path: &Path, sheet: Option<String>) -> Box<dyn RowSource> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        Box::new(CsvSource::new(path))
    } else {
        let source = WorkbookSource::new(path);
        Box::new(match sheet {
            Some(sheet) => source.with_sheet(sheet),
            None => source,
        })
    }
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_source_by_extension() {
        assert!(open_source(Path::new("data/catalog.CSV"), None)
            .describe()
            .starts_with("csv:"));
        assert!(open_source(Path::new("data/catalog.xlsx"), None)
            .describe()
            .starts_with("workbook:"));
        assert_eq!(
            open_source(Path::new("catalog.xlsx"), Some("Лист2".to_string())).describe(),
            "workbook:catalog.xlsx[Лист2]"
        );
    }
}
