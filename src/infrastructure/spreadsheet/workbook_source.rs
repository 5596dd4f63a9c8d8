use std::path::PathBuf;

use calamine::{open_workbook_auto, Data, Range, Reader};

use super::{display_path, RowSource};
use crate::domain::catalog::InputRow;
use crate::domain::error::{AppError, Result};

/// Largest float that still renders exactly as an integer
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

/// Reads one worksheet of an xlsx/xlsm/xls/ods workbook
///
/// Without a sheet name the first worksheet by position is read, not the
/// tab that was active when the workbook was saved. Pass `--sheet` (or set
/// `sheet` in the config) when the catalog lives on another tab.
pub struct WorkbookSource {
    path: PathBuf,
    sheet: Option<String>,
}

impl WorkbookSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sheet: None,
        }
    }

    /// Read a named worksheet instead of the first one
    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = Some(sheet.into());
        self
    }

    fn read_range(&self) -> Result<Range<Data>> {
        let mut workbook = open_workbook_auto(&self.path).map_err(|e| {
            tracing::error!("Failed to open workbook {}: {}", self.path.display(), e);
            AppError::SpreadsheetError(format!(
                "Failed to open workbook {}: {}",
                self.path.display(),
                e
            ))
        })?;

        match &self.sheet {
            Some(name) => workbook.worksheet_range(name).map_err(|e| {
                AppError::SpreadsheetError(format!("Failed to read worksheet '{}': {}", name, e))
            }),
            None => workbook
                .worksheet_range_at(0)
                .ok_or_else(|| {
                    AppError::SpreadsheetError(format!(
                        "No worksheet found in {}",
                        self.path.display()
                    ))
                })?
                .map_err(|e| {
                    AppError::SpreadsheetError(format!("Failed to read worksheet: {}", e))
                }),
        }
    }
}

impl RowSource for WorkbookSource {
    fn read_rows(&self) -> Result<Vec<InputRow>> {
        let range = self.read_range()?;
        let rows = rows_from_range(&range);

        tracing::info!(
            "Read {} data rows from {}",
            rows.len(),
            self.describe()
        );

        Ok(rows)
    }

    fn describe(&self) -> String {
        match &self.sheet {
            Some(sheet) => format!("workbook:{}[{}]", display_path(&self.path), sheet),
            None => format!("workbook:{}", display_path(&self.path)),
        }
    }
}

/// Convert a worksheet range to rows, skipping sheet row 1 (the header)
///
/// Positions are absolute sheet columns: the range may begin past
/// column A or row 1 when leading cells are empty, so it is re-anchored
/// at A1 before columns are picked.
pub fn rows_from_range(range: &Range<Data>) -> Vec<InputRow> {
    let (start, end) = match (range.start(), range.end()) {
        (Some(start), Some(end)) => (start, end),
        _ => return Vec::new(),
    };
    let (first_row, first_col) = (start.0 as usize, start.1 as usize);
    let last_row = end.0 as usize;

    let mut rows = Vec::with_capacity(last_row);

    // Blank sheet rows between the header and the first populated row
    for _ in 1..first_row {
        rows.push(InputRow::default());
    }

    let data_rows = range.rows().skip(if first_row == 0 { 1 } else { 0 });
    for row in data_rows {
        let cells: Vec<Option<String>> = std::iter::repeat(None)
            .take(first_col)
            .chain(row.iter().map(cell_to_string))
            .collect();
        rows.push(InputRow::from_cells(&cells));
    }

    rows
}

/// Render a cell as text. Empty and error cells are absent.
pub fn cell_to_string(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < MAX_EXACT_FLOAT => {
            Some(format!("{}", *f as i64))
        }
        other => Some(other.to_string()),
    }
}
