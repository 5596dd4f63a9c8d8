// ============================================================
// INPUT ROW
// ============================================================
// Positional view of one source spreadsheet row

use serde::{Deserialize, Serialize};

/// Column positions (0-based) consumed from the source sheet
pub const ACC_NUM_COLUMN: usize = 1;
pub const DESCRIPTION_COLUMN: usize = 3;
pub const DATE_COLUMN: usize = 4;
pub const MATERIAL_TECHNIQUE_COLUMN: usize = 5;
pub const SIZE_COLUMN: usize = 6;

/// One catalog row as read from the source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRow {
    /// Accession number, passed through unmodified
    pub acc_num: Option<String>,

    /// Free-text description, may embed quoted titles and a category label
    pub description: Option<String>,

    /// Free-text date expression
    pub date_expr: Option<String>,

    /// Comma-joined "material, technique"
    pub material_technique: Option<String>,

    /// Size, passed through unmodified
    pub size: Option<String>,
}

impl InputRow {
    /// Build a row from positional cells
    ///
    /// Cells past the end of a short row are treated as absent.
    pub fn from_cells(cells: &[Option<String>]) -> Self {
        let cell = |idx: usize| cells.get(idx).cloned().flatten();

        Self {
            acc_num: cell(ACC_NUM_COLUMN),
            description: cell(DESCRIPTION_COLUMN),
            date_expr: cell(DATE_COLUMN),
            material_technique: cell(MATERIAL_TECHNIQUE_COLUMN),
            size: cell(SIZE_COLUMN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<Option<String>> {
        values
            .iter()
            .map(|v| if v.is_empty() { None } else { Some(v.to_string()) })
            .collect()
    }

    #[test]
    fn test_from_cells_picks_positional_columns() {
        let row = InputRow::from_cells(&cells(&[
            "1",
            "ЭРР-123",
            "ignored",
            "Бытовая сцена",
            "1785-1790",
            "Холст, масло",
            "30x40",
        ]));

        assert_eq!(row.acc_num.as_deref(), Some("ЭРР-123"));
        assert_eq!(row.description.as_deref(), Some("Бытовая сцена"));
        assert_eq!(row.date_expr.as_deref(), Some("1785-1790"));
        assert_eq!(row.material_technique.as_deref(), Some("Холст, масло"));
        assert_eq!(row.size.as_deref(), Some("30x40"));
    }

    #[test]
    fn test_short_row_yields_absent_fields() {
        let row = InputRow::from_cells(&cells(&["1", "A-1", "", "desc"]));

        assert_eq!(row.acc_num.as_deref(), Some("A-1"));
        assert_eq!(row.description.as_deref(), Some("desc"));
        assert_eq!(row.date_expr, None);
        assert_eq!(row.material_technique, None);
        assert_eq!(row.size, None);
    }
}
