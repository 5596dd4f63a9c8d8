// ============================================================
// CATALOG DOMAIN LAYER
// ============================================================
// Row and record types for the catalog export
// No I/O, no parsing rules

mod date_result;
mod input_row;
mod output_record;
mod title;

pub use date_result::{DateResult, DATE_ABSENT_NOTE};
pub use input_row::InputRow;
pub use output_record::OutputRecord;
pub use title::TitleResult;
