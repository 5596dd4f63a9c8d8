// ============================================================
// RECORD TRANSFORMER
// ============================================================
// Map one source row to one normalized export record

use crate::domain::catalog::{InputRow, OutputRecord};

use super::{date_interpreter, material_splitter, title_extractor};

/// Build the export record for a row. Pure; never fails.
pub fn transform(row: &InputRow) -> OutputRecord {
    let description = row.description.as_deref();

    let titles = title_extractor::extract(description);

    let date = date_interpreter::interpret(row.date_expr.as_deref());

    // A note always travels without bounds
    let (date_from, date_to) = if date.is_note() {
        (None, None)
    } else {
        (date.date_from(), date.date_to())
    };

    let (material, technique) = material_splitter::split(row.material_technique.as_deref());

    OutputRecord {
        acc_num: row.acc_num.clone(),
        english_title: titles.english,
        russian_title: titles.russian,
        description: row.description.clone(),
        date_from,
        date_to,
        date_note: date.note_text().map(str::to_string),
        material,
        technique,
        size: row.size.clone(),
    }
}
