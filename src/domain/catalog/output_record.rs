// ============================================================
// OUTPUT RECORD
// ============================================================
// One normalized row of the export table

use serde::{Deserialize, Serialize};

/// Normalized catalog record, serialized in header order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub acc_num: Option<String>,

    #[serde(rename = "eng_name")]
    pub english_title: Option<String>,

    #[serde(rename = "rus_name")]
    pub russian_title: Option<String>,

    /// Original description, kept verbatim
    pub description: Option<String>,

    pub date_from: Option<i64>,

    pub date_to: Option<i64>,

    #[serde(rename = "notes")]
    pub date_note: Option<String>,

    pub material: String,

    pub technique: String,

    pub size: Option<String>,
}

impl OutputRecord {
    /// Fixed export header, in column order
    pub const HEADER: [&'static str; 10] = [
        "acc_num",
        "eng_name",
        "rus_name",
        "description",
        "date_from",
        "date_to",
        "notes",
        "material",
        "technique",
        "size",
    ];
}
