use serde::{Deserialize, Serialize};

/// English and Russian titles pulled from a description
///
/// `russian` is only populated when `english` is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleResult {
    pub english: Option<String>,
    pub russian: Option<String>,
}
