// ============================================================
// DATE RESULT
// ============================================================
// Outcome of interpreting a free-text date expression

use serde::{Deserialize, Serialize};

/// Note recorded whenever a date cannot be reduced to a range
pub const DATE_ABSENT_NOTE: &str = "Date absent";

/// Either an inclusive year range or a free-text note, never both
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateResult {
    Range { from: i64, to: i64 },
    Note(String),
}

impl DateResult {
    pub fn range(from: i64, to: i64) -> Self {
        DateResult::Range { from, to }
    }

    pub fn note(text: impl Into<String>) -> Self {
        DateResult::Note(text.into())
    }

    /// The fixed "Date absent" note
    pub fn absent() -> Self {
        Self::note(DATE_ABSENT_NOTE)
    }

    pub fn date_from(&self) -> Option<i64> {
        match self {
            DateResult::Range { from, .. } => Some(*from),
            DateResult::Note(_) => None,
        }
    }

    pub fn date_to(&self) -> Option<i64> {
        match self {
            DateResult::Range { to, .. } => Some(*to),
            DateResult::Note(_) => None,
        }
    }

    pub fn note_text(&self) -> Option<&str> {
        match self {
            DateResult::Range { .. } => None,
            DateResult::Note(text) => Some(text),
        }
    }

    pub fn is_note(&self) -> bool {
        matches!(self, DateResult::Note(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_has_no_bounds() {
        let result = DateResult::absent();
        assert_eq!(result.date_from(), None);
        assert_eq!(result.date_to(), None);
        assert_eq!(result.note_text(), Some("Date absent"));
    }

    #[test]
    fn test_range_has_no_note() {
        let result = DateResult::range(1785, 1790);
        assert_eq!(result.date_from(), Some(1785));
        assert_eq!(result.date_to(), Some(1790));
        assert_eq!(result.note_text(), None);
    }
}
