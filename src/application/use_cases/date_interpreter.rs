// ============================================================
// DATE INTERPRETER
// ============================================================
// Classify a free-text date expression as a year range or a note

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::catalog::DateResult;

/// A named date rule; `None` means the rule did not match
pub struct DateRule {
    pub name: &'static str,
    pub apply: fn(&str) -> Option<DateResult>,
}

/// Rules in precedence order, first match wins
///
/// Blank input is handled before the table is consulted and the
/// "Date absent" note is the fallback when no rule matches.
pub const DATE_RULES: &[DateRule] = &[
    DateRule {
        name: "exact_date",
        apply: exact_date,
    },
    DateRule {
        name: "numeric_range",
        apply: numeric_range,
    },
    DateRule {
        name: "century_keyword",
        apply: century_keyword,
    },
    DateRule {
        name: "single_year",
        apply: single_year,
    },
];

/// Century/era keywords checked in order: (required tokens, from, to)
const CENTURY_KEYWORDS: &[(&[&str], i64, i64)] = &[
    (&["нач", "XIX"], 1800, 1830),
    (&["кон", "XIX"], 1870, 1900),
    (&["втор пол", "XVIII"], 1750, 1800),
    (&["XVIII"], 1700, 1800),
    (&["XVII"], 1600, 1700),
];

/// One or two digit day and month, exactly four digit year
static EXACT_DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}-\d{1,2}-\d{4}$").unwrap());

const EXACT_DATE_INPUT_FORMAT: &str = "%d-%m-%Y";
const EXACT_DATE_NOTE_FORMAT: &str = "%d.%m.%Y";

const MIN_SINGLE_YEAR: i64 = 1000;
const MAX_SINGLE_YEAR: i64 = 9999;

/// Interpret a raw date cell. Never fails.
pub fn interpret(raw: Option<&str>) -> DateResult {
    let date = match raw.map(str::trim) {
        Some(date) if !date.is_empty() => date,
        _ => return DateResult::absent(),
    };

    for rule in DATE_RULES {
        if let Some(result) = (rule.apply)(date) {
            tracing::trace!(rule = rule.name, input = date, "date rule matched");
            return result;
        }
    }

    tracing::debug!(input = date, "no date rule matched");
    DateResult::absent()
}

/// "13-06-1762" becomes the note "13.06.1762"
fn exact_date(date: &str) -> Option<DateResult> {
    if date.matches('-').count() != 2 || !EXACT_DATE_SHAPE.is_match(date) {
        return None;
    }

    NaiveDate::parse_from_str(date, EXACT_DATE_INPUT_FORMAT)
        .ok()
        .map(|parsed| DateResult::note(parsed.format(EXACT_DATE_NOTE_FORMAT).to_string()))
}

/// "1785-1790"; bounds are not checked for order
fn numeric_range(date: &str) -> Option<DateResult> {
    let (from, to) = date.split_once('-')?;
    if to.contains('-') {
        return None;
    }

    Some(DateResult::range(parse_digits(from)?, parse_digits(to)?))
}

fn century_keyword(date: &str) -> Option<DateResult> {
    CENTURY_KEYWORDS
        .iter()
        .find(|(tokens, _, _)| tokens.iter().all(|token| date.contains(token)))
        .map(|(_, from, to)| DateResult::range(*from, *to))
}

fn single_year(date: &str) -> Option<DateResult> {
    parse_digits(date)
        .filter(|year| (MIN_SINGLE_YEAR..=MAX_SINGLE_YEAR).contains(year))
        .map(|year| DateResult::range(year, year))
}

/// Parse a non-empty, all-ASCII-digit string
fn parse_digits(value: &str) -> Option<i64> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}
