// ============================================================
// TITLE EXTRACTOR
// ============================================================
// English and Russian titles from a catalog description

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::catalog::TitleResult;

static QUOTED_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]+)""#).unwrap());

static LATIN_LETTER_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z]").unwrap());

static CATEGORY_LABEL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(Карикатура|Бытовой тип|Бытовая сцена):").unwrap());

/// Leftovers that are not a real title
const NOISE_TITLES: [&str; 3] = [".", ",", ""];

/// Extract English and Russian titles; English wins when present
pub fn extract(text: Option<&str>) -> TitleResult {
    let english = extract_english(text);
    let russian = extract_russian(text, english.is_some());
    TitleResult { english, russian }
}

/// Quoted fragments containing a Latin letter, joined with ", "
pub fn extract_english(text: Option<&str>) -> Option<String> {
    let text = text?;

    let names: Vec<&str> = QUOTED_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|fragment| LATIN_LETTER_PATTERN.is_match(fragment))
        .map(str::trim)
        .collect();

    if names.is_empty() {
        None
    } else {
        Some(names.join(", "))
    }
}

/// Description with the category label and quoted text removed
pub fn extract_russian(text: Option<&str>, english_present: bool) -> Option<String> {
    let text = match text {
        Some(text) if !english_present => text,
        _ => return None,
    };

    let without_label = CATEGORY_LABEL_PATTERN.replace(text, "");
    let without_quotes = QUOTED_PATTERN.replace_all(without_label.trim(), "");
    let cleaned = without_quotes.trim();

    if NOISE_TITLES.contains(&cleaned) || cleaned.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    Some(cleaned.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_from_quotes() {
        assert_eq!(
            extract_english(Some(r#"Карикатура: "Scene of Life""#)),
            Some("Scene of Life".to_string())
        );
    }

    #[test]
    fn test_english_joins_multiple_fragments_in_order() {
        assert_eq!(
            extract_english(Some(r#""The Dandy" и "Портрет" и " A Walk ""#)),
            Some("The Dandy, A Walk".to_string())
        );
    }

    #[test]
    fn test_cyrillic_quotes_are_not_english() {
        assert_eq!(extract_english(Some(r#"Сцена "Прогулка""#)), None);
        assert_eq!(extract_english(None), None);
    }

    #[test]
    fn test_english_suppresses_russian() {
        let titles = extract(Some(r#"Карикатура: "Scene of Life""#));
        assert_eq!(titles.english.as_deref(), Some("Scene of Life"));
        assert_eq!(titles.russian, None);
    }

    #[test]
    fn test_russian_strips_leading_label() {
        let titles = extract(Some("Карикатура: Бытовая сцена"));
        assert_eq!(titles.english, None);
        assert_eq!(titles.russian.as_deref(), Some("Бытовая сцена"));
    }

    #[test]
    fn test_only_first_label_is_stripped() {
        assert_eq!(
            extract_russian(Some("Бытовой тип: Бытовая сцена: Рынок"), false),
            Some("Бытовая сцена: Рынок".to_string())
        );
    }

    #[test]
    fn test_label_not_at_start_is_kept() {
        assert_eq!(
            extract_russian(Some("Лист. Карикатура: Рынок"), false),
            Some("Лист. Карикатура: Рынок".to_string())
        );
    }

    #[test]
    fn test_russian_removes_quoted_text() {
        assert_eq!(
            extract_russian(Some(r#"Бытовая сцена: Прогулка "Летний сад""#), false),
            Some("Прогулка".to_string())
        );
    }

    #[test]
    fn test_russian_noise_is_absent() {
        assert_eq!(extract_russian(Some(r#"Карикатура: "Рынок"."#), false), None);
        assert_eq!(extract_russian(Some("Бытовой тип:"), false), None);
        assert_eq!(extract_russian(Some(" , "), false), None);
        assert_eq!(extract_russian(Some("1823"), false), None);
        assert_eq!(extract_russian(None, false), None);
    }

    #[test]
    fn test_russian_skipped_when_english_present() {
        assert_eq!(extract_russian(Some("Бытовая сцена"), true), None);
    }
}
