// ============================================================
// MATERIAL / TECHNIQUE SPLITTER
// ============================================================

/// Split "material, technique" on commas
///
/// Missing parts are empty strings; segments past the second are dropped.
pub fn split(raw: Option<&str>) -> (String, String) {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return (String::new(), String::new()),
    };

    let mut parts = raw.split(',').map(str::trim);
    let material = parts.next().unwrap_or_default().to_string();
    let technique = parts.next().unwrap_or_default().to_string();

    (material, technique)
}
