//! Embedded default question catalogs
//!
//! `qadesk init` seeds questions.json from the catalog shipped in the
//! binary, one question per line. Blank lines and `#` comments are skipped.

use rust_embed::Embed;

#[derive(Embed)]
#[folder = "assets/questions/"]
struct EmbeddedCatalogs;

/// The default ISO 9001 internal audit question set
pub fn default_questions() -> Vec<String> {
    catalog("iso9001.txt").unwrap_or_default()
}

/// Load a named catalog from the embedded assets
pub fn catalog(name: &str) -> Option<Vec<String>> {
    let file = EmbeddedCatalogs::get(name)?;
    let text = std::str::from_utf8(file.data.as_ref()).ok()?;
    Some(
        text.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(String::from)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_questions_not_empty() {
        let questions = default_questions();
        assert!(questions.len() >= 5);
        assert!(questions.iter().all(|q| !q.trim().is_empty()));
    }

    #[test]
    fn test_unknown_catalog() {
        assert!(catalog("nonexistent.txt").is_none());
    }
}
