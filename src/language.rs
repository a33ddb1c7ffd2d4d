//! Language catalog for the fallback translation engine
//!
//! The surrounding system owns the authoritative language catalog; this
//! module mirrors it as an immutable registry built once at startup. A
//! built-in catalog covers every language the engine has rules or templates
//! for, and `LanguageRegistry::from_json_file` lets the CLI consume the
//! system's catalog file directly.

use crate::error::{FallbackError, FallbackResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// A translatable programming language
///
/// `id` is a lowercase identifier used for all registry and rule lookups
/// (e.g. "python", "cpp"); `display_name` is the human-readable form shown
/// in guidance output (e.g. "Python", "C++").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

impl Language {
    pub fn new(id: &str, display_name: &str) -> Self {
        Language {
            id: id.to_lowercase(),
            display_name: display_name.to_owned(),
        }
    }
}

/// Immutable catalog of known languages, keyed by lowercase id
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    languages: HashMap<String, Language>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        LanguageRegistry {
            languages: HashMap::new(),
        }
    }

    /// The built-in catalog: every language the engine has a template or a
    /// pairwise chain for, plus the generic-only targets the editor offers.
    pub fn builtin() -> Self {
        let mut registry = LanguageRegistry::new();
        for (id, name) in [
            ("python", "Python"),
            ("javascript", "JavaScript"),
            ("typescript", "TypeScript"),
            ("java", "Java"),
            ("csharp", "C#"),
            ("cpp", "C++"),
            ("c", "C"),
            ("go", "Go"),
            ("ruby", "Ruby"),
            ("php", "PHP"),
            ("swift", "Swift"),
            ("kotlin", "Kotlin"),
            ("rust", "Rust"),
        ] {
            registry.with_language(Language::new(id, name));
        }
        registry
    }

    pub fn with_language(&mut self, language: Language) -> &mut Self {
        self.languages.insert(language.id.clone(), language);
        self
    }

    /// Look up a language by id (case-insensitive)
    pub fn get(&self, id: &str) -> Option<&Language> {
        self.languages.get(&id.to_lowercase())
    }

    /// Look up a language by id, with an error suitable for CLI reporting
    pub fn resolve(&self, id: &str) -> FallbackResult<&Language> {
        self.get(id)
            .ok_or_else(|| FallbackError::UnknownLanguage(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// All languages, sorted by id for stable listing output
    pub fn all(&self) -> Vec<&Language> {
        let mut all: Vec<&Language> = self.languages.values().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    /// Load a catalog from a JSON file
    ///
    /// The JSON file should be an array of language objects:
    /// ```json
    /// [
    ///     { "id": "python", "displayName": "Python" },
    ///     { "id": "javascript", "displayName": "JavaScript" }
    /// ]
    /// ```
    ///
    /// # Errors
    /// - File not found or unreadable
    /// - Invalid JSON or wrong shape
    pub fn from_json_file(path: &Path) -> FallbackResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            FallbackError::CatalogError(format!("Failed to read file '{}': {}", path.display(), e))
        })?;

        let entries: Vec<Language> = serde_json::from_str(&content).map_err(|e| {
            FallbackError::CatalogError(format!(
                "Failed to parse JSON from '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut registry = LanguageRegistry::new();
        for entry in entries {
            // Normalize the id on the way in; lookups are lowercase
            registry.with_language(Language::new(&entry.id, &entry.display_name));
        }

        if registry.is_empty() {
            return Err(FallbackError::CatalogError(format!(
                "No languages found in catalog '{}'",
                path.display()
            )));
        }

        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_id_is_lowercased() {
        let lang = Language::new("Python", "Python");
        assert_eq!(lang.id, "python");
        assert_eq!(lang.display_name, "Python");
    }

    #[test]
    fn test_builtin_catalog_has_core_languages() {
        let registry = LanguageRegistry::builtin();
        for id in ["python", "javascript", "java", "cpp", "c", "csharp"] {
            assert!(registry.get(id).is_some(), "missing builtin language {}", id);
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = LanguageRegistry::builtin();
        assert_eq!(registry.get("PYTHON"), registry.get("python"));
    }

    #[test]
    fn test_resolve_unknown_language() {
        let registry = LanguageRegistry::builtin();
        match registry.resolve("cobol") {
            Err(FallbackError::UnknownLanguage(id)) => assert_eq!(id, "cobol"),
            other => panic!("Expected UnknownLanguage, got {:?}", other),
        }
    }

    #[test]
    fn test_all_is_sorted_by_id() {
        let registry = LanguageRegistry::builtin();
        let ids: Vec<&str> = registry.all().iter().map(|l| l.id.as_str()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_from_json_file_missing() {
        let result = LanguageRegistry::from_json_file(Path::new("/nonexistent/catalog.json"));
        assert!(matches!(result, Err(FallbackError::CatalogError(_))));
    }

    #[test]
    fn test_language_deserializes_display_name() {
        let lang: Language =
            serde_json::from_str(r#"{ "id": "Go", "displayName": "Go" }"#).unwrap();
        assert_eq!(lang.id, "Go"); // raw deserialization keeps the id as-is
        assert_eq!(lang.display_name, "Go");
    }
}
