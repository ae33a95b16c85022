//! Read-only question library loaded from JSON.

use std::path::Path;

use interview_core::model::{CategoryName, CategoryPool, QuestionBlock};
use serde::Deserialize;
use thiserror::Error;

const SAMPLE_LIBRARY: &str = include_str!("../data/sample_library.json");

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LibraryError {
    #[error("failed to read library: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid library json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("category listed twice: {0}")]
    DuplicateCategory(CategoryName),

    #[error("unknown category: {0}")]
    UnknownCategory(CategoryName),
}

#[derive(Deserialize)]
struct LibraryEntry {
    name: CategoryName,
    #[serde(default)]
    questions: Vec<QuestionBlock>,
}

/// All categories the user can pick from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionLibrary {
    categories: CategoryPool,
}

impl QuestionLibrary {
    /// Parse a library from its JSON form: an array of `{ name, questions }`.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::Parse` for malformed input (including invalid
    /// names or blocks) and `LibraryError::DuplicateCategory` when a name repeats.
    pub fn from_json_str(raw: &str) -> Result<Self, LibraryError> {
        let entries: Vec<LibraryEntry> = serde_json::from_str(raw)?;
        let mut categories = CategoryPool::new();
        for entry in entries {
            if categories.contains(&entry.name) {
                return Err(LibraryError::DuplicateCategory(entry.name));
            }
            categories.insert(entry.name, entry.questions);
        }
        Ok(Self { categories })
    }

    /// # Errors
    ///
    /// Returns `LibraryError::Io` if the file cannot be read, or any error of
    /// [`QuestionLibrary::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LibraryError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let library = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            categories = library.categories.category_names().count(),
            questions = library.categories.total_questions(),
            "question library loaded"
        );
        Ok(library)
    }

    /// Library bundled with the binary.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled file is malformed.
    pub fn sample() -> Result<Self, LibraryError> {
        Self::from_json_str(SAMPLE_LIBRARY)
    }

    #[must_use]
    pub fn categories(&self) -> &CategoryPool {
        &self.categories
    }

    /// Pool containing only the requested categories, in the order given.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::UnknownCategory` for names not in the library.
    pub fn pool_for(&self, names: &[CategoryName]) -> Result<CategoryPool, LibraryError> {
        let mut pool = CategoryPool::new();
        for name in names {
            let blocks = self
                .categories
                .get(name)
                .ok_or_else(|| LibraryError::UnknownCategory(name.clone()))?;
            pool.insert(name.clone(), blocks.to_vec());
        }
        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(value: &str) -> CategoryName {
        CategoryName::new(value).unwrap()
    }

    #[test]
    fn sample_library_parses() {
        let library = QuestionLibrary::sample().unwrap();
        let names: Vec<_> = library
            .categories()
            .category_names()
            .map(CategoryName::as_str)
            .collect();
        assert_eq!(names, ["JavaScript", "CSS", "HTTP"]);
        assert_eq!(library.categories().total_questions(), 6);
    }

    #[test]
    fn duplicate_categories_are_rejected() {
        let raw = r#"[
            { "name": "JS", "questions": [] },
            { "name": " JS ", "questions": [] }
        ]"#;
        let err = QuestionLibrary::from_json_str(raw).unwrap_err();
        assert!(matches!(err, LibraryError::DuplicateCategory(ref dup) if dup == &name("JS")));
    }

    #[test]
    fn blank_category_name_is_a_parse_error() {
        let err = QuestionLibrary::from_json_str(r#"[{ "name": "  " }]"#).unwrap_err();
        assert!(matches!(err, LibraryError::Parse(_)));
    }

    #[test]
    fn pool_for_keeps_requested_order() {
        let library = QuestionLibrary::sample().unwrap();
        let pool = library.pool_for(&[name("HTTP"), name("CSS")]).unwrap();
        let names: Vec<_> = pool.category_names().map(CategoryName::as_str).collect();
        assert_eq!(names, ["HTTP", "CSS"]);
        assert_eq!(pool.total_questions(), 3);

        let err = library.pool_for(&[name("Haskell")]).unwrap_err();
        assert!(matches!(err, LibraryError::UnknownCategory(_)));
    }
}
