use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryError {
    #[error("category name cannot be empty")]
    EmptyName,

    #[error("category '{name}' has no words")]
    EmptyWordList { name: String },

    #[error("category '{name}' contains a blank word")]
    BlankWord { name: String },
}

//
// ─── CATEGORY NAME ─────────────────────────────────────────────────────────────
//

/// Validated name of a word category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CategoryName(String);

impl CategoryName {
    /// Creates a category name from the given string, trimming whitespace.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::EmptyName` if the trimmed name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, CategoryError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(CategoryError::EmptyName);
        }
        Ok(Self(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── WORD CATEGORY ─────────────────────────────────────────────────────────────
//

/// A named, ordered list of practice words.
///
/// Word order is the authoring order; sessions shuffle a copy and never
/// mutate the category itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCategory {
    name: CategoryName,
    words: Vec<String>,
}

impl WordCategory {
    /// Creates a category, validating the name and every word.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::EmptyName` for a blank name,
    /// `CategoryError::EmptyWordList` for an empty word list, and
    /// `CategoryError::BlankWord` if any word is blank after trimming.
    pub fn new(
        name: impl Into<String>,
        words: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, CategoryError> {
        let name = CategoryName::new(name)?;
        let words: Vec<String> = words.into_iter().map(Into::into).collect();

        if words.is_empty() {
            return Err(CategoryError::EmptyWordList {
                name: name.as_str().to_string(),
            });
        }
        if words.iter().any(|w| w.trim().is_empty()) {
            return Err(CategoryError::BlankWord {
                name: name.as_str().to_string(),
            });
        }

        Ok(Self { name, words })
    }

    #[must_use]
    pub fn name(&self) -> &CategoryName {
        &self.name
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words in this category.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
