//! Case-insensitive substring search shared by questions, venues and artists.

use crate::errors::domain::{DomainError, ValidationKind};

/// A validated, non-blank search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    folded: String,
}

impl SearchTerm {
    /// Surrounding whitespace is ignored; a blank term is rejected.
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::InvalidSearchTerm,
                "search term must not be empty",
            ));
        }
        Ok(Self {
            raw: trimmed.to_string(),
            folded: trimmed.to_lowercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.folded)
    }

    /// Items whose `field` contains the term, in input order.
    pub fn filter<'a, T, F>(&self, items: &'a [T], field: F) -> Vec<&'a T>
    where
        F: Fn(&T) -> &str,
    {
        items.iter().filter(|item| self.matches(field(item))).collect()
    }
}
