//! Category identity and category filtering for the question bank.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Store-assigned category identifier. Integer in columns, JSON and paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub i64);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Anything that belongs to exactly one category.
pub trait Categorized {
    fn category_id(&self) -> CategoryId;
}

/// Items whose category equals `category`, in input order.
///
/// An empty result is not an error; callers decide whether the category
/// itself exists.
pub fn filter_by_category<T: Categorized>(items: &[T], category: CategoryId) -> Vec<&T> {
    items
        .iter()
        .filter(|item| item.category_id() == category)
        .collect()
}
