//! Domain layer: pure, store-independent logic for the three route families.

pub mod areas;
pub mod catalog;
pub mod genres;
pub mod pagination;
pub mod quiz;
pub mod recipe;
pub mod search;
pub mod timeline;

// Re-exports for ergonomics
pub use catalog::{filter_by_category, Categorized, CategoryId};
pub use pagination::{page, page_count, PageNumber, PageSize};
pub use quiz::{Identified, QuizPick, QuizRng, QuizScope};
pub use search::SearchTerm;
pub use timeline::{Scheduled, Timeline};
