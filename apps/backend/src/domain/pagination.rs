//! Fixed-size pagination over ordered sequences.

use std::num::NonZeroUsize;

use crate::errors::domain::{DomainError, ValidationKind};

/// Default number of items per page (`QUESTIONS_PER_PAGE`).
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(NonZeroUsize);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(NonZeroUsize::MIN);

    pub fn new(n: i64) -> Result<Self, DomainError> {
        usize::try_from(n)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::InvalidPage,
                    format!("page must be a positive integer, got {n}"),
                )
            })
    }

    /// Parse the raw `page` query value. Absent means the first page.
    pub fn parse(raw: Option<&str>) -> Result<Self, DomainError> {
        let Some(raw) = raw else {
            return Ok(Self::FIRST);
        };
        let n = raw.trim().parse::<i64>().map_err(|_| {
            DomainError::validation(
                ValidationKind::InvalidPage,
                format!("page must be a positive integer, got '{raw}'"),
            )
        })?;
        Self::new(n)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

/// Non-zero page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    pub fn new(n: usize) -> Option<Self> {
        NonZeroUsize::new(n).map(Self)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN))
    }
}

/// The slice of `items` shown on `page`.
///
/// Empty when the page starts at or past the end; never an error.
pub fn page<T>(items: &[T], page: PageNumber, size: PageSize) -> &[T] {
    let Some(start) = (page.get() - 1).checked_mul(size.get()) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size.get()).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `len` items.
pub fn page_count(len: usize, size: PageSize) -> usize {
    len.div_ceil(size.get())
}
