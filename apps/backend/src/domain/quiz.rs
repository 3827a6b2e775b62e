//! Quiz selection: pick a not-yet-asked question uniformly at random.
//!
//! The selector is memoryless. Clients send the ids already asked and the
//! scope; each call filters the pool and draws one question. The random
//! source is injected so tests can seed it.

use std::collections::HashSet;
use std::sync::Mutex;

use rand::prelude::*;

use super::catalog::{filter_by_category, Categorized, CategoryId};
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};

/// Anything with a store-assigned integer id.
pub trait Identified {
    fn id(&self) -> i64;
}

/// Which questions a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(CategoryId),
}

impl QuizScope {
    /// `None` or id `0` means every category.
    pub fn from_category_id(id: Option<i64>) -> Self {
        match id {
            None | Some(0) => Self::All,
            Some(id) => Self::Category(CategoryId(id)),
        }
    }

    /// Reject a specific category the store does not know.
    pub fn validate(self, known: &[CategoryId]) -> Result<Self, DomainError> {
        match self {
            Self::Category(id) if !known.contains(&id) => Err(DomainError::not_found(
                NotFoundKind::Category,
                format!("Category {id} not found"),
            )),
            scope => Ok(scope),
        }
    }

    /// Candidate pool for this scope, in input order.
    pub fn pool<'a, T: Categorized>(&self, questions: &'a [T]) -> Vec<&'a T> {
        match self {
            Self::All => questions.iter().collect(),
            Self::Category(id) => filter_by_category(questions, *id),
        }
    }
}

/// Outcome of one draw.
#[derive(Debug, PartialEq, Eq)]
pub enum QuizPick<'a, T> {
    Question(&'a T),
    NoMoreQuestions,
}

/// Draw uniformly from `pool` minus `previous`.
pub fn pick_next<'a, T, R>(pool: &[&'a T], previous: &HashSet<i64>, rng: &mut R) -> QuizPick<'a, T>
where
    T: Identified,
    R: Rng + ?Sized,
{
    let remaining: Vec<&'a T> = pool
        .iter()
        .copied()
        .filter(|q| !previous.contains(&q.id()))
        .collect();

    match remaining.choose(rng) {
        Some(q) => QuizPick::Question(*q),
        None => QuizPick::NoMoreQuestions,
    }
}

/// Shared random source for quiz draws.
///
/// Wrapped in a `Mutex` because handlers only hold `&AppState`.
pub struct QuizRng {
    rng: Mutex<StdRng>,
}

impl std::fmt::Debug for QuizRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizRng").finish_non_exhaustive()
    }
}

impl QuizRng {
    /// `Some(seed)` gives reproducible draws; `None` seeds from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    pub fn pick<'a, T: Identified>(
        &self,
        pool: &[&'a T],
        previous: &HashSet<i64>,
    ) -> Result<QuizPick<'a, T>, DomainError> {
        let mut rng = self.rng.lock().map_err(|e| {
            DomainError::infra(
                InfraErrorKind::Other("QuizRng".into()),
                format!("quiz RNG lock poisoned: {e}"),
            )
        })?;
        Ok(pick_next(pool, previous, &mut *rng))
    }
}

impl Default for QuizRng {
    fn default() -> Self {
        Self::new(None)
    }
}
