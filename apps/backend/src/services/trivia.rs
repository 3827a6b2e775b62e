//! Trivia: question bank pages, category views, search and quiz draws.

use std::collections::HashSet;

use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use crate::domain::{
    page, CategoryId, PageNumber, PageSize, QuizPick, QuizRng, QuizScope, SearchTerm,
};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::categories::{self, Category};
use crate::repos::questions::{self, NewQuestion, Question};

/// Accepted difficulty range.
pub const DIFFICULTY_RANGE: std::ops::RangeInclusive<i32> = 1..=5;

/// One page of questions plus the size of the collection it was cut from.
#[derive(Debug, Clone)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Validate raw question fields.
///
/// Text is trimmed and must be non-empty; category ids are positive;
/// difficulty lies in [`DIFFICULTY_RANGE`]. Whether the category exists is
/// left to the store.
pub fn validate_new_question(
    question: &str,
    answer: &str,
    category: i64,
    difficulty: i32,
) -> Result<NewQuestion, DomainError> {
    let invalid = |detail: String| DomainError::validation(ValidationKind::InvalidQuestion, detail);

    let question = question.trim();
    if question.is_empty() {
        return Err(invalid("question must not be empty".into()));
    }
    let answer = answer.trim();
    if answer.is_empty() {
        return Err(invalid("answer must not be empty".into()));
    }
    if category <= 0 {
        return Err(invalid(format!("category must be a positive id, got {category}")));
    }
    if !DIFFICULTY_RANGE.contains(&difficulty) {
        return Err(invalid(format!(
            "difficulty must be between {} and {}, got {difficulty}",
            DIFFICULTY_RANGE.start(),
            DIFFICULTY_RANGE.end()
        )));
    }

    Ok(NewQuestion {
        question: question.to_string(),
        answer: answer.to_string(),
        category: CategoryId(category),
        difficulty,
    })
}

fn cut(all: &[Question], page_number: PageNumber, size: PageSize) -> QuestionPage {
    QuestionPage {
        questions: page(all, page_number, size).to_vec(),
        total_questions: all.len(),
    }
}

/// Trivia domain service.
#[derive(Debug, Default, Clone, Copy)]
pub struct TriviaService;

impl TriviaService {
    pub fn new() -> Self {
        Self
    }

    pub async fn categories<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Category>, DomainError> {
        categories::list_categories(conn).await
    }

    /// Category labels in id order, as listed alongside question pages.
    pub async fn category_labels<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<String>, DomainError> {
        Ok(self
            .categories(conn)
            .await?
            .into_iter()
            .map(|c| c.kind)
            .collect())
    }

    /// A page of the whole bank; a page with no questions is `NotFound(Page)`.
    pub async fn questions_page<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        page_number: PageNumber,
        size: PageSize,
    ) -> Result<QuestionPage, DomainError> {
        let all = questions::list_questions(conn).await?;
        let current = cut(&all, page_number, size);

        if current.questions.is_empty() {
            return Err(DomainError::not_found(
                NotFoundKind::Page,
                format!(
                    "page {} is past the last page of {} questions",
                    page_number.get(),
                    all.len()
                ),
            ));
        }
        Ok(current)
    }

    /// A page of one category. The category must exist; an empty page is not an error.
    pub async fn category_questions<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        category: CategoryId,
        page_number: PageNumber,
        size: PageSize,
    ) -> Result<(Category, QuestionPage), DomainError> {
        let category = categories::require_category(conn, category).await?;
        let in_category = questions::list_questions_in_category(conn, category.id).await?;
        Ok((category, cut(&in_category, page_number, size)))
    }

    pub async fn create_question<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        new: NewQuestion,
    ) -> Result<Question, DomainError> {
        let created = questions::create_question(conn, new).await?;
        info!(question_id = created.id, category = %created.category, "Question created");
        Ok(created)
    }

    pub async fn delete_question<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<(), DomainError> {
        questions::delete_question(conn, id).await?;
        info!(question_id = id, "Question deleted");
        Ok(())
    }

    /// Page of the bank after a write; past-the-end pages are simply empty here.
    pub async fn questions_after_write<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        page_number: PageNumber,
        size: PageSize,
    ) -> Result<QuestionPage, DomainError> {
        let all = questions::list_questions(conn).await?;
        Ok(cut(&all, page_number, size))
    }

    /// Questions whose text contains `term`, ignoring case, in id order.
    pub async fn search_questions<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        term: &SearchTerm,
    ) -> Result<Vec<Question>, DomainError> {
        let all = questions::list_questions(conn).await?;
        let hits: Vec<Question> = term
            .filter(&all, |q| q.question.as_str())
            .into_iter()
            .cloned()
            .collect();
        debug!(hits = hits.len(), "Question search");
        Ok(hits)
    }

    /// Draw the next quiz question, or `None` once the scope is exhausted.
    pub async fn next_quiz_question<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        rng: &QuizRng,
        scope: QuizScope,
        previous: &HashSet<i64>,
    ) -> Result<Option<Question>, DomainError> {
        let known: Vec<CategoryId> = self
            .categories(conn)
            .await?
            .into_iter()
            .map(|c| c.id)
            .collect();
        let scope = scope.validate(&known)?;

        let all = questions::list_questions(conn).await?;
        let pool = scope.pool(&all);

        match rng.pick(&pool, previous)? {
            QuizPick::Question(q) => Ok(Some(q.clone())),
            QuizPick::NoMoreQuestions => {
                debug!(?scope, asked = previous.len(), "Quiz exhausted");
                Ok(None)
            }
        }
    }
}
