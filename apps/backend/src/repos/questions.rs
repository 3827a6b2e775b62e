//! Trivia question bank.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::questions_sea::{self as questions_adapter, QuestionCreate};
use crate::domain::{CategoryId, Categorized, Identified};
use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

impl Categorized for Question {
    fn category_id(&self) -> CategoryId {
        self.category
    }
}

impl Identified for Question {
    fn id(&self) -> i64 {
        self.id
    }
}

/// A question that passed request validation.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

/// All questions ordered by id.
pub async fn list_questions<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Question>, DomainError> {
    let rows = questions_adapter::list_questions(conn).await?;
    Ok(rows.into_iter().map(Question::from).collect())
}

pub async fn list_questions_in_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category: CategoryId,
) -> Result<Vec<Question>, DomainError> {
    let rows = questions_adapter::list_questions_in_category(conn, category.0).await?;
    Ok(rows.into_iter().map(Question::from).collect())
}

/// Insert; an unknown category is rejected by the store (FK) as `Unprocessable`.
pub async fn create_question<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    new: NewQuestion,
) -> Result<Question, DomainError> {
    let dto = QuestionCreate {
        question: new.question,
        answer: new.answer,
        category: new.category.0,
        difficulty: new.difficulty,
    };
    let row = questions_adapter::create_question(conn, dto).await?;
    Ok(Question::from(row))
}

/// Delete question `id`, or `NotFound(Question)` if there is none.
pub async fn delete_question<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<(), DomainError> {
    match questions_adapter::delete_question(conn, id).await? {
        0 => Err(DomainError::not_found(
            NotFoundKind::Question,
            format!("Question {id} not found"),
        )),
        _ => Ok(()),
    }
}

impl From<crate::entities::questions::Model> for Question {
    fn from(model: crate::entities::questions::Model) -> Self {
        Self {
            id: model.id,
            question: model.question,
            answer: model.answer,
            category: CategoryId(model.category),
            difficulty: model.difficulty,
        }
    }
}
