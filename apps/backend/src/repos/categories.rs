//! Trivia categories.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::categories_sea as categories_adapter;
use crate::domain::CategoryId;
use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub kind: String,
}

pub async fn list_categories<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Category>, DomainError> {
    let rows = categories_adapter::list_categories(conn).await?;
    Ok(rows.into_iter().map(Category::from).collect())
}

/// The category, or `NotFound(Category)`.
pub async fn require_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: CategoryId,
) -> Result<Category, DomainError> {
    categories_adapter::find_category(conn, id.0)
        .await?
        .map(Category::from)
        .ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Category, format!("Category {id} not found"))
        })
}

impl From<crate::entities::categories::Model> for Category {
    fn from(model: crate::entities::categories::Model) -> Self {
        Self {
            id: CategoryId(model.id),
            kind: model.category_type,
        }
    }
}
