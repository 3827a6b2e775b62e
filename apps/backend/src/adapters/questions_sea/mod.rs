use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::questions;

pub mod dto;

pub use dto::QuestionCreate;

pub async fn list_questions<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<questions::Model>, sea_orm::DbErr> {
    questions::Entity::find()
        .order_by_asc(questions::Column::Id)
        .all(conn)
        .await
}

pub async fn list_questions_in_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category: i64,
) -> Result<Vec<questions::Model>, sea_orm::DbErr> {
    questions::Entity::find()
        .filter(questions::Column::Category.eq(category))
        .order_by_asc(questions::Column::Id)
        .all(conn)
        .await
}

pub async fn create_question<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: QuestionCreate,
) -> Result<questions::Model, sea_orm::DbErr> {
    questions::ActiveModel {
        id: NotSet,
        question: Set(dto.question),
        answer: Set(dto.answer),
        category: Set(dto.category),
        difficulty: Set(dto.difficulty),
    }
    .insert(conn)
    .await
}

/// Number of rows removed (0 or 1).
pub async fn delete_question<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = questions::Entity::delete_by_id(id).exec(conn).await?;
    Ok(res.rows_affected)
}
