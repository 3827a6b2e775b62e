use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, NotSet, QueryOrder, Set,
};

use crate::entities::drinks;

pub mod dto;

pub use dto::{DrinkCreate, DrinkUpdate};

pub async fn list_drinks<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<drinks::Model>, sea_orm::DbErr> {
    drinks::Entity::find()
        .order_by_asc(drinks::Column::Id)
        .all(conn)
        .await
}

pub async fn create_drink<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: DrinkCreate,
) -> Result<drinks::Model, sea_orm::DbErr> {
    drinks::ActiveModel {
        id: NotSet,
        title: Set(dto.title),
        recipe: Set(dto.recipe),
    }
    .insert(conn)
    .await
}

/// Returns `None` when drink `id` does not exist.
pub async fn update_drink<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    dto: DrinkUpdate,
) -> Result<Option<drinks::Model>, sea_orm::DbErr> {
    let Some(existing) = drinks::Entity::find_by_id(id).one(conn).await? else {
        return Ok(None);
    };

    let mut active = existing.clone().into_active_model();
    if let Some(title) = dto.title {
        active.title = Set(title);
    }
    if let Some(recipe) = dto.recipe {
        active.recipe = Set(recipe);
    }

    if !active.is_changed() {
        return Ok(Some(existing));
    }
    active.update(conn).await.map(Some)
}

pub async fn delete_drink<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = drinks::Entity::delete_by_id(id).exec(conn).await?;
    Ok(res.rows_affected)
}
