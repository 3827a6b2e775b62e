use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder};

use crate::entities::categories;

pub async fn list_categories<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<categories::Model>, sea_orm::DbErr> {
    categories::Entity::find()
        .order_by_asc(categories::Column::Id)
        .all(conn)
        .await
}

pub async fn find_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<categories::Model>, sea_orm::DbErr> {
    categories::Entity::find_by_id(id).one(conn).await
}
