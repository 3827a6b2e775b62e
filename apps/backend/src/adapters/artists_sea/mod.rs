use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, NotSet, QueryOrder, Set,
};

use crate::entities::artists;

pub mod dto;

pub use dto::{ArtistCreate, ArtistUpdate};

pub async fn list_artists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<artists::Model>, sea_orm::DbErr> {
    artists::Entity::find()
        .order_by_asc(artists::Column::Id)
        .all(conn)
        .await
}

pub async fn find_artist<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<artists::Model>, sea_orm::DbErr> {
    artists::Entity::find_by_id(id).one(conn).await
}

pub async fn create_artist<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ArtistCreate,
) -> Result<artists::Model, sea_orm::DbErr> {
    artists::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        city: Set(dto.city),
        state: Set(dto.state),
        phone: Set(dto.phone),
        image_link: Set(dto.image_link),
        facebook_link: Set(dto.facebook_link),
        website: Set(dto.website),
        genres: Set(dto.genres),
        seeking_venue: Set(dto.seeking_venue),
        seeking_description: Set(dto.seeking_description),
    }
    .insert(conn)
    .await
}

pub async fn update_artist<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    dto: ArtistUpdate,
) -> Result<artists::Model, sea_orm::DbErr> {
    let existing = artists::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound(format!("artists.id={id}")))?;

    let mut active = existing.clone().into_active_model();
    if let Some(v) = dto.name {
        active.name = Set(v);
    }
    if let Some(v) = dto.city {
        active.city = Set(v);
    }
    if let Some(v) = dto.state {
        active.state = Set(v);
    }
    if let Some(v) = dto.phone {
        active.phone = Set(v);
    }
    if let Some(v) = dto.image_link {
        active.image_link = Set(v);
    }
    if let Some(v) = dto.facebook_link {
        active.facebook_link = Set(v);
    }
    if let Some(v) = dto.website {
        active.website = Set(v);
    }
    if let Some(v) = dto.genres {
        active.genres = Set(v);
    }
    if let Some(v) = dto.seeking_venue {
        active.seeking_venue = Set(v);
    }
    if let Some(v) = dto.seeking_description {
        active.seeking_description = Set(v);
    }

    if !active.is_changed() {
        return Ok(existing);
    }
    active.update(conn).await
}

pub async fn delete_artist<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = artists::Entity::delete_by_id(id).exec(conn).await?;
    Ok(res.rows_affected)
}
