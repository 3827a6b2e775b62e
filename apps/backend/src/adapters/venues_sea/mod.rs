use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, NotSet, QueryOrder, Set,
};

use crate::entities::venues;

pub mod dto;

pub use dto::{VenueCreate, VenueUpdate};

pub async fn list_venues<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<venues::Model>, sea_orm::DbErr> {
    venues::Entity::find()
        .order_by_asc(venues::Column::Id)
        .all(conn)
        .await
}

pub async fn find_venue<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<venues::Model>, sea_orm::DbErr> {
    venues::Entity::find_by_id(id).one(conn).await
}

pub async fn create_venue<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: VenueCreate,
) -> Result<venues::Model, sea_orm::DbErr> {
    venues::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        city: Set(dto.city),
        state: Set(dto.state),
        address: Set(dto.address),
        phone: Set(dto.phone),
        image_link: Set(dto.image_link),
        facebook_link: Set(dto.facebook_link),
        website: Set(dto.website),
        genres: Set(dto.genres),
        seeking_talent: Set(dto.seeking_talent),
        seeking_description: Set(dto.seeking_description),
    }
    .insert(conn)
    .await
}

/// Apply `dto` to venue `id`; `RecordNotFound` when it does not exist.
pub async fn update_venue<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    dto: VenueUpdate,
) -> Result<venues::Model, sea_orm::DbErr> {
    let existing = venues::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound(format!("venues.id={id}")))?;

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
    if let Some(v) = dto.address {
        active.address = Set(v);
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
    if let Some(v) = dto.seeking_talent {
        active.seeking_talent = Set(v);
    }
    if let Some(v) = dto.seeking_description {
        active.seeking_description = Set(v);
    }

    if !active.is_changed() {
        return Ok(existing);
    }
    active.update(conn).await
}

/// Number of rows removed (0 or 1). Shows at the venue cascade.
pub async fn delete_venue<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = venues::Entity::delete_by_id(id).exec(conn).await?;
    Ok(res.rows_affected)
}
