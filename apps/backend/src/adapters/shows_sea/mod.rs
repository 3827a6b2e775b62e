use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::{artists, shows, venues};

pub mod dto;

pub use dto::ShowCreate;

/// Every show with its artist and venue, ordered by show id.
pub async fn list_shows_with_parties<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<(shows::Model, artists::Model, venues::Model)>, sea_orm::DbErr> {
    let with_artists = shows::Entity::find()
        .find_also_related(artists::Entity)
        .order_by_asc(shows::Column::Id)
        .all(conn)
        .await?;

    let venues_by_id: std::collections::HashMap<i64, venues::Model> = venues::Entity::find()
        .all(conn)
        .await?
        .into_iter()
        .map(|v| (v.id, v))
        .collect();

    with_artists
        .into_iter()
        .map(|(show, artist)| {
            let artist = artist.ok_or_else(|| {
                sea_orm::DbErr::RecordNotFound(format!("artists.id={} for show", show.artist_id))
            })?;
            let venue = venues_by_id.get(&show.venue_id).cloned().ok_or_else(|| {
                sea_orm::DbErr::RecordNotFound(format!("venues.id={} for show", show.venue_id))
            })?;
            Ok((show, artist, venue))
        })
        .collect()
}

/// Shows at `venue_id` with their artists, ordered by show id.
pub async fn shows_at_venue<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    venue_id: i64,
) -> Result<Vec<(shows::Model, Option<artists::Model>)>, sea_orm::DbErr> {
    shows::Entity::find()
        .filter(shows::Column::VenueId.eq(venue_id))
        .find_also_related(artists::Entity)
        .order_by_asc(shows::Column::Id)
        .all(conn)
        .await
}

/// Shows by `artist_id` with their venues, ordered by show id.
pub async fn shows_by_artist<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    artist_id: i64,
) -> Result<Vec<(shows::Model, Option<venues::Model>)>, sea_orm::DbErr> {
    shows::Entity::find()
        .filter(shows::Column::ArtistId.eq(artist_id))
        .find_also_related(venues::Entity)
        .order_by_asc(shows::Column::Id)
        .all(conn)
        .await
}

/// Bare shows, for upcoming counts.
pub async fn list_shows<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<shows::Model>, sea_orm::DbErr> {
    shows::Entity::find()
        .order_by_asc(shows::Column::Id)
        .all(conn)
        .await
}

pub async fn create_show<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ShowCreate,
) -> Result<shows::Model, sea_orm::DbErr> {
    shows::ActiveModel {
        id: NotSet,
        artist_id: Set(dto.artist_id),
        venue_id: Set(dto.venue_id),
        start_time: Set(dto.start_time),
    }
    .insert(conn)
    .await
}
