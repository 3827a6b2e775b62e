//! Shows and their artist/venue projections.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::shows_sea::{self as shows_adapter, ShowCreate};
use crate::domain::Scheduled;
use crate::errors::domain::{DomainError, InfraErrorKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    pub id: i64,
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: OffsetDateTime,
}

/// A show as listed on its venue's page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueShow {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
}

/// A show as listed on its artist's page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistShow {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
}

/// A row of the show index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowListing {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
}

impl Scheduled for Show {
    fn start_time(&self) -> OffsetDateTime {
        self.start_time
    }
}

impl Scheduled for VenueShow {
    fn start_time(&self) -> OffsetDateTime {
        self.start_time
    }
}

impl Scheduled for ArtistShow {
    fn start_time(&self) -> OffsetDateTime {
        self.start_time
    }
}

fn dangling(show_id: i64, what: &str) -> DomainError {
    DomainError::infra(
        InfraErrorKind::DataCorruption,
        format!("show {show_id} references a missing {what}"),
    )
}

pub async fn list_shows<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Show>, DomainError> {
    let rows = shows_adapter::list_shows(conn).await?;
    Ok(rows.into_iter().map(Show::from).collect())
}

pub async fn list_show_listings<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<ShowListing>, DomainError> {
    let rows = shows_adapter::list_shows_with_parties(conn).await?;
    Ok(rows
        .into_iter()
        .map(|(show, artist, venue)| ShowListing {
            venue_id: venue.id,
            venue_name: venue.name,
            artist_id: artist.id,
            artist_name: artist.name,
            artist_image_link: artist.image_link,
            start_time: show.start_time,
        })
        .collect())
}

pub async fn shows_at_venue<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    venue_id: i64,
) -> Result<Vec<VenueShow>, DomainError> {
    shows_adapter::shows_at_venue(conn, venue_id)
        .await?
        .into_iter()
        .map(|(show, artist)| {
            let artist = artist.ok_or_else(|| dangling(show.id, "artist"))?;
            Ok(VenueShow {
                artist_id: artist.id,
                artist_name: artist.name,
                artist_image_link: artist.image_link,
                start_time: show.start_time,
            })
        })
        .collect()
}

pub async fn shows_by_artist<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    artist_id: i64,
) -> Result<Vec<ArtistShow>, DomainError> {
    shows_adapter::shows_by_artist(conn, artist_id)
        .await?
        .into_iter()
        .map(|(show, venue)| {
            let venue = venue.ok_or_else(|| dangling(show.id, "venue"))?;
            Ok(ArtistShow {
                venue_id: venue.id,
                venue_name: venue.name,
                venue_image_link: venue.image_link,
                start_time: show.start_time,
            })
        })
        .collect()
}

/// Insert; unknown artist or venue is rejected by the store (FK) as `Unprocessable`.
pub async fn create_show<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    artist_id: i64,
    venue_id: i64,
    start_time: OffsetDateTime,
) -> Result<Show, DomainError> {
    let dto = ShowCreate {
        artist_id,
        venue_id,
        start_time,
    };
    Ok(Show::from(shows_adapter::create_show(conn, dto).await?))
}

impl From<crate::entities::shows::Model> for Show {
    fn from(model: crate::entities::shows::Model) -> Self {
        Self {
            id: model.id,
            artist_id: model.artist_id,
            venue_id: model.venue_id,
            start_time: model.start_time,
        }
    }
}
