//! Listings: venues, artists and the shows that connect them.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;
use tracing::info;

use crate::domain::areas::{group_by_area, Area, AreaVenue};
use crate::domain::timeline::is_upcoming;
use crate::domain::{genres, SearchTerm, Timeline};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::artists::{self, Artist, ArtistPatch, NewArtist};
use crate::repos::shows::{self, ArtistShow, Show, ShowListing, VenueShow};
use crate::repos::venues::{self, NewVenue, Venue, VenuePatch};

/// Trimmed, non-empty text for a required listing field.
pub fn required_text(field: &str, value: &str) -> Result<String, DomainError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::InvalidListing,
            format!("{field} must not be empty"),
        ));
    }
    Ok(value.to_string())
}

/// Blank optional text is stored as absent.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Validate the text fields of a new venue and normalize its genres.
pub fn validate_new_venue(mut venue: NewVenue) -> Result<NewVenue, DomainError> {
    venue.name = required_text("name", &venue.name)?;
    venue.city = required_text("city", &venue.city)?;
    venue.state = required_text("state", &venue.state)?;
    venue.address = required_text("address", &venue.address)?;
    venue.phone = optional_text(venue.phone);
    venue.image_link = optional_text(venue.image_link);
    venue.facebook_link = optional_text(venue.facebook_link);
    venue.website = optional_text(venue.website);
    venue.seeking_description = optional_text(venue.seeking_description);
    venue.genres = genres::normalize(venue.genres);
    Ok(venue)
}

pub fn validate_new_artist(mut artist: NewArtist) -> Result<NewArtist, DomainError> {
    artist.name = required_text("name", &artist.name)?;
    artist.city = required_text("city", &artist.city)?;
    artist.state = required_text("state", &artist.state)?;
    artist.phone = optional_text(artist.phone);
    artist.image_link = optional_text(artist.image_link);
    artist.facebook_link = optional_text(artist.facebook_link);
    artist.website = optional_text(artist.website);
    artist.seeking_description = optional_text(artist.seeking_description);
    artist.genres = genres::normalize(artist.genres);
    Ok(artist)
}

fn patch_required(field: &str, value: Option<String>) -> Result<Option<String>, DomainError> {
    value.map(|v| required_text(field, &v)).transpose()
}

fn patch_optional(value: Option<Option<String>>) -> Option<Option<String>> {
    value.map(optional_text)
}

pub fn validate_venue_patch(patch: VenuePatch) -> Result<VenuePatch, DomainError> {
    Ok(VenuePatch {
        name: patch_required("name", patch.name)?,
        city: patch_required("city", patch.city)?,
        state: patch_required("state", patch.state)?,
        address: patch_required("address", patch.address)?,
        phone: patch_optional(patch.phone),
        image_link: patch_optional(patch.image_link),
        facebook_link: patch_optional(patch.facebook_link),
        website: patch_optional(patch.website),
        genres: patch.genres.map(genres::normalize),
        seeking_talent: patch.seeking_talent,
        seeking_description: patch_optional(patch.seeking_description),
    })
}

pub fn validate_artist_patch(patch: ArtistPatch) -> Result<ArtistPatch, DomainError> {
    Ok(ArtistPatch {
        name: patch_required("name", patch.name)?,
        city: patch_required("city", patch.city)?,
        state: patch_required("state", patch.state)?,
        phone: patch_optional(patch.phone),
        image_link: patch_optional(patch.image_link),
        facebook_link: patch_optional(patch.facebook_link),
        website: patch_optional(patch.website),
        genres: patch.genres.map(genres::normalize),
        seeking_venue: patch.seeking_venue,
        seeking_description: patch_optional(patch.seeking_description),
    })
}

/// Venue with its shows split around a reference instant.
#[derive(Debug, Clone)]
pub struct VenueDetail {
    pub venue: Venue,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
}

#[derive(Debug, Clone)]
pub struct ArtistDetail {
    pub artist: Artist,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
}

/// Search hit or area entry: id, name and upcoming show count.
pub type ListingSummary = AreaVenue;

fn split<T: crate::domain::Scheduled + Clone>(shows: &[T], now: OffsetDateTime) -> (Vec<T>, Vec<T>) {
    let timeline = Timeline::partition(shows, now);
    (
        timeline.past.into_iter().cloned().collect(),
        timeline.upcoming.into_iter().cloned().collect(),
    )
}

fn upcoming_by<F>(all: &[Show], now: OffsetDateTime, key: F) -> HashMap<i64, usize>
where
    F: Fn(&Show) -> i64,
{
    let mut counts: HashMap<i64, usize> = HashMap::new();
    for show in all {
        *counts.entry(key(show)).or_default() += usize::from(is_upcoming(show, now));
    }
    counts
}

/// Listings domain service.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListingsService;

impl ListingsService {
    pub fn new() -> Self {
        Self
    }

    /// Venues grouped by `(city, state)` with upcoming show counts.
    pub async fn venue_areas<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        now: OffsetDateTime,
    ) -> Result<Vec<Area>, DomainError> {
        let all_venues = venues::list_venues(conn).await?;
        let upcoming = upcoming_by(&shows::list_shows(conn).await?, now, |s| s.venue_id);

        Ok(group_by_area(all_venues.into_iter().map(|v| {
            let entry = AreaVenue {
                id: v.id,
                num_upcoming_shows: upcoming.get(&v.id).copied().unwrap_or(0),
                name: v.name,
            };
            (v.city, v.state, entry)
        })))
    }

    pub async fn search_venues<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        term: &SearchTerm,
        now: OffsetDateTime,
    ) -> Result<Vec<ListingSummary>, DomainError> {
        let all_venues = venues::list_venues(conn).await?;
        let upcoming = upcoming_by(&shows::list_shows(conn).await?, now, |s| s.venue_id);

        Ok(term
            .filter(&all_venues, |v| v.name.as_str())
            .into_iter()
            .map(|v| ListingSummary {
                id: v.id,
                name: v.name.clone(),
                num_upcoming_shows: upcoming.get(&v.id).copied().unwrap_or(0),
            })
            .collect())
    }

    pub async fn venue_detail<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
        now: OffsetDateTime,
    ) -> Result<VenueDetail, DomainError> {
        let venue = venues::require_venue(conn, id).await?;
        let (past_shows, upcoming_shows) = split(&shows::shows_at_venue(conn, id).await?, now);
        Ok(VenueDetail {
            venue,
            past_shows,
            upcoming_shows,
        })
    }

    pub async fn create_venue<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        new: NewVenue,
    ) -> Result<Venue, DomainError> {
        let venue = venues::create_venue(conn, validate_new_venue(new)?).await?;
        info!(venue_id = venue.id, "Venue listed");
        Ok(venue)
    }

    pub async fn update_venue<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
        patch: VenuePatch,
    ) -> Result<Venue, DomainError> {
        venues::update_venue(conn, id, validate_venue_patch(patch)?).await
    }

    pub async fn delete_venue<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<(), DomainError> {
        venues::delete_venue(conn, id).await?;
        info!(venue_id = id, "Venue deleted");
        Ok(())
    }

    pub async fn artists<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Artist>, DomainError> {
        artists::list_artists(conn).await
    }

    pub async fn search_artists<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        term: &SearchTerm,
        now: OffsetDateTime,
    ) -> Result<Vec<ListingSummary>, DomainError> {
        let all_artists = artists::list_artists(conn).await?;
        let upcoming = upcoming_by(&shows::list_shows(conn).await?, now, |s| s.artist_id);

        Ok(term
            .filter(&all_artists, |a| a.name.as_str())
            .into_iter()
            .map(|a| ListingSummary {
                id: a.id,
                name: a.name.clone(),
                num_upcoming_shows: upcoming.get(&a.id).copied().unwrap_or(0),
            })
            .collect())
    }

    pub async fn artist_detail<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
        now: OffsetDateTime,
    ) -> Result<ArtistDetail, DomainError> {
        let artist = artists::require_artist(conn, id).await?;
        let (past_shows, upcoming_shows) = split(&shows::shows_by_artist(conn, id).await?, now);
        Ok(ArtistDetail {
            artist,
            past_shows,
            upcoming_shows,
        })
    }

    pub async fn create_artist<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        new: NewArtist,
    ) -> Result<Artist, DomainError> {
        let artist = artists::create_artist(conn, validate_new_artist(new)?).await?;
        info!(artist_id = artist.id, "Artist listed");
        Ok(artist)
    }

    pub async fn update_artist<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
        patch: ArtistPatch,
    ) -> Result<Artist, DomainError> {
        artists::update_artist(conn, id, validate_artist_patch(patch)?).await
    }

    pub async fn delete_artist<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<(), DomainError> {
        artists::delete_artist(conn, id).await?;
        info!(artist_id = id, "Artist deleted");
        Ok(())
    }

    pub async fn shows<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<ShowListing>, DomainError> {
        shows::list_show_listings(conn).await
    }

    pub async fn create_show<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        artist_id: i64,
        venue_id: i64,
        start_time: OffsetDateTime,
    ) -> Result<Show, DomainError> {
        let show = shows::create_show(conn, artist_id, venue_id, start_time).await?;
        info!(show_id = show.id, artist_id, venue_id, "Show listed");
        Ok(show)
    }
}
