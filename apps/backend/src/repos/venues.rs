//! Venue repository.

use sea_orm::ConnectionTrait;

use crate::adapters::venues_sea::{self as venues_adapter, VenueCreate, VenueUpdate};
use crate::domain::genres;
use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Validated venue fields for insert.
#[derive(Debug, Clone)]
pub struct NewVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Validated partial update.
#[derive(Debug, Clone, Default)]
pub struct VenuePatch {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<Option<String>>,
    pub image_link: Option<Option<String>>,
    pub facebook_link: Option<Option<String>>,
    pub website: Option<Option<String>>,
    pub genres: Option<Vec<String>>,
    pub seeking_talent: Option<bool>,
    pub seeking_description: Option<Option<String>>,
}

fn not_found(id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Venue, format!("Venue {id} not found"))
}

pub async fn list_venues<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Venue>, DomainError> {
    venues_adapter::list_venues(conn)
        .await?
        .into_iter()
        .map(Venue::try_from)
        .collect()
}

pub async fn require_venue<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Venue, DomainError> {
    let row = venues_adapter::find_venue(conn, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Venue::try_from(row)
}

pub async fn create_venue<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    new: NewVenue,
) -> Result<Venue, DomainError> {
    let dto = VenueCreate {
        name: new.name,
        city: new.city,
        state: new.state,
        address: new.address,
        phone: new.phone,
        image_link: new.image_link,
        facebook_link: new.facebook_link,
        website: new.website,
        genres: genres::encode(&new.genres),
        seeking_talent: new.seeking_talent,
        seeking_description: new.seeking_description,
    };
    Venue::try_from(venues_adapter::create_venue(conn, dto).await?)
}

pub async fn update_venue<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    patch: VenuePatch,
) -> Result<Venue, DomainError> {
    let dto = VenueUpdate {
        name: patch.name,
        city: patch.city,
        state: patch.state,
        address: patch.address,
        phone: patch.phone,
        image_link: patch.image_link,
        facebook_link: patch.facebook_link,
        website: patch.website,
        genres: patch.genres.as_deref().map(genres::encode),
        seeking_talent: patch.seeking_talent,
        seeking_description: patch.seeking_description,
    };
    match venues_adapter::update_venue(conn, id, dto).await {
        Ok(row) => Venue::try_from(row),
        Err(sea_orm::DbErr::RecordNotFound(_)) => Err(not_found(id)),
        Err(e) => Err(e.into()),
    }
}

pub async fn delete_venue<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<(), DomainError> {
    match venues_adapter::delete_venue(conn, id).await? {
        0 => Err(not_found(id)),
        _ => Ok(()),
    }
}

impl TryFrom<crate::entities::venues::Model> for Venue {
    type Error = DomainError;

    fn try_from(model: crate::entities::venues::Model) -> Result<Self, Self::Error> {
        let genres = genres::decode(&model.genres, "venue", model.id)?;
        Ok(Self {
            id: model.id,
            name: model.name,
            city: model.city,
            state: model.state,
            address: model.address,
            phone: model.phone,
            image_link: model.image_link,
            facebook_link: model.facebook_link,
            website: model.website,
            genres,
            seeking_talent: model.seeking_talent,
            seeking_description: model.seeking_description,
        })
    }
}
