//! Artist repository.

use sea_orm::ConnectionTrait;

use crate::adapters::artists_sea::{self as artists_adapter, ArtistCreate, ArtistUpdate};
use crate::domain::genres;
use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewArtist {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ArtistPatch {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<Option<String>>,
    pub image_link: Option<Option<String>>,
    pub facebook_link: Option<Option<String>>,
    pub website: Option<Option<String>>,
    pub genres: Option<Vec<String>>,
    pub seeking_venue: Option<bool>,
    pub seeking_description: Option<Option<String>>,
}

fn not_found(id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Artist, format!("Artist {id} not found"))
}

pub async fn list_artists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Artist>, DomainError> {
    artists_adapter::list_artists(conn)
        .await?
        .into_iter()
        .map(Artist::try_from)
        .collect()
}

pub async fn require_artist<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Artist, DomainError> {
    let row = artists_adapter::find_artist(conn, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Artist::try_from(row)
}

pub async fn create_artist<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    new: NewArtist,
) -> Result<Artist, DomainError> {
    let dto = ArtistCreate {
        name: new.name,
        city: new.city,
        state: new.state,
        phone: new.phone,
        image_link: new.image_link,
        facebook_link: new.facebook_link,
        website: new.website,
        genres: genres::encode(&new.genres),
        seeking_venue: new.seeking_venue,
        seeking_description: new.seeking_description,
    };
    Artist::try_from(artists_adapter::create_artist(conn, dto).await?)
}

pub async fn update_artist<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    patch: ArtistPatch,
) -> Result<Artist, DomainError> {
    let dto = ArtistUpdate {
        name: patch.name,
        city: patch.city,
        state: patch.state,
        phone: patch.phone,
        image_link: patch.image_link,
        facebook_link: patch.facebook_link,
        website: patch.website,
        genres: patch.genres.as_deref().map(genres::encode),
        seeking_venue: patch.seeking_venue,
        seeking_description: patch.seeking_description,
    };
    match artists_adapter::update_artist(conn, id, dto).await {
        Ok(row) => Artist::try_from(row),
        Err(sea_orm::DbErr::RecordNotFound(_)) => Err(not_found(id)),
        Err(e) => Err(e.into()),
    }
}

pub async fn delete_artist<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<(), DomainError> {
    match artists_adapter::delete_artist(conn, id).await? {
        0 => Err(not_found(id)),
        _ => Ok(()),
    }
}

impl TryFrom<crate::entities::artists::Model> for Artist {
    type Error = DomainError;

    fn try_from(model: crate::entities::artists::Model) -> Result<Self, Self::Error> {
        let genres = genres::decode(&model.genres, "artist", model.id)?;
        Ok(Self {
            id: model.id,
            name: model.name,
            city: model.city,
            state: model.state,
            phone: model.phone,
            image_link: model.image_link,
            facebook_link: model.facebook_link,
            website: model.website,
            genres,
            seeking_venue: model.seeking_venue,
            seeking_description: model.seeking_description,
        })
    }
}
