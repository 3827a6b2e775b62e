//! Artist routes.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::venues::{DeletedResponse, SearchForm, SearchResponse};
use crate::db::txn::with_txn;
use crate::domain::SearchTerm;
use crate::error::AppError;
use crate::extractors::{RecordId, ValidatedJson};
use crate::repos::artists::{Artist, ArtistPatch, NewArtist};
use crate::repos::shows::ArtistShow;
use crate::services::listings::ArtistDetail;
use crate::services::ListingsService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub image_link: Option<String>,
    #[serde(default)]
    pub facebook_link: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub seeking_venue: bool,
    #[serde(default)]
    pub seeking_description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ArtistPatchForm {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub phone: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub image_link: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub facebook_link: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub website: Option<Option<String>>,
    pub genres: Option<Vec<String>>,
    pub seeking_venue: Option<bool>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub seeking_description: Option<Option<String>>,
}

impl From<ArtistForm> for NewArtist {
    fn from(f: ArtistForm) -> Self {
        Self {
            name: f.name,
            city: f.city,
            state: f.state,
            phone: f.phone,
            image_link: f.image_link,
            facebook_link: f.facebook_link,
            website: f.website,
            genres: f.genres,
            seeking_venue: f.seeking_venue,
            seeking_description: f.seeking_description,
        }
    }
}

impl From<ArtistPatchForm> for ArtistPatch {
    fn from(f: ArtistPatchForm) -> Self {
        Self {
            name: f.name,
            city: f.city,
            state: f.state,
            phone: f.phone,
            image_link: f.image_link,
            facebook_link: f.facebook_link,
            website: f.website,
            genres: f.genres,
            seeking_venue: f.seeking_venue,
            seeking_description: f.seeking_description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ArtistBody {
    id: i64,
    name: String,
    genres: Vec<String>,
    city: String,
    state: String,
    phone: Option<String>,
    website: Option<String>,
    facebook_link: Option<String>,
    seeking_venue: bool,
    seeking_description: Option<String>,
    image_link: Option<String>,
}

impl From<Artist> for ArtistBody {
    fn from(a: Artist) -> Self {
        Self {
            id: a.id,
            name: a.name,
            genres: a.genres,
            city: a.city,
            state: a.state,
            phone: a.phone,
            website: a.website,
            facebook_link: a.facebook_link,
            seeking_venue: a.seeking_venue,
            seeking_description: a.seeking_description,
            image_link: a.image_link,
        }
    }
}

#[derive(Debug, Serialize)]
struct ArtistName {
    id: i64,
    name: String,
}

#[derive(Debug, Serialize)]
struct ArtistsResponse {
    success: bool,
    artists: Vec<ArtistName>,
}

#[derive(Debug, Serialize)]
struct ArtistDetailResponse {
    success: bool,
    #[serde(flatten)]
    artist: ArtistBody,
    past_shows: Vec<ArtistShow>,
    upcoming_shows: Vec<ArtistShow>,
    past_shows_count: usize,
    upcoming_shows_count: usize,
}

impl From<ArtistDetail> for ArtistDetailResponse {
    fn from(d: ArtistDetail) -> Self {
        Self {
            success: true,
            past_shows_count: d.past_shows.len(),
            upcoming_shows_count: d.upcoming_shows.len(),
            artist: d.artist.into(),
            past_shows: d.past_shows,
            upcoming_shows: d.upcoming_shows,
        }
    }
}

#[derive(Debug, Serialize)]
struct ArtistResponse {
    success: bool,
    artist: ArtistBody,
}

/// GET /artists
async fn list_artists(
    req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let artists = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move { Ok(ListingsService::new().artists(txn).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(ArtistsResponse {
        success: true,
        artists: artists
            .into_iter()
            .map(|a| ArtistName {
                id: a.id,
                name: a.name,
            })
            .collect(),
    }))
}

/// POST /artists/search
async fn search_artists(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    body: ValidatedJson<SearchForm>,
) -> Result<HttpResponse, AppError> {
    let term = SearchTerm::new(&body.search_term)?;
    let now = OffsetDateTime::now_utc();
    let data = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move { Ok(ListingsService::new().search_artists(txn, &term, now).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(SearchResponse {
        success: true,
        count: data.len(),
        data,
    }))
}

/// GET /artists/{id}
async fn artist_detail(
    req: HttpRequest,
    id: RecordId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let now = OffsetDateTime::now_utc();
    let detail = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move { Ok(ListingsService::new().artist_detail(txn, id.0, now).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(ArtistDetailResponse::from(detail)))
}

/// POST /artists
async fn create_artist(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    body: ValidatedJson<ArtistForm>,
) -> Result<HttpResponse, AppError> {
    let new = NewArtist::from(body.into_inner());
    let artist = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move { Ok(ListingsService::new().create_artist(txn, new).await?) })
    })
    .await?;

    Ok(HttpResponse::Created().json(ArtistResponse {
        success: true,
        artist: artist.into(),
    }))
}

/// PATCH /artists/{id}
async fn update_artist(
    req: HttpRequest,
    id: RecordId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<ArtistPatchForm>,
) -> Result<HttpResponse, AppError> {
    let patch = ArtistPatch::from(body.into_inner());
    let artist = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move { Ok(ListingsService::new().update_artist(txn, id.0, patch).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(ArtistResponse {
        success: true,
        artist: artist.into(),
    }))
}

/// DELETE /artists/{id}
async fn delete_artist(
    req: HttpRequest,
    id: RecordId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move { Ok(ListingsService::new().delete_artist(txn, id.0).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(DeletedResponse {
        success: true,
        deleted: id.0,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_artists))
        .route("", web::post().to(create_artist))
        .route("/search", web::post().to(search_artists))
        .route("/{id}", web::get().to(artist_detail))
        .route("/{id}", web::patch().to(update_artist))
        .route("/{id}", web::delete().to(delete_artist));
}
