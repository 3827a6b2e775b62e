//! Venue routes.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::db::txn::with_txn;
use crate::domain::areas::Area;
use crate::domain::SearchTerm;
use crate::error::AppError;
use crate::extractors::{RecordId, ValidatedJson};
use crate::repos::shows::VenueShow;
use crate::repos::venues::{NewVenue, Venue, VenuePatch};
use crate::services::listings::{ListingSummary, VenueDetail};
use crate::services::ListingsService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
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
    pub seeking_talent: bool,
    #[serde(default)]
    pub seeking_description: Option<String>,
}

/// Absent keys are left alone; explicit `null` clears an optional field.
#[derive(Debug, Default, Deserialize)]
pub struct VenuePatchForm {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub phone: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub image_link: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub facebook_link: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub website: Option<Option<String>>,
    pub genres: Option<Vec<String>>,
    pub seeking_talent: Option<bool>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub seeking_description: Option<Option<String>>,
}

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    pub search_term: String,
}

impl From<VenueForm> for NewVenue {
    fn from(f: VenueForm) -> Self {
        Self {
            name: f.name,
            city: f.city,
            state: f.state,
            address: f.address,
            phone: f.phone,
            image_link: f.image_link,
            facebook_link: f.facebook_link,
            website: f.website,
            genres: f.genres,
            seeking_talent: f.seeking_talent,
            seeking_description: f.seeking_description,
        }
    }
}

impl From<VenuePatchForm> for VenuePatch {
    fn from(f: VenuePatchForm) -> Self {
        Self {
            name: f.name,
            city: f.city,
            state: f.state,
            address: f.address,
            phone: f.phone,
            image_link: f.image_link,
            facebook_link: f.facebook_link,
            website: f.website,
            genres: f.genres,
            seeking_talent: f.seeking_talent,
            seeking_description: f.seeking_description,
        }
    }
}

/// Public venue record.
#[derive(Debug, Serialize)]
pub struct VenueBody {
    id: i64,
    name: String,
    genres: Vec<String>,
    address: String,
    city: String,
    state: String,
    phone: Option<String>,
    website: Option<String>,
    facebook_link: Option<String>,
    seeking_talent: bool,
    seeking_description: Option<String>,
    image_link: Option<String>,
}

impl From<Venue> for VenueBody {
    fn from(v: Venue) -> Self {
        Self {
            id: v.id,
            name: v.name,
            genres: v.genres,
            address: v.address,
            city: v.city,
            state: v.state,
            phone: v.phone,
            website: v.website,
            facebook_link: v.facebook_link,
            seeking_talent: v.seeking_talent,
            seeking_description: v.seeking_description,
            image_link: v.image_link,
        }
    }
}

#[derive(Debug, Serialize)]
struct AreasResponse {
    success: bool,
    areas: Vec<Area>,
}

#[derive(Debug, Serialize)]
pub(super) struct SearchResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<ListingSummary>,
}

#[derive(Debug, Serialize)]
struct VenueDetailResponse {
    success: bool,
    #[serde(flatten)]
    venue: VenueBody,
    past_shows: Vec<VenueShow>,
    upcoming_shows: Vec<VenueShow>,
    past_shows_count: usize,
    upcoming_shows_count: usize,
}

impl From<VenueDetail> for VenueDetailResponse {
    fn from(d: VenueDetail) -> Self {
        Self {
            success: true,
            past_shows_count: d.past_shows.len(),
            upcoming_shows_count: d.upcoming_shows.len(),
            venue: d.venue.into(),
            past_shows: d.past_shows,
            upcoming_shows: d.upcoming_shows,
        }
    }
}

#[derive(Debug, Serialize)]
struct VenueResponse {
    success: bool,
    venue: VenueBody,
}

#[derive(Debug, Serialize)]
pub(super) struct DeletedResponse {
    pub success: bool,
    pub deleted: i64,
}

/// GET /venues
async fn list_venues(
    req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let now = OffsetDateTime::now_utc();
    let areas = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move { Ok(ListingsService::new().venue_areas(txn, now).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(AreasResponse {
        success: true,
        areas,
    }))
}

/// POST /venues/search
async fn search_venues(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    body: ValidatedJson<SearchForm>,
) -> Result<HttpResponse, AppError> {
    let term = SearchTerm::new(&body.search_term)?;
    let now = OffsetDateTime::now_utc();
    let data = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move { Ok(ListingsService::new().search_venues(txn, &term, now).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(SearchResponse {
        success: true,
        count: data.len(),
        data,
    }))
}

/// GET /venues/{id}
async fn venue_detail(
    req: HttpRequest,
    id: RecordId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let now = OffsetDateTime::now_utc();
    let detail = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move { Ok(ListingsService::new().venue_detail(txn, id.0, now).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(VenueDetailResponse::from(detail)))
}

/// POST /venues
async fn create_venue(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    body: ValidatedJson<VenueForm>,
) -> Result<HttpResponse, AppError> {
    let new = NewVenue::from(body.into_inner());
    let venue = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move { Ok(ListingsService::new().create_venue(txn, new).await?) })
    })
    .await?;

    Ok(HttpResponse::Created().json(VenueResponse {
        success: true,
        venue: venue.into(),
    }))
}

/// PATCH /venues/{id}
async fn update_venue(
    req: HttpRequest,
    id: RecordId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<VenuePatchForm>,
) -> Result<HttpResponse, AppError> {
    let patch = VenuePatch::from(body.into_inner());
    let venue = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move { Ok(ListingsService::new().update_venue(txn, id.0, patch).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(VenueResponse {
        success: true,
        venue: venue.into(),
    }))
}

/// DELETE /venues/{id}
async fn delete_venue(
    req: HttpRequest,
    id: RecordId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move { Ok(ListingsService::new().delete_venue(txn, id.0).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(DeletedResponse {
        success: true,
        deleted: id.0,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_venues))
        .route("", web::post().to(create_venue))
        .route("/search", web::post().to(search_venues))
        .route("/{id}", web::get().to(venue_detail))
        .route("/{id}", web::patch().to(update_venue))
        .route("/{id}", web::delete().to(delete_venue));
}
