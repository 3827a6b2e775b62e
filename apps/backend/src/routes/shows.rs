//! Show routes.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::repos::shows::ShowListing;
use crate::services::ListingsService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct ShowForm {
    pub artist_id: i64,
    pub venue_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
}

#[derive(Debug, Serialize)]
struct ShowBody {
    id: i64,
    artist_id: i64,
    venue_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    start_time: OffsetDateTime,
}

#[derive(Debug, Serialize)]
struct ShowsResponse {
    success: bool,
    shows: Vec<ShowListing>,
}

#[derive(Debug, Serialize)]
struct ShowResponse {
    success: bool,
    show: ShowBody,
}

/// GET /shows
async fn list_shows(
    req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let shows = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move { Ok(ListingsService::new().shows(txn).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(ShowsResponse {
        success: true,
        shows,
    }))
}

/// POST /shows; an unknown artist or venue is 422.
async fn create_show(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    body: ValidatedJson<ShowForm>,
) -> Result<HttpResponse, AppError> {
    let ShowForm {
        artist_id,
        venue_id,
        start_time,
    } = body.into_inner();

    let show = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move {
            Ok(ListingsService::new()
                .create_show(txn, artist_id, venue_id, start_time)
                .await?)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(ShowResponse {
        success: true,
        show: ShowBody {
            id: show.id,
            artist_id: show.artist_id,
            venue_id: show.venue_id,
            start_time: show.start_time,
        },
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_shows))
        .route("", web::post().to(create_show));
}
