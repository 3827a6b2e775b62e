//! Coffee shop routes. Everything except the public menu requires a permission.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::domain::recipe::{Ingredient, RecipeInput, ShortIngredient};
use crate::error::AppError;
use crate::extractors::{
    Authorized, DeleteDrinks, GetDrinksDetail, PatchDrinks, PostDrinks, RecordId, ValidatedJson,
};
use crate::repos::drinks::Drink;
use crate::services::DrinksService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct NewDrinkRequest {
    pub title: String,
    pub recipe: RecipeInput,
}

#[derive(Debug, Deserialize)]
pub struct DrinkPatchRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub recipe: Option<RecipeInput>,
}

/// Menu view: colors and proportions only.
#[derive(Debug, Serialize)]
struct ShortDrink {
    id: i64,
    title: String,
    recipe: Vec<ShortIngredient>,
}

/// Barista view: full recipe.
#[derive(Debug, Serialize)]
struct LongDrink {
    id: i64,
    title: String,
    recipe: Vec<Ingredient>,
}

impl From<&Drink> for ShortDrink {
    fn from(d: &Drink) -> Self {
        Self {
            id: d.id,
            title: d.title.clone(),
            recipe: d.recipe.short(),
        }
    }
}

impl From<&Drink> for LongDrink {
    fn from(d: &Drink) -> Self {
        Self {
            id: d.id,
            title: d.title.clone(),
            recipe: d.recipe.long().to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
struct DrinksResponse<T> {
    success: bool,
    drinks: Vec<T>,
}

#[derive(Debug, Serialize)]
struct DeleteResponse {
    success: bool,
    delete: i64,
}

async fn all_drinks(req: &HttpRequest, app_state: &AppState) -> Result<Vec<Drink>, AppError> {
    with_txn(Some(req), app_state, |txn| {
        Box::pin(async move { Ok(DrinksService::new().list(txn).await?) })
    })
    .await
}

/// GET /drinks (public)
async fn list_drinks(
    req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let drinks = all_drinks(&req, &app_state).await?;
    Ok(HttpResponse::Ok().json(DrinksResponse {
        success: true,
        drinks: drinks.iter().map(ShortDrink::from).collect(),
    }))
}

/// GET /drinks-detail
async fn drinks_detail(
    _auth: Authorized<GetDrinksDetail>,
    req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let drinks = all_drinks(&req, &app_state).await?;
    Ok(HttpResponse::Ok().json(DrinksResponse {
        success: true,
        drinks: drinks.iter().map(LongDrink::from).collect(),
    }))
}

/// POST /drinks
async fn create_drink(
    _auth: Authorized<PostDrinks>,
    req: HttpRequest,
    app_state: web::Data<AppState>,
    body: ValidatedJson<NewDrinkRequest>,
) -> Result<HttpResponse, AppError> {
    let NewDrinkRequest { title, recipe } = body.into_inner();
    let drink = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move { Ok(DrinksService::new().create(txn, &title, recipe).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(DrinksResponse {
        success: true,
        drinks: vec![LongDrink::from(&drink)],
    }))
}

/// PATCH /drinks/{id}
async fn update_drink(
    _auth: Authorized<PatchDrinks>,
    req: HttpRequest,
    id: RecordId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<DrinkPatchRequest>,
) -> Result<HttpResponse, AppError> {
    let DrinkPatchRequest { title, recipe } = body.into_inner();
    let drink = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move {
            Ok(DrinksService::new()
                .update(txn, id.0, title.as_deref(), recipe)
                .await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(DrinksResponse {
        success: true,
        drinks: vec![LongDrink::from(&drink)],
    }))
}

/// DELETE /drinks/{id}
async fn delete_drink(
    _auth: Authorized<DeleteDrinks>,
    req: HttpRequest,
    id: RecordId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move { Ok(DrinksService::new().delete(txn, id.0).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(DeleteResponse {
        success: true,
        delete: id.0,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/drinks", web::get().to(list_drinks))
        .route("/drinks", web::post().to(create_drink))
        .route("/drinks/{id}", web::patch().to(update_drink))
        .route("/drinks/{id}", web::delete().to(delete_drink))
        .route("/drinks-detail", web::get().to(drinks_detail));
}
