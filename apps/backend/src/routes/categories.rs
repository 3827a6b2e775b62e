//! Trivia category routes.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Serialize;

use crate::db::txn::with_txn;
use crate::domain::CategoryId;
use crate::error::AppError;
use crate::extractors::{PageQuery, RecordId};
use crate::repos::categories::Category;
use crate::repos::questions::Question;
use crate::services::TriviaService;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: Vec<Category>,
}

#[derive(Debug, Serialize)]
struct CategoryQuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: CategoryId,
}

/// GET /categories
async fn list_categories(
    req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let categories = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move { Ok(TriviaService::new().categories(txn).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// GET /categories/{id}/questions?page=N
///
/// Unknown category is 404; a page past the end is an empty list.
async fn category_questions(
    req: HttpRequest,
    id: RecordId,
    PageQuery(page_number): PageQuery,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let size = app_state.page_size;
    let (category, page) = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move {
            Ok(TriviaService::new()
                .category_questions(txn, CategoryId(id.0), page_number, size)
                .await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(CategoryQuestionsResponse {
        success: true,
        questions: page.questions,
        total_questions: page.total_questions,
        current_category: category.id,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_categories))
        .route("/{id}/questions", web::get().to(category_questions));
}
