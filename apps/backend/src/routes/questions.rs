//! Question bank routes.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use crate::db::txn::with_txn;
use crate::domain::SearchTerm;
use crate::error::AppError;
use crate::extractors::{PageQuery, RecordId, ValidatedJson};
use crate::repos::questions::Question;
use crate::services::trivia::{validate_new_question, TriviaService};
use crate::state::app_state::AppState;

/// New question. `category` may arrive as a number or a numeric string.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: String,
    pub answer: String,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub category: i64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub difficulty: i32,
}

/// `POST /questions` carries either a search or a new question.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum QuestionsPost {
    Search {
        #[serde(rename = "searchTerm")]
        search_term: String,
    },
    Create(CreateQuestionRequest),
}

#[derive(Debug, Serialize)]
struct QuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: Vec<String>,
    current_category: Option<i64>,
}

#[derive(Debug, Serialize)]
struct CreatedResponse {
    success: bool,
    created: i64,
    questions: Vec<Question>,
    total_questions: usize,
    categories: Vec<String>,
    current_category: Option<i64>,
}

#[derive(Debug, Serialize)]
struct DeletedResponse {
    success: bool,
    deleted: i64,
    questions: Vec<Question>,
    total_questions: usize,
}

#[derive(Debug, Serialize)]
struct SearchResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: Option<i64>,
}

/// GET /questions?page=N
async fn list_questions(
    req: HttpRequest,
    PageQuery(page_number): PageQuery,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let size = app_state.page_size;
    let (page, categories) = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move {
            let service = TriviaService::new();
            let page = service.questions_page(txn, page_number, size).await?;
            let categories = service.category_labels(txn).await?;
            Ok((page, categories))
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(QuestionsResponse {
        success: true,
        questions: page.questions,
        total_questions: page.total_questions,
        categories,
        current_category: None,
    }))
}

/// DELETE /questions/{id}
async fn delete_question(
    req: HttpRequest,
    id: RecordId,
    PageQuery(page_number): PageQuery,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let size = app_state.page_size;
    let page = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move {
            let service = TriviaService::new();
            service.delete_question(txn, id.0).await?;
            Ok(service.questions_after_write(txn, page_number, size).await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(DeletedResponse {
        success: true,
        deleted: id.0,
        questions: page.questions,
        total_questions: page.total_questions,
    }))
}

async fn create(
    req: &HttpRequest,
    app_state: &AppState,
    page_number: crate::domain::PageNumber,
    body: CreateQuestionRequest,
) -> Result<HttpResponse, AppError> {
    let new = validate_new_question(&body.question, &body.answer, body.category, body.difficulty)?;
    let size = app_state.page_size;

    let (created, page, categories) = with_txn(Some(req), app_state, |txn| {
        Box::pin(async move {
            let service = TriviaService::new();
            let created = service.create_question(txn, new).await?;
            let page = service.questions_after_write(txn, page_number, size).await?;
            let categories = service.category_labels(txn).await?;
            Ok((created, page, categories))
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(CreatedResponse {
        success: true,
        created: created.id,
        questions: page.questions,
        total_questions: page.total_questions,
        categories,
        current_category: None,
    }))
}

async fn search(
    req: &HttpRequest,
    app_state: &AppState,
    raw_term: &str,
) -> Result<HttpResponse, AppError> {
    let term = SearchTerm::new(raw_term)?;

    let questions = with_txn(Some(req), app_state, |txn| {
        Box::pin(async move { Ok(TriviaService::new().search_questions(txn, &term).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(SearchResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: None,
    }))
}

/// POST /questions: `{searchTerm}` searches, anything else creates.
async fn post_questions(
    req: HttpRequest,
    PageQuery(page_number): PageQuery,
    app_state: web::Data<AppState>,
    body: ValidatedJson<QuestionsPost>,
) -> Result<HttpResponse, AppError> {
    match body.into_inner() {
        QuestionsPost::Search { search_term } => search(&req, &app_state, &search_term).await,
        QuestionsPost::Create(new) => create(&req, &app_state, page_number, new).await,
    }
}

/// POST /questions/add
async fn add_question(
    req: HttpRequest,
    PageQuery(page_number): PageQuery,
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    create(&req, &app_state, page_number, body.into_inner()).await
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_questions))
        .route("", web::post().to(post_questions))
        .route("/add", web::post().to(add_question))
        .route("/{id}", web::delete().to(delete_question));
}
