//! Quiz play.

use std::collections::HashSet;

use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use crate::db::txn::with_txn;
use crate::domain::QuizScope;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::repos::questions::Question;
use crate::services::TriviaService;
use crate::state::app_state::AppState;

#[serde_as]
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub id: i64,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

/// The drawn question, or `false` once every question in scope was asked.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum NextQuestion {
    Found(Question),
    Exhausted(bool),
}

#[derive(Debug, Serialize)]
struct QuizResponse {
    success: bool,
    question: NextQuestion,
}

/// POST /quizzes
async fn next_question(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    body: ValidatedJson<QuizRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let scope = QuizScope::from_category_id(body.quiz_category.map(|c| c.id));
    let previous: HashSet<i64> = body.previous_questions.into_iter().collect();
    let rng = app_state.quiz_rng.clone();

    let drawn = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move {
            Ok(TriviaService::new()
                .next_quiz_question(txn, &rng, scope, &previous)
                .await?)
        })
    })
    .await?;

    let question = match drawn {
        Some(q) => NextQuestion::Found(q),
        None => NextQuestion::Exhausted(false),
    };
    Ok(HttpResponse::Ok().json(QuizResponse {
        success: true,
        question,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(next_question));
}
