//! `/quizzes`: memoryless next-question draws.

use std::collections::HashSet;

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::error_body::assert_error_body;
use serde_json::json;

use crate::common::json_body;
use crate::support::factory::{seed_question, HISTORY, SCIENCE};
use crate::support::{build_test_state, create_test_app};

/// Twelve questions with ids 1..=12; ids 5, 9 and 12 are History.
async fn seed_bank(db: &sea_orm::DatabaseConnection) -> Result<(), Box<dyn std::error::Error>> {
    for id in 1..=12 {
        let category = if [5, 9, 12].contains(&id) {
            HISTORY
        } else {
            SCIENCE
        };
        let q = seed_question(db, &format!("Question {id}?"), category).await?;
        assert_eq!(q.id, id);
    }
    Ok(())
}

#[actix_web::test]
async fn only_unasked_question_in_category_is_drawn() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    seed_bank(state.db().expect("db")).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/quizzes")
        .set_json(json!({
            "previous_questions": [5, 9],
            "quiz_category": {"type": "History", "id": HISTORY}
        }))
        .to_request();
    let json = json_body(test::call_service(&app, req).await, 200).await;

    assert_eq!(json["success"], true);
    assert_eq!(json["question"]["id"], 12);
    assert_eq!(json["question"]["category"], HISTORY);
    Ok(())
}

#[actix_web::test]
async fn exhausted_category_returns_false() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    seed_bank(state.db().expect("db")).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/quizzes")
        .set_json(json!({
            "previous_questions": [5, 9, 12],
            "quiz_category": {"id": "4"}
        }))
        .to_request();
    let json = json_body(test::call_service(&app, req).await, 200).await;

    assert_eq!(json["success"], true);
    assert_eq!(json["question"], false);
    Ok(())
}

#[actix_web::test]
async fn category_zero_draws_from_everything_without_repeats() -> Result<(), Box<dyn std::error::Error>>
{
    let state = build_test_state().await?;
    seed_bank(state.db().expect("db")).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let mut asked: Vec<i64> = Vec::new();
    loop {
        let req = test::TestRequest::post()
            .uri("/quizzes")
            .set_json(json!({
                "previous_questions": asked,
                "quiz_category": {"type": "click", "id": 0}
            }))
            .to_request();
        let json = json_body(test::call_service(&app, req).await, 200).await;
        match json["question"]["id"].as_i64() {
            Some(id) => {
                assert!(!asked.contains(&id), "question {id} drawn twice");
                asked.push(id);
            }
            None => {
                assert_eq!(json["question"], false);
                break;
            }
        }
        assert!(asked.len() <= 12);
    }

    let drawn: HashSet<i64> = asked.into_iter().collect();
    assert_eq!(drawn, (1..=12).collect::<HashSet<i64>>());
    Ok(())
}

#[actix_web::test]
async fn missing_category_means_all() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    seed_bank(state.db().expect("db")).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let previous: Vec<i64> = (1..=11).collect();
    let req = test::TestRequest::post()
        .uri("/quizzes")
        .set_json(json!({"previous_questions": previous}))
        .to_request();
    let json = json_body(test::call_service(&app, req).await, 200).await;
    assert_eq!(json["question"]["id"], 12);
    Ok(())
}

#[actix_web::test]
async fn unknown_category_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/quizzes")
        .set_json(json!({"previous_questions": [], "quiz_category": {"id": 42}}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, "CATEGORY_NOT_FOUND", StatusCode::NOT_FOUND, None).await;
    Ok(())
}
