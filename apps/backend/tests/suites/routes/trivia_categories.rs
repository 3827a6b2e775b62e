use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::error_body::assert_error_body;

use crate::common::{json_body, question_ids};
use crate::support::factory::{seed_questions, ART, HISTORY, SCIENCE};
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn lists_seeded_categories() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/categories").to_request();
    let json = json_body(test::call_service(&app, req).await, 200).await;

    assert_eq!(json["success"], true);
    let categories = json["categories"].as_array().expect("categories array");
    assert_eq!(categories.len(), 6);
    assert_eq!(categories[3]["id"], HISTORY);
    assert_eq!(categories[3]["type"], "History");
    Ok(())
}

#[actix_web::test]
async fn category_questions_only_include_that_category() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("db");
    seed_questions(db, 2, SCIENCE).await?;
    let art = seed_questions(db, 3, ART).await?;

    let app = create_test_app(state).with_prod_routes().build().await?;
    let req = test::TestRequest::get()
        .uri(&format!("/categories/{ART}/questions"))
        .to_request();
    let json = json_body(test::call_service(&app, req).await, 200).await;

    assert_eq!(
        question_ids(&json),
        art.iter().map(|q| q.id).collect::<Vec<_>>()
    );
    assert_eq!(json["total_questions"], 3);
    assert_eq!(json["current_category"], ART);
    Ok(())
}

#[actix_web::test]
async fn known_category_without_questions_is_empty() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get()
        .uri(&format!("/categories/{HISTORY}/questions"))
        .to_request();
    let json = json_body(test::call_service(&app, req).await, 200).await;
    assert_eq!(json["total_questions"], 0);
    assert!(question_ids(&json).is_empty());
    Ok(())
}

#[actix_web::test]
async fn unknown_category_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get()
        .uri("/categories/99/questions")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(
        resp,
        "CATEGORY_NOT_FOUND",
        StatusCode::NOT_FOUND,
        Some("Resource not found"),
    )
    .await;
    Ok(())
}
