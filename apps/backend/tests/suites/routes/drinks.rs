//! Coffee shop: public menu plus permission-gated management.

use actix_web::http::StatusCode;
use actix_web::test;
use backend::auth::permissions::{DELETE_DRINKS, GET_DRINKS_DETAIL, PATCH_DRINKS, POST_DRINKS};
use backend_test_support::error_body::assert_error_body;
use serde_json::json;

use crate::common::json_body;
use crate::support::auth::{bearer, expired_bearer, foreign_bearer};
use crate::support::factory::seed_drink;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn public_menu_hides_ingredient_names() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let drink = seed_drink(state.db().expect("db"), "Flat White").await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/drinks").to_request();
    let json = json_body(test::call_service(&app, req).await, 200).await;

    assert_eq!(json["success"], true);
    assert_eq!(
        json["drinks"],
        json!([{
            "id": drink.id,
            "title": "Flat White",
            "recipe": [
                {"color": "brown", "parts": 1},
                {"color": "white", "parts": 3}
            ]
        }])
    );
    Ok(())
}

#[actix_web::test]
async fn detail_requires_bearer() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/drinks-detail").to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(
        resp,
        "UNAUTHORIZED_MISSING_BEARER",
        StatusCode::UNAUTHORIZED,
        Some("unauthorized"),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/drinks-detail")
        .insert_header(("Authorization", "Basic abc"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, "UNAUTHORIZED_MISSING_BEARER", StatusCode::UNAUTHORIZED, None).await;
    Ok(())
}

#[actix_web::test]
async fn detail_rejects_bad_tokens() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let cases = [
        (expired_bearer(&[GET_DRINKS_DETAIL]), "UNAUTHORIZED_EXPIRED_JWT"),
        (foreign_bearer(&[GET_DRINKS_DETAIL]), "UNAUTHORIZED_INVALID_JWT"),
        ("Bearer not.a.jwt".to_string(), "UNAUTHORIZED_INVALID_JWT"),
    ];
    for (header, code) in cases {
        let req = test::TestRequest::get()
            .uri("/drinks-detail")
            .insert_header(("Authorization", header))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_error_body(resp, code, StatusCode::UNAUTHORIZED, None).await;
    }
    Ok(())
}

#[actix_web::test]
async fn detail_without_permission_is_forbidden() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get()
        .uri("/drinks-detail")
        .insert_header(("Authorization", bearer(&[POST_DRINKS])))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(
        resp,
        "MISSING_PERMISSION",
        StatusCode::FORBIDDEN,
        Some("forbidden"),
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn detail_with_permission_shows_full_recipe() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    seed_drink(state.db().expect("db"), "Flat White").await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get()
        .uri("/drinks-detail")
        .insert_header(("Authorization", bearer(&[GET_DRINKS_DETAIL])))
        .to_request();
    let json = json_body(test::call_service(&app, req).await, 200).await;

    assert_eq!(
        json["drinks"][0]["recipe"][0],
        json!({"name": "espresso", "color": "brown", "parts": 1})
    );
    Ok(())
}

#[actix_web::test]
async fn auth_is_checked_before_the_body() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/drinks")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[actix_web::test]
async fn manage_drink_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let manager = bearer(&[GET_DRINKS_DETAIL, POST_DRINKS, PATCH_DRINKS, DELETE_DRINKS]);

    // A single ingredient object is accepted as a one-item recipe.
    let req = test::TestRequest::post()
        .uri("/drinks")
        .insert_header(("Authorization", manager.clone()))
        .set_json(json!({
            "title": "Water",
            "recipe": {"name": "water", "color": "blue", "parts": 1}
        }))
        .to_request();
    let json = json_body(test::call_service(&app, req).await, 200).await;
    let id = json["drinks"][0]["id"].as_i64().expect("drink id");
    assert_eq!(json["drinks"][0]["recipe"].as_array().map(Vec::len), Some(1));

    let req = test::TestRequest::patch()
        .uri(&format!("/drinks/{id}"))
        .insert_header(("Authorization", manager.clone()))
        .set_json(json!({"title": "Sparkling Water"}))
        .to_request();
    let json = json_body(test::call_service(&app, req).await, 200).await;
    assert_eq!(json["drinks"][0]["title"], "Sparkling Water");
    assert_eq!(json["drinks"][0]["recipe"][0]["name"], "water");

    let req = test::TestRequest::delete()
        .uri(&format!("/drinks/{id}"))
        .insert_header(("Authorization", manager.clone()))
        .to_request();
    let json = json_body(test::call_service(&app, req).await, 200).await;
    assert_eq!(json["delete"], id);

    let req = test::TestRequest::delete()
        .uri(&format!("/drinks/{id}"))
        .insert_header(("Authorization", manager))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, "DRINK_NOT_FOUND", StatusCode::NOT_FOUND, None).await;
    Ok(())
}

#[actix_web::test]
async fn duplicate_title_is_unprocessable() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    seed_drink(state.db().expect("db"), "Latte").await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/drinks")
        .insert_header(("Authorization", bearer(&[POST_DRINKS])))
        .set_json(json!({
            "title": "Latte",
            "recipe": [{"name": "milk", "color": "white", "parts": 2}]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, "UNIQUE_VIOLATION", StatusCode::UNPROCESSABLE_ENTITY, None).await;
    Ok(())
}

#[actix_web::test]
async fn empty_recipe_is_invalid() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/drinks")
        .insert_header(("Authorization", bearer(&[POST_DRINKS])))
        .set_json(json!({"title": "Air", "recipe": []}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, "INVALID_DRINK", StatusCode::BAD_REQUEST, None).await;
    Ok(())
}

#[actix_web::test]
async fn patch_requires_patch_permission() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let drink = seed_drink(state.db().expect("db"), "Mocha").await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::patch()
        .uri(&format!("/drinks/{}", drink.id))
        .insert_header(("Authorization", bearer(&[POST_DRINKS, DELETE_DRINKS])))
        .set_json(json!({"title": "Not Mocha"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, "MISSING_PERMISSION", StatusCode::FORBIDDEN, None).await;
    Ok(())
}
