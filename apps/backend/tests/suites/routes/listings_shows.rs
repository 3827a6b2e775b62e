use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::error_body::assert_error_body;
use serde_json::json;
use time::macros::datetime;

use crate::common::json_body;
use crate::support::factory::{seed_artist, seed_show, seed_venue};
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn lists_shows_with_both_parties() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("db");
    let venue = seed_venue(db, "The Musical Hop", "San Francisco", "CA").await?;
    let artist = seed_artist(db, "Guns N Petals").await?;
    seed_show(db, &artist, &venue, datetime!(2019-05-21 21:30 UTC)).await?;

    let app = create_test_app(state).with_prod_routes().build().await?;
    let req = test::TestRequest::get().uri("/shows").to_request();
    let json = json_body(test::call_service(&app, req).await, 200).await;

    let show = &json["shows"][0];
    assert_eq!(show["venue_id"], venue.id);
    assert_eq!(show["venue_name"], "The Musical Hop");
    assert_eq!(show["artist_id"], artist.id);
    assert_eq!(show["artist_name"], "Guns N Petals");
    assert_eq!(show["start_time"], "2019-05-21T21:30:00Z");
    Ok(())
}

#[actix_web::test]
async fn create_show_returns_201() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("db");
    let venue = seed_venue(db, "The Musical Hop", "San Francisco", "CA").await?;
    let artist = seed_artist(db, "Guns N Petals").await?;

    let app = create_test_app(state).with_prod_routes().build().await?;
    let req = test::TestRequest::post()
        .uri("/shows")
        .set_json(json!({
            "artist_id": artist.id,
            "venue_id": venue.id,
            "start_time": "2035-04-01T20:00:00Z"
        }))
        .to_request();
    let json = json_body(test::call_service(&app, req).await, 201).await;
    assert_eq!(json["show"]["artist_id"], artist.id);
    assert_eq!(json["show"]["start_time"], "2035-04-01T20:00:00Z");
    Ok(())
}

#[actix_web::test]
async fn unknown_party_is_unprocessable() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let venue = seed_venue(state.db().expect("db"), "The Musical Hop", "San Francisco", "CA").await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/shows")
        .set_json(json!({
            "artist_id": 404,
            "venue_id": venue.id,
            "start_time": "2035-04-01T20:00:00Z"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, "FK_VIOLATION", StatusCode::UNPROCESSABLE_ENTITY, None).await;
    Ok(())
}

#[actix_web::test]
async fn malformed_start_time_is_bad_request() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/shows")
        .set_json(json!({"artist_id": 1, "venue_id": 1, "start_time": "next tuesday"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST, None).await;
    Ok(())
}
