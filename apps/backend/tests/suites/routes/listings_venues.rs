//! `/venues`: areas, search, detail, create, patch, delete.

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::error_body::assert_error_body;
use serde_json::json;
use time::{Duration, OffsetDateTime};

use crate::common::json_body;
use crate::support::factory::{seed_artist, seed_show, seed_venue};
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn venues_are_grouped_by_area_with_upcoming_counts() -> Result<(), Box<dyn std::error::Error>>
{
    let state = build_test_state().await?;
    let db = state.db().expect("db");
    let musical_hop = seed_venue(db, "The Musical Hop", "San Francisco", "CA").await?;
    seed_venue(db, "Park Square Live Music & Coffee", "San Francisco", "CA").await?;
    seed_venue(db, "The Dueling Pianos Bar", "New York", "NY").await?;
    let artist = seed_artist(db, "Guns N Petals").await?;
    let now = OffsetDateTime::now_utc();
    seed_show(db, &artist, &musical_hop, now + Duration::days(7)).await?;
    seed_show(db, &artist, &musical_hop, now - Duration::days(7)).await?;

    let app = create_test_app(state).with_prod_routes().build().await?;
    let req = test::TestRequest::get().uri("/venues").to_request();
    let json = json_body(test::call_service(&app, req).await, 200).await;

    let areas = json["areas"].as_array().expect("areas array");
    assert_eq!(areas.len(), 2);
    let sf = areas
        .iter()
        .find(|a| a["city"] == "San Francisco")
        .expect("San Francisco area");
    assert_eq!(sf["state"], "CA");
    let venues = sf["venues"].as_array().expect("venues array");
    assert_eq!(venues.len(), 2);
    let hop = venues
        .iter()
        .find(|v| v["id"] == musical_hop.id)
        .expect("musical hop listed");
    assert_eq!(hop["num_upcoming_shows"], 1);
    Ok(())
}

#[actix_web::test]
async fn search_matches_partial_names() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("db");
    let hop = seed_venue(db, "The Musical Hop", "San Francisco", "CA").await?;
    let park = seed_venue(db, "Park Square Live Music & Coffee", "San Francisco", "CA").await?;
    seed_venue(db, "The Dueling Pianos Bar", "New York", "NY").await?;

    let app = create_test_app(state).with_prod_routes().build().await?;
    let req = test::TestRequest::post()
        .uri("/venues/search")
        .set_json(json!({"search_term": "Music"}))
        .to_request();
    let json = json_body(test::call_service(&app, req).await, 200).await;

    assert_eq!(json["count"], 2);
    let ids: Vec<i64> = json["data"]
        .as_array()
        .expect("data array")
        .iter()
        .filter_map(|v| v["id"].as_i64())
        .collect();
    assert_eq!(ids, vec![hop.id, park.id]);

    let req = test::TestRequest::post()
        .uri("/venues/search")
        .set_json(json!({"search_term": "hop"}))
        .to_request();
    let json = json_body(test::call_service(&app, req).await, 200).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["name"], "The Musical Hop");
    Ok(())
}

#[actix_web::test]
async fn detail_splits_past_and_upcoming_shows() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("db");
    let venue = seed_venue(db, "The Musical Hop", "San Francisco", "CA").await?;
    let artist = seed_artist(db, "The Wild Sax Band").await?;
    let now = OffsetDateTime::now_utc();
    seed_show(db, &artist, &venue, now - Duration::days(30)).await?;
    seed_show(db, &artist, &venue, now + Duration::days(3)).await?;
    seed_show(db, &artist, &venue, now + Duration::days(10)).await?;

    let app = create_test_app(state).with_prod_routes().build().await?;
    let req = test::TestRequest::get()
        .uri(&format!("/venues/{}", venue.id))
        .to_request();
    let json = json_body(test::call_service(&app, req).await, 200).await;

    assert_eq!(json["id"], venue.id);
    assert_eq!(json["name"], "The Musical Hop");
    assert_eq!(json["genres"], json!(["Jazz", "Folk"]));
    assert_eq!(json["past_shows_count"], 1);
    assert_eq!(json["upcoming_shows_count"], 2);
    assert_eq!(json["past_shows"][0]["artist_name"], "The Wild Sax Band");
    assert!(json["upcoming_shows"][0]["start_time"].is_string());
    Ok(())
}

#[actix_web::test]
async fn missing_venue_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/venues/77").to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, "VENUE_NOT_FOUND", StatusCode::NOT_FOUND, None).await;
    Ok(())
}

#[actix_web::test]
async fn create_patch_delete_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/venues")
        .set_json(json!({
            "name": "  The Fillmore ",
            "city": "San Francisco",
            "state": "CA",
            "address": "1805 Geary Blvd",
            "phone": "415-346-3000",
            "genres": ["Rock n Roll", " Rock n Roll ", "Blues"],
            "seeking_talent": false
        }))
        .to_request();
    let json = json_body(test::call_service(&app, req).await, 201).await;
    let id = json["venue"]["id"].as_i64().expect("venue id");
    assert_eq!(json["venue"]["name"], "The Fillmore");
    assert_eq!(json["venue"]["genres"], json!(["Rock n Roll", "Blues"]));

    let req = test::TestRequest::patch()
        .uri(&format!("/venues/{id}"))
        .set_json(json!({"phone": null, "seeking_talent": true}))
        .to_request();
    let json = json_body(test::call_service(&app, req).await, 200).await;
    assert!(json["venue"]["phone"].is_null());
    assert_eq!(json["venue"]["seeking_talent"], true);
    assert_eq!(json["venue"]["address"], "1805 Geary Blvd");

    let req = test::TestRequest::delete()
        .uri(&format!("/venues/{id}"))
        .to_request();
    let json = json_body(test::call_service(&app, req).await, 200).await;
    assert_eq!(json["deleted"], id);

    let req = test::TestRequest::get()
        .uri(&format!("/venues/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, "VENUE_NOT_FOUND", StatusCode::NOT_FOUND, None).await;
    Ok(())
}

#[actix_web::test]
async fn blank_required_field_is_invalid() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/venues")
        .set_json(json!({"name": " ", "city": "Austin", "state": "TX", "address": "1 Main St"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, "INVALID_LISTING", StatusCode::BAD_REQUEST, None).await;
    Ok(())
}

#[actix_web::test]
async fn deleting_a_venue_cascades_to_its_shows() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("db");
    let venue = seed_venue(db, "The Musical Hop", "San Francisco", "CA").await?;
    let artist = seed_artist(db, "Matt Quevedo").await?;
    seed_show(db, &artist, &venue, OffsetDateTime::now_utc() + Duration::days(1)).await?;

    let app = create_test_app(state).with_prod_routes().build().await?;
    let req = test::TestRequest::delete()
        .uri(&format!("/venues/{}", venue.id))
        .to_request();
    json_body(test::call_service(&app, req).await, 200).await;

    let req = test::TestRequest::get().uri("/shows").to_request();
    let json = json_body(test::call_service(&app, req).await, 200).await;
    assert_eq!(json["shows"].as_array().map(Vec::len), Some(0));
    Ok(())
}
