use backend::adapters::shows_sea::{self, ShowCreate};
use backend::adapters::venues_sea;
use backend::errors::domain::{DomainError, RejectionKind};
use backend::infra::db_errors::map_db_err;
use time::macros::datetime;

use crate::support::build_test_state;
use crate::support::factory::{seed_artist, seed_show, seed_venue};

#[tokio::test]
async fn shows_join_their_parties_in_id_order() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("db");

    let hall = seed_venue(db, "Hall", "Oslo", "OS").await?;
    let club = seed_venue(db, "Club", "Oslo", "OS").await?;
    let band = seed_artist(db, "Band").await?;

    let first = seed_show(db, &band, &club, datetime!(2031-01-01 20:00 UTC)).await?;
    let second = seed_show(db, &band, &hall, datetime!(2030-01-01 20:00 UTC)).await?;

    let rows = shows_sea::list_shows_with_parties(db).await?;
    let ids: Vec<_> = rows.iter().map(|(s, _, _)| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(rows[0].2.name, "Club");
    assert_eq!(rows[1].1.name, "Band");

    let at_hall = shows_sea::shows_at_venue(db, hall.id).await?;
    assert_eq!(at_hall.len(), 1);
    assert_eq!(at_hall[0].1.as_ref().map(|a| a.id), Some(band.id));

    assert_eq!(shows_sea::shows_by_artist(db, band.id).await?.len(), 2);
    Ok(())
}

#[tokio::test]
async fn unknown_artist_is_a_foreign_key_rejection() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("db");
    let hall = seed_venue(db, "Hall", "Oslo", "OS").await?;

    let err = shows_sea::create_show(
        db,
        ShowCreate {
            artist_id: 77,
            venue_id: hall.id,
            start_time: datetime!(2030-05-05 19:30 UTC),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(
        map_db_err(err),
        DomainError::Unprocessable(RejectionKind::ForeignKey, _)
    ));
    Ok(())
}

#[tokio::test]
async fn deleting_a_venue_removes_its_shows() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("db");

    let hall = seed_venue(db, "Hall", "Oslo", "OS").await?;
    let band = seed_artist(db, "Band").await?;
    seed_show(db, &band, &hall, datetime!(2030-01-01 20:00 UTC)).await?;

    assert_eq!(venues_sea::delete_venue(db, hall.id).await?, 1);
    assert!(shows_sea::list_shows(db).await?.is_empty());
    Ok(())
}
