use backend::adapters::drinks_sea::{self, DrinkCreate, DrinkUpdate};
use backend::errors::domain::{DomainError, RejectionKind};
use backend::infra::db_errors::map_db_err;
use backend_test_support::unique_helpers::unique_str;

use crate::support::build_test_state;

fn drink(title: &str) -> DrinkCreate {
    DrinkCreate {
        title: title.to_string(),
        recipe: r#"[{"name":"water","color":"blue","parts":1}]"#.to_string(),
    }
}

#[tokio::test]
async fn duplicate_title_is_a_unique_rejection() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("db");

    let title = unique_str("water");
    drinks_sea::create_drink(db, drink(&title)).await?;
    let err = drinks_sea::create_drink(db, drink(&title))
        .await
        .unwrap_err();
    assert_eq!(
        map_db_err(err),
        DomainError::Unprocessable(
            RejectionKind::Unique,
            "A drink with this title already exists".into()
        )
    );
    Ok(())
}

#[tokio::test]
async fn update_touches_only_given_columns() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("db");

    let created = drinks_sea::create_drink(db, drink("Water")).await?;
    let updated = drinks_sea::update_drink(
        db,
        created.id,
        DrinkUpdate {
            title: Some("Sparkling".into()),
            recipe: None,
        },
    )
    .await?
    .expect("drink exists");
    assert_eq!(updated.title, "Sparkling");
    assert_eq!(updated.recipe, created.recipe);

    assert!(drinks_sea::update_drink(db, 999, DrinkUpdate::default())
        .await?
        .is_none());
    Ok(())
}
