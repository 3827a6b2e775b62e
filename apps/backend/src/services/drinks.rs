//! Coffee shop menu.

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::domain::recipe::{Recipe, RecipeInput};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::drinks::{self, Drink};

fn title(raw: &str) -> Result<String, DomainError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::InvalidDrink,
            "title must not be empty",
        ));
    }
    Ok(title.to_string())
}

/// Drinks domain service.
#[derive(Debug, Default, Clone, Copy)]
pub struct DrinksService;

impl DrinksService {
    pub fn new() -> Self {
        Self
    }

    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Drink>, DomainError> {
        drinks::list_drinks(conn).await
    }

    pub async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        raw_title: &str,
        recipe: RecipeInput,
    ) -> Result<Drink, DomainError> {
        let title = title(raw_title)?;
        let recipe = Recipe::new(recipe.into_vec())?;
        let drink = drinks::create_drink(conn, title, &recipe).await?;
        info!(drink_id = drink.id, "Drink added");
        Ok(drink)
    }

    /// Replace the title and/or recipe; absent fields keep their stored value.
    pub async fn update<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
        raw_title: Option<&str>,
        recipe: Option<RecipeInput>,
    ) -> Result<Drink, DomainError> {
        let title = raw_title.map(title).transpose()?;
        let recipe = recipe
            .map(|r| Recipe::new(r.into_vec()))
            .transpose()?;
        drinks::update_drink(conn, id, title, recipe.as_ref()).await
    }

    pub async fn delete<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<(), DomainError> {
        drinks::delete_drink(conn, id).await?;
        info!(drink_id = id, "Drink removed");
        Ok(())
    }
}
