//! Coffee shop drinks.

use sea_orm::ConnectionTrait;

use crate::adapters::drinks_sea::{self as drinks_adapter, DrinkCreate, DrinkUpdate};
use crate::domain::recipe::Recipe;
use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drink {
    pub id: i64,
    pub title: String,
    pub recipe: Recipe,
}

fn not_found(id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Drink, format!("Drink {id} not found"))
}

pub async fn list_drinks<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Drink>, DomainError> {
    drinks_adapter::list_drinks(conn)
        .await?
        .into_iter()
        .map(Drink::try_from)
        .collect()
}

/// Insert; a duplicate title is rejected by the store (unique) as `Unprocessable`.
pub async fn create_drink<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    title: String,
    recipe: &Recipe,
) -> Result<Drink, DomainError> {
    let dto = DrinkCreate {
        title,
        recipe: recipe.to_json()?,
    };
    Drink::try_from(drinks_adapter::create_drink(conn, dto).await?)
}

pub async fn update_drink<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    title: Option<String>,
    recipe: Option<&Recipe>,
) -> Result<Drink, DomainError> {
    let dto = DrinkUpdate {
        title,
        recipe: recipe.map(Recipe::to_json).transpose()?,
    };
    let row = drinks_adapter::update_drink(conn, id, dto)
        .await?
        .ok_or_else(|| not_found(id))?;
    Drink::try_from(row)
}

pub async fn delete_drink<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<(), DomainError> {
    match drinks_adapter::delete_drink(conn, id).await? {
        0 => Err(not_found(id)),
        _ => Ok(()),
    }
}

impl TryFrom<crate::entities::drinks::Model> for Drink {
    type Error = DomainError;

    fn try_from(model: crate::entities::drinks::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            recipe: Recipe::from_json(&model.recipe, model.id)?,
            id: model.id,
            title: model.title,
        })
    }
}
