//! Drink recipes and their public/detailed projections.

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};

/// One layer of a drink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub color: String,
    pub parts: u32,
}

/// Public view of an ingredient: what the drink looks like, not what is in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortIngredient {
    pub color: String,
    pub parts: u32,
}

/// Request shape: a single ingredient object or a list of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecipeInput {
    One(Ingredient),
    Many(Vec<Ingredient>),
}

impl RecipeInput {
    pub fn into_vec(self) -> Vec<Ingredient> {
        match self {
            Self::One(ingredient) => vec![ingredient],
            Self::Many(list) => list,
        }
    }
}

/// A validated, non-empty recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Recipe(Vec<Ingredient>);

impl Recipe {
    pub fn new(ingredients: Vec<Ingredient>) -> Result<Self, DomainError> {
        if ingredients.is_empty() {
            return Err(invalid("recipe must contain at least one ingredient"));
        }
        for (i, ingredient) in ingredients.iter().enumerate() {
            if ingredient.name.trim().is_empty() {
                return Err(invalid(format!("ingredient {i} has an empty name")));
            }
            if ingredient.color.trim().is_empty() {
                return Err(invalid(format!("ingredient {i} has an empty color")));
            }
            if ingredient.parts == 0 {
                return Err(invalid(format!("ingredient {i} must have at least one part")));
            }
        }
        Ok(Self(ingredients))
    }

    pub fn short(&self) -> Vec<ShortIngredient> {
        self.0
            .iter()
            .map(|i| ShortIngredient {
                color: i.color.clone(),
                parts: i.parts,
            })
            .collect()
    }

    pub fn long(&self) -> &[Ingredient] {
        &self.0
    }

    /// Column encoding.
    pub fn to_json(&self) -> Result<String, DomainError> {
        serde_json::to_string(&self.0).map_err(|e| {
            DomainError::infra(
                InfraErrorKind::Other("RecipeEncode".into()),
                format!("failed to encode recipe: {e}"),
            )
        })
    }

    /// Decode a stored recipe; a malformed column is data corruption, not bad input.
    pub fn from_json(raw: &str, drink_id: i64) -> Result<Self, DomainError> {
        serde_json::from_str::<Vec<Ingredient>>(raw)
            .map(Self)
            .map_err(|e| {
                DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("invalid recipe stored for drink_id={drink_id}: {e}"),
                )
            })
    }
}

fn invalid(detail: impl Into<String>) -> DomainError {
    DomainError::validation(ValidationKind::InvalidDrink, detail)
}
