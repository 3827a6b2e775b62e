//! DTOs for drinks_sea adapter. Recipes arrive already JSON-encoded.

#[derive(Debug, Clone)]
pub struct DrinkCreate {
    pub title: String,
    pub recipe: String,
}

#[derive(Debug, Clone, Default)]
pub struct DrinkUpdate {
    pub title: Option<String>,
    pub recipe: Option<String>,
}
