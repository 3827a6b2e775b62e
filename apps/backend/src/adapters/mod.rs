//! SeaORM adapters. Functions here return `DbErr`; repos map to `DomainError`.

pub mod artists_sea;
pub mod categories_sea;
pub mod drinks_sea;
pub mod questions_sea;
pub mod shows_sea;
pub mod venues_sea;
