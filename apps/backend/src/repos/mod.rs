//! Repository functions: domain models over the sea-orm adapters.

pub mod artists;
pub mod categories;
pub mod drinks;
pub mod questions;
pub mod shows;
pub mod venues;
