pub mod drinks;
pub mod error_shape;
pub mod listings_shows;
pub mod listings_venues;
pub mod quizzes;
pub mod trivia_categories;
