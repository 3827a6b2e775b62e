pub mod drinks;
pub mod listings;
pub mod trivia;

pub use drinks::DrinksService;
pub use listings::ListingsService;
pub use trivia::TriviaService;
