use actix_web::web;

pub mod artists;
pub mod categories;
pub mod drinks;
pub mod health;
pub mod questions;
pub mod quizzes;
pub mod shows;
pub mod venues;

/// Register every route family. `main.rs` and the integration tests share
/// this so both serve the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    health::configure_routes(cfg);

    // Trivia
    cfg.service(web::scope("/categories").configure(categories::configure_routes));
    cfg.service(web::scope("/questions").configure(questions::configure_routes));
    cfg.service(web::scope("/quizzes").configure(quizzes::configure_routes));

    // Listings
    cfg.service(web::scope("/venues").configure(venues::configure_routes));
    cfg.service(web::scope("/artists").configure(artists::configure_routes));
    cfg.service(web::scope("/shows").configure(shows::configure_routes));

    // Coffee shop (`/drinks` and `/drinks-detail` share no scope)
    drinks::configure_routes(cfg);
}
