use backend::domain::recipe::{Ingredient, Recipe};
use backend::domain::CategoryId;
use backend::errors::domain::DomainError;
use backend::repos::artists::{self, Artist, NewArtist};
use backend::repos::drinks::{self, Drink};
use backend::repos::questions::{self, NewQuestion, Question};
use backend::repos::shows::{self, Show};
use backend::repos::venues::{self, NewVenue, Venue};
use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

/// Seeded category ids (see the initial migration).
pub const SCIENCE: i64 = 1;
pub const ART: i64 = 2;
pub const HISTORY: i64 = 4;

pub async fn seed_question<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    text: &str,
    category: i64,
) -> Result<Question, DomainError> {
    questions::create_question(
        conn,
        NewQuestion {
            question: text.to_string(),
            answer: format!("answer to {text}"),
            category: CategoryId(category),
            difficulty: 2,
        },
    )
    .await
}

/// `n` questions in `category`, returned in id order.
pub async fn seed_questions<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    n: usize,
    category: i64,
) -> Result<Vec<Question>, DomainError> {
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        out.push(seed_question(conn, &format!("Question {i}?"), category).await?);
    }
    Ok(out)
}

pub async fn seed_venue<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    city: &str,
    state: &str,
) -> Result<Venue, DomainError> {
    venues::create_venue(
        conn,
        NewVenue {
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: Some("123-123-1234".to_string()),
            image_link: None,
            facebook_link: None,
            website: None,
            genres: vec!["Jazz".to_string(), "Folk".to_string()],
            seeking_talent: true,
            seeking_description: Some("Looking for local acts".to_string()),
        },
    )
    .await
}

pub async fn seed_artist<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Artist, DomainError> {
    artists::create_artist(
        conn,
        NewArtist {
            name: name.to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: None,
            image_link: Some("https://img.example/artist.png".to_string()),
            facebook_link: None,
            website: None,
            genres: vec!["Rock n Roll".to_string()],
            seeking_venue: false,
            seeking_description: None,
        },
    )
    .await
}

pub async fn seed_show<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    artist: &Artist,
    venue: &Venue,
    start_time: OffsetDateTime,
) -> Result<Show, DomainError> {
    shows::create_show(conn, artist.id, venue.id, start_time).await
}

pub fn ingredient(name: &str, color: &str, parts: u32) -> Ingredient {
    Ingredient {
        name: name.to_string(),
        color: color.to_string(),
        parts,
    }
}

pub async fn seed_drink<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    title: &str,
) -> Result<Drink, DomainError> {
    let recipe = Recipe::new(vec![
        ingredient("espresso", "brown", 1),
        ingredient("milk", "white", 3),
    ])?;
    drinks::create_drink(conn, title.to_string(), &recipe).await
}
