//! DTOs for venues_sea adapter. Genres arrive already JSON-encoded.

#[derive(Debug, Clone)]
pub struct VenueCreate {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub genres: String,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Partial update; `None` leaves the column untouched, `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct VenueUpdate {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<Option<String>>,
    pub image_link: Option<Option<String>>,
    pub facebook_link: Option<Option<String>>,
    pub website: Option<Option<String>>,
    pub genres: Option<String>,
    pub seeking_talent: Option<bool>,
    pub seeking_description: Option<Option<String>>,
}
