//! DTOs for shows_sea adapter.

use time::OffsetDateTime;

#[derive(Debug, Clone)]
pub struct ShowCreate {
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: OffsetDateTime,
}
