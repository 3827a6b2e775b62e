//! Grouping venues by city and state for the venue index.

use serde::Serialize;

/// A venue as listed under its area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaVenue {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// All venues sharing one `(city, state)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<AreaVenue>,
}

/// Groups `(city, state, venue)` entries, keeping the order in which each
/// area first appears and the input order within an area.
pub fn group_by_area<I>(entries: I) -> Vec<Area>
where
    I: IntoIterator<Item = (String, String, AreaVenue)>,
{
    let mut areas: Vec<Area> = Vec::new();
    for (city, state, venue) in entries {
        match areas
            .iter_mut()
            .find(|a| a.city == city && a.state == state)
        {
            Some(area) => area.venues.push(venue),
            None => areas.push(Area {
                city,
                state,
                venues: vec![venue],
            }),
        }
    }
    areas
}
