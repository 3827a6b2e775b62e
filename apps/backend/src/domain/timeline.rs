//! Splitting shows into past and upcoming around a reference instant.

use time::OffsetDateTime;

/// Anything scheduled at a start time.
pub trait Scheduled {
    fn start_time(&self) -> OffsetDateTime;
}

/// Shows partitioned around `now`: past is `start < now`, upcoming is `start >= now`.
#[derive(Debug)]
pub struct Timeline<'a, T> {
    pub past: Vec<&'a T>,
    pub upcoming: Vec<&'a T>,
}

impl<'a, T: Scheduled> Timeline<'a, T> {
    pub fn partition(shows: &'a [T], now: OffsetDateTime) -> Self {
        let (upcoming, past) = shows.iter().partition(|s| is_upcoming(*s, now));
        Self { past, upcoming }
    }

    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }
}

/// A show starting exactly at `now` is upcoming.
pub fn is_upcoming<T: Scheduled>(show: &T, now: OffsetDateTime) -> bool {
    show.start_time() >= now
}
