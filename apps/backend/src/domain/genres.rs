//! Genre lists stored as JSON text columns.

use crate::errors::domain::{DomainError, InfraErrorKind};

/// Trim entries, drop blanks and repeats, keep first-seen order.
pub fn normalize(genres: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(genres.len());
    for genre in genres {
        let genre = genre.trim();
        if !genre.is_empty() && !out.iter().any(|g| g == genre) {
            out.push(genre.to_string());
        }
    }
    out
}

pub fn encode(genres: &[String]) -> String {
    // A Vec<String> always serializes.
    serde_json::to_string(genres).unwrap_or_else(|_| "[]".to_string())
}

pub fn decode(raw: &str, owner: &str, id: i64) -> Result<Vec<String>, DomainError> {
    serde_json::from_str(raw).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("invalid genres stored for {owner} id={id}: {e}"),
        )
    })
}
