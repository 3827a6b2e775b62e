use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Integer `{id}` path segment.
///
/// A segment that is not a positive integer cannot name a record, so it is
/// answered like any other missing record (404).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub i64);

impl RecordId {
    fn parse(raw: Option<&str>) -> Result<Self, AppError> {
        raw.and_then(|s| s.parse::<i64>().ok())
            .filter(|id| *id > 0)
            .map(RecordId)
            .ok_or_else(|| {
                AppError::not_found(
                    ErrorCode::NotFound,
                    format!("No record at id '{}'", raw.unwrap_or_default()),
                )
            })
    }
}

impl FromRequest for RecordId {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        std::future::ready(RecordId::parse(req.match_info().get("id")))
    }
}
