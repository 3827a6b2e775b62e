use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use serde::Deserialize;

use crate::domain::PageNumber;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
struct RawPageQuery {
    page: Option<String>,
}

/// `?page=N`, defaulting to the first page.
///
/// The raw value is taken as a string so that `page=abc` and `page=0` both
/// surface as `INVALID_PAGE` rather than a generic query error.
#[derive(Debug, Clone, Copy)]
pub struct PageQuery(pub PageNumber);

impl FromRequest for PageQuery {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        std::future::ready(parse(req.query_string()))
    }
}

fn parse(query: &str) -> Result<PageQuery, AppError> {
    let raw = web::Query::<RawPageQuery>::from_query(query)
        .map(web::Query::into_inner)
        .unwrap_or(RawPageQuery { page: None });

    let page = PageNumber::parse(raw.page.as_deref())?;
    Ok(PageQuery(page))
}
