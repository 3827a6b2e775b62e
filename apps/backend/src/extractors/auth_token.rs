use actix_web::{dev::Payload, http::header, FromRequest, HttpRequest};

use crate::error::AppError;
use crate::logging::security;

/// Raw bearer token taken from the `Authorization` header.
#[derive(Debug, Clone)]
pub struct AuthToken {
    pub token: String,
}

impl AuthToken {
    /// Parse `Authorization: Bearer <token>`.
    pub fn from_headers(req: &HttpRequest) -> Result<Self, AppError> {
        let auth_value = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| rejected(req, "authorization header missing"))?;

        let parts: Vec<&str> = auth_value.split_whitespace().collect();
        if parts.len() != 2 || parts[0] != "Bearer" || parts[1].is_empty() {
            return Err(rejected(req, "authorization header malformed"));
        }

        Ok(AuthToken {
            token: parts[1].to_string(),
        })
    }
}

fn rejected(req: &HttpRequest, reason: &str) -> AppError {
    security::token_rejected(reason, req.path());
    AppError::unauthorized_missing_bearer()
}

impl FromRequest for AuthToken {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move { AuthToken::from_headers(&req) })
    }
}
