//! Process configuration loaded from environment variables.

use std::env;

use crate::config::db::{must_var, DbKind};
use crate::domain::PageSize;
use crate::error::AppError;

/// Everything `main` needs to start serving.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub db_kind: DbKind,
    pub jwt_secret: String,
    pub page_size: PageSize,
}

impl AppConfig {
    /// Load and validate all configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port_str = env::var("BACKEND_PORT").unwrap_or_else(|_| "3001".to_string());
        let port = port_str.parse::<u16>().map_err(|_| {
            AppError::config(format!(
                "BACKEND_PORT must be a valid port number, got '{port_str}'"
            ))
        })?;

        let jwt_secret = must_var("BACKEND_JWT_SECRET")?;
        if jwt_secret.trim().is_empty() {
            return Err(AppError::config("BACKEND_JWT_SECRET must not be empty"));
        }

        Ok(Self {
            host,
            port,
            db_kind: DbKind::from_env()?,
            jwt_secret,
            page_size: page_size_from_env()?,
        })
    }
}

/// `QUESTIONS_PER_PAGE`, defaulting to 10.
pub fn page_size_from_env() -> Result<PageSize, AppError> {
    match env::var("QUESTIONS_PER_PAGE") {
        Err(_) => Ok(PageSize::default()),
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(PageSize::new)
            .ok_or_else(|| {
                AppError::config(format!(
                    "QUESTIONS_PER_PAGE must be a positive integer, got '{raw}'"
                ))
            }),
    }
}
