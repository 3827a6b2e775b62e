//! Error codes for the Trio backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the `code` field of
//! error payloads.

use core::fmt;

/// Centralized error codes for the Trio backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Invalid JWT token
    UnauthorizedInvalidJwt,
    /// JWT token has expired
    UnauthorizedExpiredJwt,
    /// Token lacks the permission the endpoint requires
    MissingPermission,

    // Request Validation
    /// Page number is not a positive integer
    InvalidPage,
    /// Search term missing or blank
    InvalidSearchTerm,
    /// Question payload failed validation
    InvalidQuestion,
    /// Listing (venue/artist/show) payload failed validation
    InvalidListing,
    /// Drink payload failed validation
    InvalidDrink,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// Question not found
    QuestionNotFound,
    /// Category not found
    CategoryNotFound,
    /// Venue not found
    VenueNotFound,
    /// Artist not found
    ArtistNotFound,
    /// Drink not found
    DrinkNotFound,
    /// Requested page has no items
    PageNotFound,
    /// General not found error
    NotFound,

    // Store rejections
    /// Unique constraint violation
    UniqueViolation,
    /// Foreign key constraint violation
    FkViolation,
    /// Check constraint violation
    CheckViolation,
    /// Store refused a well-formed request
    Unprocessable,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout
    DbTimeout,
    /// Stored data could not be decoded
    DataCorruption,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",
            Self::MissingPermission => "MISSING_PERMISSION",

            Self::InvalidPage => "INVALID_PAGE",
            Self::InvalidSearchTerm => "INVALID_SEARCH_TERM",
            Self::InvalidQuestion => "INVALID_QUESTION",
            Self::InvalidListing => "INVALID_LISTING",
            Self::InvalidDrink => "INVALID_DRINK",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::QuestionNotFound => "QUESTION_NOT_FOUND",
            Self::CategoryNotFound => "CATEGORY_NOT_FOUND",
            Self::VenueNotFound => "VENUE_NOT_FOUND",
            Self::ArtistNotFound => "ARTIST_NOT_FOUND",
            Self::DrinkNotFound => "DRINK_NOT_FOUND",
            Self::PageNotFound => "PAGE_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::UniqueViolation => "UNIQUE_VIOLATION",
            Self::FkViolation => "FK_VIOLATION",
            Self::CheckViolation => "CHECK_VIOLATION",
            Self::Unprocessable => "UNPROCESSABLE",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
