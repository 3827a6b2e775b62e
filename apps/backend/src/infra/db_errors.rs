//! SeaORM -> DomainError translation helpers.
//!
//! Repos convert `sea_orm::DbErr` into `crate::errors::domain::DomainError`
//! here, and handlers then map `DomainError` to `AppError` via `From`.
//!
//! Constraint violations (unique, foreign key, check) mean the store refused
//! an otherwise well-formed request; they surface as `Unprocessable`, as does
//! any store failure without a more specific cause. Only an unreachable
//! store, timeouts and undecodable rows are infrastructure errors.

use tracing::{error, warn};

use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind, RejectionKind};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// `table.column` from a SQLite "UNIQUE constraint failed: table.column" message.
fn sqlite_unique_target(error_msg: &str) -> Option<&str> {
    const MARKER: &str = "UNIQUE constraint failed: ";
    let start = error_msg.find(MARKER)? + MARKER.len();
    error_msg[start..].split_whitespace().next()
}

/// Friendly detail for the unique constraints the schema declares.
fn unique_detail(error_msg: &str) -> &'static str {
    let sqlite_target = sqlite_unique_target(error_msg);
    if sqlite_target == Some("drinks.title") || error_msg.contains("drinks_title_key") {
        return "A drink with this title already exists";
    }
    if sqlite_target == Some("categories.type") || error_msg.contains("categories_type_key") {
        return "A category with this type already exists";
    }
    "Unique constraint violation"
}

/// Translate a `DbErr` into a `DomainError` with sanitized, PII-safe detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::RecordNotUpdated => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        sea_orm::DbErr::Json(_) | sea_orm::DbErr::Type(_) => {
            error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Stored value could not be decoded");
            return DomainError::infra(
                InfraErrorKind::DataCorruption,
                "Stored value could not be decoded",
            );
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unique constraint violation");
        return DomainError::unprocessable(RejectionKind::Unique, unique_detail(&error_msg));
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Foreign key constraint violation");
        return DomainError::unprocessable(
            RejectionKind::ForeignKey,
            "Referenced record does not exist or is still in use",
        );
    }

    if mentions_sqlstate(&error_msg, "23514") || error_msg.contains("CHECK constraint failed") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Check constraint violation");
        return DomainError::unprocessable(RejectionKind::Check, "Check constraint violation");
    }

    if mentions_sqlstate(&error_msg, "23502") || error_msg.contains("NOT NULL constraint failed") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Not-null constraint violation");
        return DomainError::unprocessable(
            RejectionKind::Other("NotNull".into()),
            "A required field is missing",
        );
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Store rejected operation");
    DomainError::unprocessable(
        RejectionKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}
