use tracing::warn;

use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// A bearer token was missing, malformed, expired or badly signed.
pub fn token_rejected(reason: &str, path: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_TOKEN_REJECTED",
        %trace_id,
        reason,
        path,
        "Bearer token rejected"
    );
}

/// A valid token lacked the permission an endpoint requires.
pub fn permission_denied(permission: &str, subject: Option<&str>, path: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_PERMISSION_DENIED",
        %trace_id,
        permission,
        subject = %subject.map(Redacted).unwrap_or(Redacted("")),
        path,
        "Permission denied"
    );
}
