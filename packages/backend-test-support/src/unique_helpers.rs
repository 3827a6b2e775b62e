//! Unique test data, so tests sharing a database never collide on unique columns.

use uuid::Uuid;

/// `{prefix}-{short uuid}`.
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("drink");
/// let b = unique_str("drink");
/// assert_ne!(a, b);
/// assert!(a.starts_with("drink-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("{prefix}-{}", &id[..12])
}
