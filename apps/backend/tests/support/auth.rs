use std::time::{Duration, SystemTime};

use backend::auth::mint_access_token;
use backend::state::security_config::SecurityConfig;

use super::test_state::TEST_JWT_SECRET;

fn security() -> SecurityConfig {
    SecurityConfig::new(TEST_JWT_SECRET)
}

/// `Authorization` header value carrying `permissions`.
pub fn bearer(permissions: &[&str]) -> String {
    let token = mint_access_token("barista|test", permissions, SystemTime::now(), &security())
        .expect("mint test token");
    format!("Bearer {token}")
}

/// A token that expired well before now.
pub fn expired_bearer(permissions: &[&str]) -> String {
    let issued = SystemTime::now() - Duration::from_secs(2 * 60 * 60);
    let token = mint_access_token("barista|test", permissions, issued, &security())
        .expect("mint test token");
    format!("Bearer {token}")
}

/// A well-formed token signed with a different secret.
pub fn foreign_bearer(permissions: &[&str]) -> String {
    let other = SecurityConfig::new(b"some_other_secret".to_vec());
    let token = mint_access_token("barista|test", permissions, SystemTime::now(), &other)
        .expect("mint test token");
    format!("Bearer {token}")
}
