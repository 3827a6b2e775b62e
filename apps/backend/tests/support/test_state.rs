use backend::config::db::{DbKind, DbProfile};
use backend::domain::PageSize;
use backend::infra::state::{build_state, StateBuilder};
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;
use backend::AppError;

/// Signing secret shared by test states and [`super::auth`].
pub const TEST_JWT_SECRET: &[u8] = b"trio_integration_test_secret";

/// Fresh migrated in-memory store, fixed quiz seed, default page size.
pub fn test_state_builder() -> StateBuilder {
    build_state()
        .with_db(DbKind::SqliteMemory, DbProfile::Test)
        .with_security(SecurityConfig::new(TEST_JWT_SECRET))
        .with_quiz_seed(7)
}

pub async fn build_test_state() -> Result<AppState, AppError> {
    test_state_builder().build().await
}

pub async fn build_test_state_with_page_size(size: usize) -> Result<AppState, AppError> {
    let page_size =
        PageSize::new(size).ok_or_else(|| AppError::config("page size must be positive"))?;
    test_state_builder().with_page_size(page_size).build().await
}
