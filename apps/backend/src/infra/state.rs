use crate::config::db::{DbKind, DbProfile};
use crate::domain::{PageSize, QuizRng};
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    security_config: SecurityConfig,
    db: Option<(DbKind, DbProfile)>,
    page_size: PageSize,
    quiz_seed: Option<u64>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: SecurityConfig::default(),
            db: None,
            page_size: PageSize::default(),
            quiz_seed: None,
        }
    }

    pub fn with_db(mut self, kind: DbKind, profile: DbProfile) -> Self {
        self.db = Some((kind, profile));
        self
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Seed quiz draws for reproducible runs.
    pub fn with_quiz_seed(mut self, seed: u64) -> Self {
        self.quiz_seed = Some(seed);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let state = match self.db {
            // single entrypoint: build + migrate
            Some((kind, profile)) => {
                let conn = bootstrap_db(kind, profile).await?;
                AppState::new(conn, self.security_config)
            }
            None => AppState::new_without_db(self.security_config),
        };
        Ok(state
            .with_page_size(self.page_size)
            .with_quiz_rng(QuizRng::new(self.quiz_seed)))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
