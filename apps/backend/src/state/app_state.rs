use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::domain::{PageSize, QuizRng};

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (absent in tests that never touch the store)
    pub db: Option<DatabaseConnection>,
    /// Security configuration including JWT settings
    pub security: SecurityConfig,
    /// Items per page for paginated question listings
    pub page_size: PageSize,
    /// Random source for quiz draws
    pub quiz_rng: Arc<QuizRng>,
}

impl AppState {
    /// Create a new AppState with the given database connection and security config
    pub fn new(db: DatabaseConnection, security: SecurityConfig) -> Self {
        Self {
            db: Some(db),
            security,
            page_size: PageSize::default(),
            quiz_rng: Arc::new(QuizRng::default()),
        }
    }

    /// Create a new AppState without a database connection
    pub fn new_without_db(security: SecurityConfig) -> Self {
        Self {
            db: None,
            security,
            page_size: PageSize::default(),
            quiz_rng: Arc::new(QuizRng::default()),
        }
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_quiz_rng(mut self, quiz_rng: QuizRng) -> Self {
        self.quiz_rng = Arc::new(quiz_rng);
        self
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
