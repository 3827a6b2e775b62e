use std::env;
use std::str::FromStr;

use crate::error::AppError;

/// Which store backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    /// PostgreSQL (production)
    Postgres,
    /// SQLite database file at `SQLITE_PATH`
    SqliteFile,
    /// Private in-memory SQLite database (tests, demos)
    SqliteMemory,
}

impl DbKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::SqliteFile => "sqlite-file",
            Self::SqliteMemory => "sqlite-memory",
        }
    }

    pub const fn is_sqlite(&self) -> bool {
        matches!(self, Self::SqliteFile | Self::SqliteMemory)
    }

    /// Read `DB_KIND`; defaults to Postgres.
    pub fn from_env() -> Result<Self, AppError> {
        match env::var("DB_KIND") {
            Ok(raw) => raw.parse(),
            Err(_) => Ok(Self::Postgres),
        }
    }
}

impl FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "sqlite-file" | "sqlite" => Ok(Self::SqliteFile),
            "sqlite-memory" | "memory" => Ok(Self::SqliteMemory),
            other => Err(AppError::config(format!(
                "DB_KIND must be one of postgres, sqlite-file, sqlite-memory; got '{other}'"
            ))),
        }
    }
}

/// Database profile enum for different environments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbProfile {
    /// Production database profile
    Prod,
    /// Test database profile - enforces safety rules
    Test,
}

/// Database owner enum for different access levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOwner {
    /// Application-level access (limited permissions)
    App,
    /// Owner-level access (full permissions for migrations)
    Owner,
}

/// Builds a connection URL for `kind` from environment variables.
pub fn db_url(kind: DbKind, profile: DbProfile, owner: DbOwner) -> Result<String, AppError> {
    match kind {
        DbKind::Postgres => postgres_url(profile, owner),
        DbKind::SqliteFile => Ok(format!("sqlite://{}?mode=rwc", sqlite_path(profile)?)),
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

fn postgres_url(profile: DbProfile, owner: DbOwner) -> Result<String, AppError> {
    let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
    let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
    let db_name = db_name(profile)?;
    let (username, password) = credentials(owner)?;

    Ok(format!(
        "postgresql://{username}:{password}@{host}:{port}/{db_name}"
    ))
}

/// Get database name based on profile
fn db_name(profile: DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::Prod => must_var("PROD_DB"),
        DbProfile::Test => {
            let db_name = must_var("TEST_DB")?;
            ensure_test_name(&db_name)?;
            Ok(db_name)
        }
    }
}

/// `SQLITE_PATH`, defaulting to `trio.db` / `trio_test.db` by profile.
fn sqlite_path(profile: DbProfile) -> Result<String, AppError> {
    let path = env::var("SQLITE_PATH").unwrap_or_else(|_| match profile {
        DbProfile::Prod => "trio.db".to_string(),
        DbProfile::Test => "trio_test.db".to_string(),
    });
    if profile == DbProfile::Test {
        let stem = path.strip_suffix(".db").unwrap_or(&path);
        ensure_test_name(stem)?;
    }
    Ok(path)
}

// Test profiles must never point at a production database.
fn ensure_test_name(name: &str) -> Result<(), AppError> {
    if name.ends_with("_test") {
        Ok(())
    } else {
        Err(AppError::config(format!(
            "Test profile requires database name to end with '_test', but got: '{name}'"
        )))
    }
}

/// Get database credentials based on owner
fn credentials(owner: DbOwner) -> Result<(String, String), AppError> {
    match owner {
        DbOwner::App => Ok((must_var("APP_DB_USER")?, must_var("APP_DB_PASSWORD")?)),
        DbOwner::Owner => Ok((
            must_var("TRIO_OWNER_USER")?,
            must_var("TRIO_OWNER_PASSWORD")?,
        )),
    }
}

/// Get required environment variable or return error
pub(crate) fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
