use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use tracing::info;

use crate::config::db::{db_url, DbKind, DbOwner, DbProfile};
use crate::error::AppError;

/// Pool sizing per store kind.
fn connect_options(url: &str, kind: DbKind) -> ConnectOptions {
    let mut opt = ConnectOptions::new(url.to_string());
    match kind {
        // Every connection to `sqlite::memory:` is its own database; keep exactly one alive.
        DbKind::SqliteMemory => {
            opt.min_connections(1).max_connections(1);
        }
        DbKind::SqliteFile => {
            opt.min_connections(1).max_connections(4);
        }
        DbKind::Postgres => {
            opt.min_connections(1).max_connections(16);
        }
    }
    opt.acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);
    opt
}

/// Open a pool for `kind` without running migrations.
pub async fn connect_db(
    kind: DbKind,
    profile: DbProfile,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let url = db_url(kind, profile, owner)?;
    let conn = Database::connect(connect_options(&url, kind)).await?;

    if kind.is_sqlite() {
        conn.execute(Statement::from_string(
            conn.get_database_backend(),
            "PRAGMA foreign_keys = ON;".to_string(),
        ))
        .await?;
    }

    Ok(conn)
}

/// Build the app pool *and* guarantee the schema is current.
///
/// - SqliteMemory: migrate on the very pool that is returned.
/// - Others: migrate through an owner pool, then open the app pool.
pub async fn bootstrap_db(kind: DbKind, profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    info!(
        db_kind = kind.as_str(),
        profile = ?profile,
        pid = std::process::id(),
        "bootstrap=start"
    );

    let conn = match kind {
        DbKind::SqliteMemory | DbKind::SqliteFile => {
            let conn = connect_db(kind, profile, DbOwner::App).await?;
            run_migrations(&conn).await?;
            conn
        }
        DbKind::Postgres => {
            let owner = connect_db(kind, profile, DbOwner::Owner).await?;
            run_migrations(&owner).await?;
            owner
                .close()
                .await
                .map_err(|e| AppError::db(format!("failed to close owner pool: {e}")))?;
            connect_db(kind, profile, DbOwner::App).await?
        }
    };

    info!("bootstrap=ready");
    Ok(conn)
}

async fn run_migrations(conn: &DatabaseConnection) -> Result<(), AppError> {
    migrate(conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::db(format!("migration failed: {e}")))
}
