//! Database connection utilities.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use staylist_error::{DatabaseError, DatabaseErrorKind};

/// Shared connection pool type used throughout the workspace.
pub type DbPool = Pool<ConnectionManager<PgConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Build an r2d2 connection pool for the given database URL.
///
/// # Errors
///
/// Returns an error when the pool cannot establish its initial
/// connections.
pub fn build_pool(database_url: &str) -> Result<DbPool, DatabaseError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .build(manager)
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Pool(e.to_string())))
}

/// Run all pending embedded migrations.
///
/// # Errors
///
/// Returns an error when a migration fails to apply.
pub fn run_migrations(conn: &mut PgConnection) -> Result<(), DatabaseError> {
    conn.run_pending_migrations(MIGRATIONS)
        .map(|applied| {
            tracing::info!(count = applied.len(), "Applied pending migrations");
        })
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Migration(e.to_string())))
}
