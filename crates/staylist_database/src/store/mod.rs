//! PostgreSQL implementation of the store traits.

mod amenities;
mod categories;
mod medias;
mod reviews;
mod rooms;
mod support;
mod users;
mod wishlists;

use crate::DbPool;
use diesel::pg::PgConnection;
use staylist_error::{DatabaseError, DatabaseErrorKind, StaylistResult};

/// Database-backed market store.
///
/// Every operation checks a connection out of the r2d2 pool and runs its
/// Diesel queries on the blocking thread pool, keeping the async runtime
/// free for request handling.
#[derive(Clone)]
pub struct PostgresMarketStore {
    pool: DbPool,
}

impl PostgresMarketStore {
    /// Create a new store over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Run a synchronous database operation on the blocking thread pool.
    pub(crate) async fn blocking<T, F>(&self, op: F) -> StaylistResult<T>
    where
        F: FnOnce(&mut PgConnection) -> StaylistResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(DatabaseError::from)?;
            op(&mut conn)
        })
        .await
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Query(e.to_string())))?
    }
}
