//! PostgreSQL integration for Staylist.
//!
//! Implements every store trait from `staylist_interface` over Diesel and
//! an r2d2 connection pool. Queries run synchronously on the blocking
//! thread pool; the room-creation flow is the one multi-statement
//! transaction in the system.

#![forbid(unsafe_code)]

mod connection;
mod conversions;
pub mod models;
pub mod schema;
mod store;

pub use connection::{DbPool, build_pool, run_migrations};
pub use store::PostgresMarketStore;
