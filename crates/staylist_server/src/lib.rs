//! Axum REST API for the Staylist marketplace.
//!
//! The HTTP layer composes three things per request: draft validation from
//! `staylist_interface`, the ownership policy enforced by the extractors
//! and handlers here, and a [`MarketStore`](staylist_interface::MarketStore)
//! backend: PostgreSQL in production, [`MemoryMarketStore`] in tests and
//! demo mode.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod config;
mod error;
mod memory;
mod router;
mod routes;
mod state;

pub use auth::{Claims, CurrentUser, JwtKeys, MaybeUser, hash_password, verify_password};
pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use memory::MemoryMarketStore;
pub use router::create_router;
pub use state::AppState;
