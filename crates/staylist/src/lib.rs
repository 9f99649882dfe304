//! Staylist - Listing-and-booking marketplace backend
//!
//! Staylist exposes rooms, amenities, categories, reviews, wishlists, and
//! media as a JSON REST API over PostgreSQL.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use staylist::{AppState, JwtKeys, PostgresMarketStore, build_pool, create_router};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = build_pool(&std::env::var("DATABASE_URL")?)?;
//!     let store = Arc::new(PostgresMarketStore::new(pool));
//!     let state = AppState::new(store, JwtKeys::new("secret"), 3);
//!     let app = create_router(state);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Staylist is organized as a workspace with focused crates:
//!
//! - `staylist_error` - error taxonomy shared by every layer
//! - `staylist_core` - kinds, identity, pagination, telemetry
//! - `staylist_interface` - wire types and the store traits
//! - `staylist_database` - Diesel/PostgreSQL store implementation
//! - `staylist_server` - axum routers, auth, configuration, binary

#![forbid(unsafe_code)]

pub use staylist_core::{
    CategoryKind, DEFAULT_PAGE_SIZE, Identity, PageRequest, RoomKind, init_telemetry,
};
pub use staylist_database::{DbPool, PostgresMarketStore, build_pool, run_migrations};
pub use staylist_error::{
    AuthError, AuthErrorKind, ConfigError, DatabaseError, DatabaseErrorKind, NotFoundError,
    RuleError, RuleErrorKind, ServerError, ServerErrorKind, StaylistError, StaylistErrorKind,
    StaylistResult, ValidationError,
};
pub use staylist_interface::{
    AmenityDraft, AmenityRecord, AmenityStore, CategoryDraft, CategoryRecord, CategoryStore,
    Credential, LoginDraft, MarketStore, MediaStore, NewRoom, PhotoDraft, PhotoRecord,
    ReviewDraft, ReviewRecord, ReviewStore, RoomDraft, RoomPatch, RoomRecord, RoomStore,
    RoomSummary, SignupDraft, ToggleOutcome, UserRecord, UserStore, VideoDraft, VideoRecord,
    WishlistDraft, WishlistRecord, WishlistStore,
};
pub use staylist_server::{
    ApiError, ApiResult, AppState, CurrentUser, JwtKeys, MaybeUser, MemoryMarketStore,
    ServerConfig, create_router, hash_password, verify_password,
};
