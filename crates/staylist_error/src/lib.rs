//! Error types for the Staylist marketplace backend.
//!
//! This crate provides the foundation error types used throughout the
//! Staylist workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean
//! error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use staylist_error::{NotFoundError, StaylistResult};
//!
//! fn fetch_room(id: i64) -> StaylistResult<String> {
//!     Err(NotFoundError::new("room", id))?
//! }
//!
//! match fetch_room(7) {
//!     Ok(room) => println!("Got: {}", room),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod config;
#[cfg(feature = "database")]
mod database;
mod error;
mod not_found;
mod rule;
mod server;
mod validation;

pub use auth::{AuthError, AuthErrorKind};
pub use config::ConfigError;
#[cfg(feature = "database")]
pub use database::{DatabaseError, DatabaseErrorKind};
pub use error::{StaylistError, StaylistErrorKind, StaylistResult};
pub use not_found::NotFoundError;
pub use rule::{RuleError, RuleErrorKind};
pub use server::{ServerError, ServerErrorKind};
pub use validation::ValidationError;
