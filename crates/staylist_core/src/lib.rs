//! Core domain types for the Staylist marketplace backend.
//!
//! This crate holds the primitives shared by every other workspace member:
//! the category and room kind enumerations, the authenticated acting
//! identity, page-window arithmetic for sub-resource listings, and the
//! tracing bootstrap.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod identity;
mod kind;
mod pagination;
mod telemetry;

pub use identity::Identity;
pub use kind::{CategoryKind, RoomKind};
pub use pagination::{DEFAULT_PAGE_SIZE, PageRequest};
pub use telemetry::init_telemetry;
