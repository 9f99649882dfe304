//! Per-resource route modules.

pub mod amenities;
pub mod categories;
pub mod medias;
pub mod rooms;
pub mod users;
pub mod wishlists;

use serde::Deserialize;

/// Query parameters for paginated sub-resource listings.
///
/// The raw string survives to [`staylist_core::PageRequest::parse`] so a
/// malformed value becomes a field-keyed 400 instead of a silent default.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PageParams {
    pub page: Option<String>,
}
