//! Serialized response shapes.

use serde::{Deserialize, Serialize};
use staylist_core::{CategoryKind, RoomKind};

/// Public profile of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// User id
    pub id: i64,
    /// Unique username
    pub username: String,
    /// Avatar URL, when set
    pub avatar: Option<String>,
}

/// A listing category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    /// Category id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Listing family the category belongs to
    pub kind: CategoryKind,
}

/// An amenity a room can offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmenityRecord {
    /// Amenity id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Optional free-form description
    pub description: Option<String>,
}

/// A photo attached to a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    /// Photo id
    pub id: i64,
    /// File URL
    pub file: String,
    /// Optional caption
    pub description: Option<String>,
}

/// The single video attached to a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    /// Video id
    pub id: i64,
    /// File URL
    pub file: String,
}

/// List shape of a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSummary {
    /// Room id
    pub id: i64,
    /// Listing name
    pub name: String,
    /// Country the room is in
    pub country: String,
    /// City the room is in
    pub city: String,
    /// Nightly price
    pub price: i32,
    /// Mean review rating, 0.0 when unreviewed
    pub rating: f64,
}

/// Detail shape of a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRecord {
    /// Room id
    pub id: i64,
    /// Listing name
    pub name: String,
    /// Country the room is in
    pub country: String,
    /// City the room is in
    pub city: String,
    /// Nightly price
    pub price: i32,
    /// Number of rooms
    pub rooms: i32,
    /// Number of toilets
    pub toilets: i32,
    /// Free-form description
    pub description: String,
    /// Street address
    pub address: String,
    /// Whether pets are allowed
    pub pet_friendly: bool,
    /// How much of the place is offered
    pub kind: RoomKind,
    /// Mean review rating, 0.0 when unreviewed
    pub rating: f64,
    /// Owning user's public profile
    pub owner: UserRecord,
    /// Resolved category
    pub category: CategoryRecord,
    /// Attached amenities
    pub amenities: Vec<AmenityRecord>,
    /// Attached photos
    pub photos: Vec<PhotoRecord>,
}

impl RoomRecord {
    /// Collapse the detail shape into the list shape.
    pub fn summary(&self) -> RoomSummary {
        RoomSummary {
            id: self.id,
            name: self.name.clone(),
            country: self.country.clone(),
            city: self.city.clone(),
            price: self.price,
            rating: self.rating,
        }
    }
}

/// A review left on a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Review id
    pub id: i64,
    /// Authoring user's public profile
    pub user: UserRecord,
    /// Review text
    pub payload: String,
    /// Rating, 1 through 5
    pub rating: i32,
}

/// A user's wishlist with its member rooms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistRecord {
    /// Wishlist id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Member rooms as list summaries
    pub rooms: Vec<RoomSummary>,
}

/// Which branch a wishlist toggle executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleOutcome {
    /// The room was absent and has been added
    Added,
    /// The room was present and has been removed
    Removed,
}

impl ToggleOutcome {
    /// Wire form of the outcome.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
        }
    }
}

/// A user's login material: public profile plus stored password hash.
///
/// Never serialized; the hash stays inside the auth flow.
#[derive(Debug, Clone)]
pub struct Credential {
    /// Public profile
    pub user: UserRecord,
    /// Argon2 password hash as stored
    pub password_hash: String,
}
