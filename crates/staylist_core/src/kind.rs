//! Kind enumerations for categories and rooms.

use serde::{Deserialize, Serialize};

/// Listing family a category belongs to.
///
/// Rooms may only reference categories of kind [`CategoryKind::Rooms`];
/// the experiences side of the marketplace shares the same reference data.
///
/// # Examples
///
/// ```
/// use staylist_core::CategoryKind;
///
/// assert_eq!(CategoryKind::parse("rooms"), Some(CategoryKind::Rooms));
/// assert_eq!(CategoryKind::Experiences.as_str(), "experiences");
/// assert_eq!(CategoryKind::parse("bogus"), None);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    /// Room listings
    #[display("rooms")]
    Rooms,
    /// Experience listings
    #[display("experiences")]
    Experiences,
}

impl CategoryKind {
    /// Stored string form of the kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rooms => "rooms",
            Self::Experiences => "experiences",
        }
    }

    /// Parse the stored string form.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "rooms" => Some(Self::Rooms),
            "experiences" => Some(Self::Experiences),
            _ => None,
        }
    }
}

/// How much of the place a room listing offers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum RoomKind {
    /// The whole place is listed
    #[display("entire_place")]
    EntirePlace,
    /// A private room within a shared place
    #[display("private_room")]
    PrivateRoom,
    /// A shared room
    #[display("shared_room")]
    SharedRoom,
}

impl RoomKind {
    /// Stored string form of the kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EntirePlace => "entire_place",
            Self::PrivateRoom => "private_room",
            Self::SharedRoom => "shared_room",
        }
    }

    /// Parse the stored string form.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "entire_place" => Some(Self::EntirePlace),
            "private_room" => Some(Self::PrivateRoom),
            "shared_room" => Some(Self::SharedRoom),
            _ => None,
        }
    }
}
