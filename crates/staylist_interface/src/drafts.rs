//! Request drafts and their validated forms.
//!
//! A draft deserializes straight from request JSON with every field
//! optional, then `validated()` either produces the typed input a store
//! accepts or a [`ValidationError`] keyed by field name. Patch types carry
//! partial updates: absent fields leave the stored row untouched.

use serde::Deserialize;
use staylist_core::{CategoryKind, RoomKind};
use staylist_error::ValidationError;

const REQUIRED: &str = "This field is required.";
const BLANK: &str = "This field may not be blank.";

const ROOM_NAME_MAX: usize = 180;
const AMENITY_NAME_MAX: usize = 150;
const WISHLIST_NAME_MAX: usize = 150;
const USERNAME_MAX: usize = 150;
const PASSWORD_MIN: usize = 8;

/// Require a non-blank string no longer than `max` characters.
fn require_text(
    err: &mut ValidationError,
    field: &str,
    value: Option<&str>,
    max: usize,
) -> Option<String> {
    match value {
        None => {
            err.push(field, REQUIRED);
            None
        }
        Some(raw) if raw.trim().is_empty() => {
            err.push(field, BLANK);
            None
        }
        Some(raw) if raw.chars().count() > max => {
            err.push(
                field,
                format!("Ensure this field has no more than {max} characters."),
            );
            None
        }
        Some(raw) => Some(raw.to_string()),
    }
}

/// Check an already-present string against blank/length rules.
fn check_text(err: &mut ValidationError, field: &str, raw: &str, max: usize) -> Option<String> {
    require_text(err, field, Some(raw), max)
}

/// Require a non-negative integer.
fn require_non_negative(err: &mut ValidationError, field: &str, value: Option<i32>) -> Option<i32> {
    match value {
        None => {
            err.push(field, REQUIRED);
            None
        }
        Some(n) if n < 0 => {
            err.push(field, "Ensure this value is greater than or equal to 0.");
            None
        }
        Some(n) => Some(n),
    }
}

// ---------------------------------------------------------------------------
// Rooms
// ---------------------------------------------------------------------------

/// Incoming room payload.
///
/// The `category` id is resolved by the handler before the store runs;
/// `amenities` travel into the creation transaction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomDraft {
    /// Listing name
    pub name: Option<String>,
    /// Country the room is in
    pub country: Option<String>,
    /// City the room is in
    pub city: Option<String>,
    /// Nightly price
    pub price: Option<i32>,
    /// Number of rooms
    pub rooms: Option<i32>,
    /// Number of toilets
    pub toilets: Option<i32>,
    /// Free-form description
    pub description: Option<String>,
    /// Street address
    pub address: Option<String>,
    /// Whether pets are allowed, defaults to false
    pub pet_friendly: Option<bool>,
    /// Room kind choice
    pub kind: Option<String>,
    /// Category id to bind, validated separately
    pub category: Option<i64>,
    /// Amenity ids to attach
    pub amenities: Option<Vec<i64>>,
}

/// Validated room input ready for the creation transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRoom {
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
    /// Amenity ids to attach inside the same unit of work
    pub amenities: Vec<i64>,
}

impl RoomDraft {
    /// Validate every base field, collecting failures per field.
    pub fn validated(&self) -> Result<NewRoom, ValidationError> {
        let mut err = ValidationError::new();

        let name = require_text(&mut err, "name", self.name.as_deref(), ROOM_NAME_MAX);
        let country = require_text(&mut err, "country", self.country.as_deref(), ROOM_NAME_MAX);
        let city = require_text(&mut err, "city", self.city.as_deref(), ROOM_NAME_MAX);
        let price = require_non_negative(&mut err, "price", self.price);
        let rooms = require_non_negative(&mut err, "rooms", self.rooms);
        let toilets = require_non_negative(&mut err, "toilets", self.toilets);
        let description = match self.description.as_deref() {
            None => {
                err.push("description", REQUIRED);
                None
            }
            Some(raw) if raw.trim().is_empty() => {
                err.push("description", BLANK);
                None
            }
            Some(raw) => Some(raw.to_string()),
        };
        let address = require_text(&mut err, "address", self.address.as_deref(), ROOM_NAME_MAX);
        let kind = parse_room_kind(&mut err, self.kind.as_deref());

        err.finish()?;

        Ok(NewRoom {
            name: name.unwrap_or_default(),
            country: country.unwrap_or_default(),
            city: city.unwrap_or_default(),
            price: price.unwrap_or_default(),
            rooms: rooms.unwrap_or_default(),
            toilets: toilets.unwrap_or_default(),
            description: description.unwrap_or_default(),
            address: address.unwrap_or_default(),
            pet_friendly: self.pet_friendly.unwrap_or(false),
            kind: kind.unwrap_or(RoomKind::EntirePlace),
            amenities: self.amenities.clone().unwrap_or_default(),
        })
    }
}

fn parse_room_kind(err: &mut ValidationError, raw: Option<&str>) -> Option<RoomKind> {
    match raw {
        None => {
            err.push("kind", REQUIRED);
            None
        }
        Some(raw) => match RoomKind::parse(raw) {
            Some(kind) => Some(kind),
            None => {
                err.push("kind", format!("\"{raw}\" is not a valid choice."));
                None
            }
        },
    }
}

/// Partial room update payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomPatch {
    /// New listing name
    pub name: Option<String>,
    /// New country
    pub country: Option<String>,
    /// New city
    pub city: Option<String>,
    /// New nightly price
    pub price: Option<i32>,
    /// New number of rooms
    pub rooms: Option<i32>,
    /// New number of toilets
    pub toilets: Option<i32>,
    /// New description
    pub description: Option<String>,
    /// New street address
    pub address: Option<String>,
    /// New pet policy
    pub pet_friendly: Option<bool>,
    /// New room kind choice
    pub kind: Option<String>,
}

/// Validated partial room update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomChanges {
    /// New listing name
    pub name: Option<String>,
    /// New country
    pub country: Option<String>,
    /// New city
    pub city: Option<String>,
    /// New nightly price
    pub price: Option<i32>,
    /// New number of rooms
    pub rooms: Option<i32>,
    /// New number of toilets
    pub toilets: Option<i32>,
    /// New description
    pub description: Option<String>,
    /// New street address
    pub address: Option<String>,
    /// New pet policy
    pub pet_friendly: Option<bool>,
    /// New room kind
    pub kind: Option<RoomKind>,
}

impl RoomPatch {
    /// Validate only the provided fields.
    pub fn validated(&self) -> Result<RoomChanges, ValidationError> {
        let mut err = ValidationError::new();

        let mut changes = RoomChanges::default();
        if let Some(raw) = self.name.as_deref() {
            changes.name = check_text(&mut err, "name", raw, ROOM_NAME_MAX);
        }
        if let Some(raw) = self.country.as_deref() {
            changes.country = check_text(&mut err, "country", raw, ROOM_NAME_MAX);
        }
        if let Some(raw) = self.city.as_deref() {
            changes.city = check_text(&mut err, "city", raw, ROOM_NAME_MAX);
        }
        if self.price.is_some() {
            changes.price = require_non_negative(&mut err, "price", self.price);
        }
        if self.rooms.is_some() {
            changes.rooms = require_non_negative(&mut err, "rooms", self.rooms);
        }
        if self.toilets.is_some() {
            changes.toilets = require_non_negative(&mut err, "toilets", self.toilets);
        }
        if let Some(raw) = self.description.as_deref() {
            if raw.trim().is_empty() {
                err.push("description", BLANK);
            } else {
                changes.description = Some(raw.to_string());
            }
        }
        if let Some(raw) = self.address.as_deref() {
            changes.address = check_text(&mut err, "address", raw, ROOM_NAME_MAX);
        }
        changes.pet_friendly = self.pet_friendly;
        if self.kind.is_some() {
            changes.kind = parse_room_kind(&mut err, self.kind.as_deref());
        }

        err.finish()?;
        Ok(changes)
    }
}

// ---------------------------------------------------------------------------
// Amenities
// ---------------------------------------------------------------------------

/// Incoming amenity payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AmenityDraft {
    /// Display name
    pub name: Option<String>,
    /// Optional free-form description
    pub description: Option<String>,
}

/// Validated amenity input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAmenity {
    /// Display name
    pub name: String,
    /// Optional free-form description
    pub description: Option<String>,
}

impl AmenityDraft {
    /// Validate the payload; `name` is required, `description` free.
    pub fn validated(&self) -> Result<NewAmenity, ValidationError> {
        let mut err = ValidationError::new();
        let name = require_text(&mut err, "name", self.name.as_deref(), AMENITY_NAME_MAX);
        err.finish()?;
        Ok(NewAmenity {
            name: name.unwrap_or_default(),
            description: self.description.clone(),
        })
    }
}

/// Partial amenity update payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AmenityPatch {
    /// New display name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
}

/// Validated partial amenity update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmenityChanges {
    /// New display name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
}

impl AmenityPatch {
    /// Validate only the provided fields.
    pub fn validated(&self) -> Result<AmenityChanges, ValidationError> {
        let mut err = ValidationError::new();
        let mut changes = AmenityChanges {
            description: self.description.clone(),
            ..AmenityChanges::default()
        };
        if let Some(raw) = self.name.as_deref() {
            changes.name = check_text(&mut err, "name", raw, AMENITY_NAME_MAX);
        }
        err.finish()?;
        Ok(changes)
    }
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

/// Incoming review payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewDraft {
    /// Review text
    pub payload: Option<String>,
    /// Rating, 1 through 5
    pub rating: Option<i32>,
}

/// Validated review input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    /// Review text
    pub payload: String,
    /// Rating, 1 through 5
    pub rating: i32,
}

impl ReviewDraft {
    /// Validate the payload; the rating must land in 1..=5.
    pub fn validated(&self) -> Result<NewReview, ValidationError> {
        let mut err = ValidationError::new();
        let payload = match self.payload.as_deref() {
            None => {
                err.push("payload", REQUIRED);
                None
            }
            Some(raw) if raw.trim().is_empty() => {
                err.push("payload", BLANK);
                None
            }
            Some(raw) => Some(raw.to_string()),
        };
        let rating = match self.rating {
            None => {
                err.push("rating", REQUIRED);
                None
            }
            Some(n) if n < 1 => {
                err.push("rating", "Ensure this value is greater than or equal to 1.");
                None
            }
            Some(n) if n > 5 => {
                err.push("rating", "Ensure this value is less than or equal to 5.");
                None
            }
            Some(n) => Some(n),
        };
        err.finish()?;
        Ok(NewReview {
            payload: payload.unwrap_or_default(),
            rating: rating.unwrap_or_default(),
        })
    }
}

// ---------------------------------------------------------------------------
// Wishlists
// ---------------------------------------------------------------------------

/// Incoming wishlist payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WishlistDraft {
    /// Display name
    pub name: Option<String>,
}

/// Validated wishlist input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWishlist {
    /// Display name
    pub name: String,
}

impl WishlistDraft {
    /// Validate the payload; `name` is required.
    pub fn validated(&self) -> Result<NewWishlist, ValidationError> {
        let mut err = ValidationError::new();
        let name = require_text(&mut err, "name", self.name.as_deref(), WISHLIST_NAME_MAX);
        err.finish()?;
        Ok(NewWishlist {
            name: name.unwrap_or_default(),
        })
    }
}

/// Partial wishlist update payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WishlistPatch {
    /// New display name
    pub name: Option<String>,
}

/// Validated partial wishlist update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WishlistChanges {
    /// New display name
    pub name: Option<String>,
}

impl WishlistPatch {
    /// Validate only the provided fields.
    pub fn validated(&self) -> Result<WishlistChanges, ValidationError> {
        let mut err = ValidationError::new();
        let mut changes = WishlistChanges::default();
        if let Some(raw) = self.name.as_deref() {
            changes.name = check_text(&mut err, "name", raw, WISHLIST_NAME_MAX);
        }
        err.finish()?;
        Ok(changes)
    }
}

// ---------------------------------------------------------------------------
// Media
// ---------------------------------------------------------------------------

/// Incoming photo payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhotoDraft {
    /// File URL
    pub file: Option<String>,
    /// Optional caption
    pub description: Option<String>,
}

/// Validated photo input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPhoto {
    /// File URL
    pub file: String,
    /// Optional caption
    pub description: Option<String>,
}

impl PhotoDraft {
    /// Validate the payload; `file` is required.
    pub fn validated(&self) -> Result<NewPhoto, ValidationError> {
        let mut err = ValidationError::new();
        let file = match self.file.as_deref() {
            None => {
                err.push("file", REQUIRED);
                None
            }
            Some(raw) if raw.trim().is_empty() => {
                err.push("file", BLANK);
                None
            }
            Some(raw) => Some(raw.to_string()),
        };
        err.finish()?;
        Ok(NewPhoto {
            file: file.unwrap_or_default(),
            description: self.description.clone(),
        })
    }
}

/// Incoming video payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoDraft {
    /// File URL
    pub file: Option<String>,
}

/// Validated video input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVideo {
    /// File URL
    pub file: String,
}

impl VideoDraft {
    /// Validate the payload; `file` is required.
    pub fn validated(&self) -> Result<NewVideo, ValidationError> {
        let mut err = ValidationError::new();
        let file = match self.file.as_deref() {
            None => {
                err.push("file", REQUIRED);
                None
            }
            Some(raw) if raw.trim().is_empty() => {
                err.push("file", BLANK);
                None
            }
            Some(raw) => Some(raw.to_string()),
        };
        err.finish()?;
        Ok(NewVideo {
            file: file.unwrap_or_default(),
        })
    }
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// Incoming category payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryDraft {
    /// Display name
    pub name: Option<String>,
    /// Kind choice, "rooms" or "experiences"
    pub kind: Option<String>,
}

/// Validated category input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    /// Display name
    pub name: String,
    /// Listing family
    pub kind: CategoryKind,
}

impl CategoryDraft {
    /// Validate the payload; the kind must be a known choice.
    pub fn validated(&self) -> Result<NewCategory, ValidationError> {
        let mut err = ValidationError::new();
        let name = require_text(&mut err, "name", self.name.as_deref(), AMENITY_NAME_MAX);
        let kind = match self.kind.as_deref() {
            None => {
                err.push("kind", REQUIRED);
                None
            }
            Some(raw) => match CategoryKind::parse(raw) {
                Some(kind) => Some(kind),
                None => {
                    err.push("kind", format!("\"{raw}\" is not a valid choice."));
                    None
                }
            },
        };
        err.finish()?;
        Ok(NewCategory {
            name: name.unwrap_or_default(),
            kind: kind.unwrap_or(CategoryKind::Rooms),
        })
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// Incoming sign-up payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupDraft {
    /// Requested username
    pub username: Option<String>,
    /// Contact email
    pub email: Option<String>,
    /// Plaintext password, hashed before storage
    pub password: Option<String>,
}

/// Validated sign-up input, password still plaintext.
#[derive(Debug, Clone)]
pub struct NewSignup {
    /// Requested username
    pub username: String,
    /// Contact email
    pub email: String,
    /// Plaintext password
    pub password: String,
}

impl SignupDraft {
    /// Validate the payload; passwords must reach the minimum length.
    pub fn validated(&self) -> Result<NewSignup, ValidationError> {
        let mut err = ValidationError::new();
        let username = require_text(&mut err, "username", self.username.as_deref(), USERNAME_MAX);
        let email = require_text(&mut err, "email", self.email.as_deref(), USERNAME_MAX);
        let password = match self.password.as_deref() {
            None => {
                err.push("password", REQUIRED);
                None
            }
            Some(raw) if raw.chars().count() < PASSWORD_MIN => {
                err.push(
                    "password",
                    format!("Ensure this field has at least {PASSWORD_MIN} characters."),
                );
                None
            }
            Some(raw) => Some(raw.to_string()),
        };
        err.finish()?;
        Ok(NewSignup {
            username: username.unwrap_or_default(),
            email: email.unwrap_or_default(),
            password: password.unwrap_or_default(),
        })
    }
}

/// Storable user input: sign-up data with the password already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Unique username
    pub username: String,
    /// Contact email
    pub email: String,
    /// Argon2 hash of the password
    pub password_hash: String,
}

/// Incoming log-in payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginDraft {
    /// Username
    pub username: Option<String>,
    /// Plaintext password
    pub password: Option<String>,
}

/// Validated log-in input.
#[derive(Debug, Clone)]
pub struct LoginInput {
    /// Username
    pub username: String,
    /// Plaintext password
    pub password: String,
}

impl LoginDraft {
    /// Validate the payload; both fields are required.
    pub fn validated(&self) -> Result<LoginInput, ValidationError> {
        let mut err = ValidationError::new();
        let username = require_text(&mut err, "username", self.username.as_deref(), USERNAME_MAX);
        let password = match self.password.as_deref() {
            None => {
                err.push("password", REQUIRED);
                None
            }
            Some(raw) if raw.is_empty() => {
                err.push("password", BLANK);
                None
            }
            Some(raw) => Some(raw.to_string()),
        };
        err.finish()?;
        Ok(LoginInput {
            username: username.unwrap_or_default(),
            password: password.unwrap_or_default(),
        })
    }
}
