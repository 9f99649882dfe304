//! Store traits every backend must implement.
//!
//! One trait per resource family, combined by [`MarketStore`]. Stores
//! signal missing rows with `NotFoundError` and domain-rule failures with
//! `RuleError`; the HTTP layer maps those onto status codes.

use crate::{
    AmenityChanges, AmenityRecord, CategoryRecord, Credential, NewAmenity, NewCategory, NewPhoto,
    NewReview, NewRoom, NewUser, NewVideo, NewWishlist, PhotoRecord, ReviewRecord, RoomChanges,
    RoomRecord, RoomSummary, ToggleOutcome, UserRecord, VideoRecord, WishlistChanges,
    WishlistRecord,
};
use async_trait::async_trait;
use staylist_error::StaylistResult;

/// User accounts and login material.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user. The username must be free.
    async fn create_user(&self, user: &NewUser) -> StaylistResult<UserRecord>;

    /// Fetch a user's public profile by id.
    async fn get_user(&self, id: i64) -> StaylistResult<UserRecord>;

    /// Fetch a user's login material by username, `None` when unknown.
    async fn credential(&self, username: &str) -> StaylistResult<Option<Credential>>;
}

/// Read-mostly category reference data.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// All categories.
    async fn list_categories(&self) -> StaylistResult<Vec<CategoryRecord>>;

    /// Persist a new category.
    async fn create_category(&self, category: &NewCategory) -> StaylistResult<CategoryRecord>;

    /// Fetch a category by id.
    async fn get_category(&self, id: i64) -> StaylistResult<CategoryRecord>;
}

/// Amenity CRUD.
#[async_trait]
pub trait AmenityStore: Send + Sync {
    /// All amenities.
    async fn list_amenities(&self) -> StaylistResult<Vec<AmenityRecord>>;

    /// Persist a new amenity.
    async fn create_amenity(&self, amenity: &NewAmenity) -> StaylistResult<AmenityRecord>;

    /// Fetch an amenity by id.
    async fn get_amenity(&self, id: i64) -> StaylistResult<AmenityRecord>;

    /// Apply a partial update to an amenity.
    async fn update_amenity(
        &self,
        id: i64,
        changes: &AmenityChanges,
    ) -> StaylistResult<AmenityRecord>;

    /// Delete an amenity.
    async fn delete_amenity(&self, id: i64) -> StaylistResult<()>;
}

/// Room CRUD plus the transactional creation flow.
#[async_trait]
pub trait RoomStore: Send + Sync {
    /// All rooms as list summaries.
    async fn list_rooms(&self) -> StaylistResult<Vec<RoomSummary>>;

    /// Persist a room and attach its amenities in one unit of work.
    ///
    /// The category id must already be resolved and of the rooms kind.
    /// When any amenity id fails to resolve, the whole unit of work rolls
    /// back (no room row survives) and the error names the offending id.
    async fn create_room(
        &self,
        owner_id: i64,
        category_id: i64,
        room: &NewRoom,
    ) -> StaylistResult<RoomRecord>;

    /// Fetch a room's detail shape by id.
    async fn get_room(&self, id: i64) -> StaylistResult<RoomRecord>;

    /// Fetch only a room's owner id, for authorization checks.
    async fn room_owner(&self, id: i64) -> StaylistResult<i64>;

    /// Apply a partial update to a room's base fields.
    async fn update_room(&self, id: i64, changes: &RoomChanges) -> StaylistResult<RoomRecord>;

    /// Delete a room and everything hanging off it.
    async fn delete_room(&self, id: i64) -> StaylistResult<()>;

    /// One page of a room's amenities.
    async fn room_amenities(
        &self,
        room_id: i64,
        offset: i64,
        limit: i64,
    ) -> StaylistResult<Vec<AmenityRecord>>;
}

/// Append-only reviews.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// One page of a room's reviews.
    async fn reviews_for_room(
        &self,
        room_id: i64,
        offset: i64,
        limit: i64,
    ) -> StaylistResult<Vec<ReviewRecord>>;

    /// Persist a review authored by the given user.
    async fn create_review(
        &self,
        user_id: i64,
        room_id: i64,
        review: &NewReview,
    ) -> StaylistResult<ReviewRecord>;
}

/// Owner-scoped wishlists.
///
/// Every lookup takes the acting user's id; a wishlist owned by someone
/// else resolves exactly like a missing one.
#[async_trait]
pub trait WishlistStore: Send + Sync {
    /// The acting user's wishlists.
    async fn wishlists_for_user(&self, user_id: i64) -> StaylistResult<Vec<WishlistRecord>>;

    /// Persist a wishlist owned by the acting user.
    async fn create_wishlist(
        &self,
        user_id: i64,
        wishlist: &NewWishlist,
    ) -> StaylistResult<WishlistRecord>;

    /// Fetch one of the acting user's wishlists.
    async fn get_wishlist(&self, id: i64, user_id: i64) -> StaylistResult<WishlistRecord>;

    /// Apply a partial update to one of the acting user's wishlists.
    async fn update_wishlist(
        &self,
        id: i64,
        user_id: i64,
        changes: &WishlistChanges,
    ) -> StaylistResult<WishlistRecord>;

    /// Delete one of the acting user's wishlists.
    async fn delete_wishlist(&self, id: i64, user_id: i64) -> StaylistResult<()>;

    /// Add the room to the wishlist when absent, remove it when present.
    async fn toggle_room(
        &self,
        id: i64,
        user_id: i64,
        room_id: i64,
    ) -> StaylistResult<ToggleOutcome>;
}

/// Photos and videos hanging off rooms.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Attach a photo to a room.
    async fn add_photo(&self, room_id: i64, photo: &NewPhoto) -> StaylistResult<PhotoRecord>;

    /// Owner id of the room a photo belongs to, for authorization checks.
    async fn photo_room_owner(&self, id: i64) -> StaylistResult<i64>;

    /// Delete a photo.
    async fn delete_photo(&self, id: i64) -> StaylistResult<()>;

    /// Attach the room's single video. Fails when one is already set.
    async fn set_video(&self, room_id: i64, video: &NewVideo) -> StaylistResult<VideoRecord>;

    /// Owner id of the room a video belongs to, for authorization checks.
    async fn video_room_owner(&self, id: i64) -> StaylistResult<i64>;

    /// Delete a video.
    async fn delete_video(&self, id: i64) -> StaylistResult<()>;
}

/// The combined store contract the HTTP layer works against.
pub trait MarketStore:
    UserStore + CategoryStore + AmenityStore + RoomStore + ReviewStore + WishlistStore + MediaStore
{
}

impl<T> MarketStore for T where
    T: UserStore
        + CategoryStore
        + AmenityStore
        + RoomStore
        + ReviewStore
        + WishlistStore
        + MediaStore
{
}
