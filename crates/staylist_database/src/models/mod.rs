//! Row and insert types for the marketplace tables.

mod amenity;
mod category;
mod media;
mod review;
mod room;
mod user;
mod wishlist;

pub use amenity::{AmenityChangesRow, AmenityRow, NewAmenityRow};
pub use category::{CategoryRow, NewCategoryRow};
pub use media::{NewPhotoRow, NewVideoRow, PhotoRow, VideoRow};
pub use review::{NewReviewRow, ReviewRow};
pub use room::{NewRoomAmenityRow, NewRoomRow, RoomChangesRow, RoomRow};
pub use user::{NewUserRow, UserRow};
pub use wishlist::{NewWishlistRoomRow, NewWishlistRow, WishlistRow};
