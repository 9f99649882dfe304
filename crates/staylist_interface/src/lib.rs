//! Wire types and store traits for the Staylist marketplace backend.
//!
//! This crate is the seam between the HTTP surface and the data stores:
//!
//! - [`drafts`](crate::RoomDraft) deserialize straight from request JSON and
//!   validate into typed inputs, collecting failures into a field-keyed
//!   error map the way the API reports them;
//! - records are the serialized response shapes;
//! - the `*Store` traits define every operation a backend must provide,
//!   with [`MarketStore`] as the combined contract.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod drafts;
mod records;
mod traits;

pub use drafts::{
    AmenityChanges, AmenityDraft, AmenityPatch, CategoryDraft, LoginDraft, LoginInput, NewAmenity,
    NewCategory, NewPhoto, NewReview, NewRoom, NewSignup, NewUser, NewVideo, NewWishlist,
    PhotoDraft, ReviewDraft, RoomChanges, RoomDraft, RoomPatch, SignupDraft, VideoDraft,
    WishlistChanges, WishlistDraft, WishlistPatch,
};
pub use records::{
    AmenityRecord, CategoryRecord, Credential, PhotoRecord, ReviewRecord, RoomRecord, RoomSummary,
    ToggleOutcome, UserRecord, VideoRecord, WishlistRecord,
};
pub use traits::{
    AmenityStore, CategoryStore, MarketStore, MediaStore, ReviewStore, RoomStore, UserStore,
    WishlistStore,
};
