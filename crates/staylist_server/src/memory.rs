//! In-memory store backend.
//!
//! Mirrors the PostgreSQL semantics over mutex-guarded tables. Backs the
//! integration suite and the `--store memory` mode of the binary.

use async_trait::async_trait;
use staylist_core::RoomKind;
use staylist_error::{NotFoundError, RuleError, RuleErrorKind, StaylistResult, ValidationError};
use staylist_interface::{
    AmenityChanges, AmenityRecord, AmenityStore, CategoryRecord, CategoryStore, Credential,
    MediaStore, NewAmenity, NewCategory, NewPhoto, NewReview, NewRoom, NewUser, NewVideo,
    NewWishlist, PhotoRecord, ReviewRecord, ReviewStore, RoomChanges, RoomRecord, RoomStore,
    RoomSummary, ToggleOutcome, UserRecord, UserStore, VideoRecord, WishlistChanges,
    WishlistRecord, WishlistStore,
};
use std::collections::BTreeMap;
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
struct MemUser {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    avatar: Option<String>,
}

#[derive(Debug, Clone)]
struct MemRoom {
    id: i64,
    owner_id: i64,
    category_id: i64,
    name: String,
    country: String,
    city: String,
    price: i32,
    rooms: i32,
    toilets: i32,
    description: String,
    address: String,
    pet_friendly: bool,
    kind: RoomKind,
    amenity_ids: Vec<i64>,
}

#[derive(Debug, Clone)]
struct MemReview {
    id: i64,
    user_id: i64,
    room_id: i64,
    payload: String,
    rating: i32,
}

#[derive(Debug, Clone)]
struct MemWishlist {
    id: i64,
    user_id: i64,
    name: String,
    room_ids: Vec<i64>,
}

#[derive(Debug, Clone)]
struct MemPhoto {
    id: i64,
    room_id: i64,
    file: String,
    description: Option<String>,
}

#[derive(Debug, Clone)]
struct MemVideo {
    id: i64,
    room_id: i64,
    file: String,
}

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<i64, MemUser>,
    categories: BTreeMap<i64, CategoryRecord>,
    amenities: BTreeMap<i64, AmenityRecord>,
    rooms: BTreeMap<i64, MemRoom>,
    reviews: BTreeMap<i64, MemReview>,
    wishlists: BTreeMap<i64, MemWishlist>,
    photos: BTreeMap<i64, MemPhoto>,
    videos: BTreeMap<i64, MemVideo>,
    next_id: i64,
}

fn mean_rating(ratings: &[i32]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: i64 = ratings.iter().map(|r| i64::from(*r)).sum();
    let mean = sum as f64 / ratings.len() as f64;
    (mean * 100.0).round() / 100.0
}

fn window<T: Clone>(items: &[T], offset: i64, limit: i64) -> Vec<T> {
    let Ok(start) = usize::try_from(offset) else {
        return Vec::new();
    };
    if start >= items.len() {
        return Vec::new();
    }
    let size = usize::try_from(limit).unwrap_or(0);
    items[start..items.len().min(start.saturating_add(size))].to_vec()
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn user_record(&self, id: i64) -> StaylistResult<UserRecord> {
        let user = self
            .users
            .get(&id)
            .ok_or_else(|| NotFoundError::new("user", id))?;
        Ok(UserRecord {
            id: user.id,
            username: user.username.clone(),
            avatar: user.avatar.clone(),
        })
    }

    fn room_ratings(&self, room_id: i64) -> Vec<i32> {
        self.reviews
            .values()
            .filter(|review| review.room_id == room_id)
            .map(|review| review.rating)
            .collect()
    }

    fn room_summary(&self, room: &MemRoom) -> RoomSummary {
        RoomSummary {
            id: room.id,
            name: room.name.clone(),
            country: room.country.clone(),
            city: room.city.clone(),
            price: room.price,
            rating: mean_rating(&self.room_ratings(room.id)),
        }
    }

    fn room_record(&self, room: &MemRoom) -> StaylistResult<RoomRecord> {
        let category = self
            .categories
            .get(&room.category_id)
            .cloned()
            .ok_or_else(|| NotFoundError::new("category", room.category_id))?;
        let mut amenities: Vec<AmenityRecord> = room
            .amenity_ids
            .iter()
            .filter_map(|id| self.amenities.get(id).cloned())
            .collect();
        amenities.sort_by_key(|amenity| amenity.id);
        let photos: Vec<PhotoRecord> = self
            .photos
            .values()
            .filter(|photo| photo.room_id == room.id)
            .map(|photo| PhotoRecord {
                id: photo.id,
                file: photo.file.clone(),
                description: photo.description.clone(),
            })
            .collect();
        Ok(RoomRecord {
            id: room.id,
            name: room.name.clone(),
            country: room.country.clone(),
            city: room.city.clone(),
            price: room.price,
            rooms: room.rooms,
            toilets: room.toilets,
            description: room.description.clone(),
            address: room.address.clone(),
            pet_friendly: room.pet_friendly,
            kind: room.kind,
            rating: mean_rating(&self.room_ratings(room.id)),
            owner: self.user_record(room.owner_id)?,
            category,
            amenities,
            photos,
        })
    }

    fn review_record(&self, review: &MemReview) -> StaylistResult<ReviewRecord> {
        Ok(ReviewRecord {
            id: review.id,
            user: self.user_record(review.user_id)?,
            payload: review.payload.clone(),
            rating: review.rating,
        })
    }

    fn wishlist_record(&self, wishlist: &MemWishlist) -> WishlistRecord {
        let mut rooms: Vec<RoomSummary> = wishlist
            .room_ids
            .iter()
            .filter_map(|id| self.rooms.get(id))
            .map(|room| self.room_summary(room))
            .collect();
        rooms.sort_by_key(|room| room.id);
        WishlistRecord {
            id: wishlist.id,
            name: wishlist.name.clone(),
            rooms,
        }
    }
}

/// Mutex-guarded store with the same observable behavior as Postgres.
#[derive(Debug, Default)]
pub struct MemoryMarketStore {
    tables: Mutex<Tables>,
}

impl MemoryMarketStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryMarketStore {
    async fn create_user(&self, user: &NewUser) -> StaylistResult<UserRecord> {
        let mut tables = self.tables.lock().await;
        if tables
            .users
            .values()
            .any(|existing| existing.username == user.username)
        {
            return Err(ValidationError::single(
                "username",
                "A user with that username already exists.",
            )
            .into());
        }
        let id = tables.next_id();
        tables.users.insert(
            id,
            MemUser {
                id,
                username: user.username.clone(),
                email: user.email.clone(),
                password_hash: user.password_hash.clone(),
                avatar: None,
            },
        );
        tables.user_record(id)
    }

    async fn get_user(&self, id: i64) -> StaylistResult<UserRecord> {
        self.tables.lock().await.user_record(id)
    }

    async fn credential(&self, username: &str) -> StaylistResult<Option<Credential>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .users
            .values()
            .find(|user| user.username == username)
            .map(|user| Credential {
                user: UserRecord {
                    id: user.id,
                    username: user.username.clone(),
                    avatar: user.avatar.clone(),
                },
                password_hash: user.password_hash.clone(),
            }))
    }
}

#[async_trait]
impl CategoryStore for MemoryMarketStore {
    async fn list_categories(&self) -> StaylistResult<Vec<CategoryRecord>> {
        Ok(self.tables.lock().await.categories.values().cloned().collect())
    }

    async fn create_category(&self, category: &NewCategory) -> StaylistResult<CategoryRecord> {
        let mut tables = self.tables.lock().await;
        let id = tables.next_id();
        let record = CategoryRecord {
            id,
            name: category.name.clone(),
            kind: category.kind,
        };
        tables.categories.insert(id, record.clone());
        Ok(record)
    }

    async fn get_category(&self, id: i64) -> StaylistResult<CategoryRecord> {
        self.tables
            .lock()
            .await
            .categories
            .get(&id)
            .cloned()
            .ok_or_else(|| NotFoundError::new("category", id).into())
    }
}

#[async_trait]
impl AmenityStore for MemoryMarketStore {
    async fn list_amenities(&self) -> StaylistResult<Vec<AmenityRecord>> {
        Ok(self.tables.lock().await.amenities.values().cloned().collect())
    }

    async fn create_amenity(&self, amenity: &NewAmenity) -> StaylistResult<AmenityRecord> {
        let mut tables = self.tables.lock().await;
        let id = tables.next_id();
        let record = AmenityRecord {
            id,
            name: amenity.name.clone(),
            description: amenity.description.clone(),
        };
        tables.amenities.insert(id, record.clone());
        Ok(record)
    }

    async fn get_amenity(&self, id: i64) -> StaylistResult<AmenityRecord> {
        self.tables
            .lock()
            .await
            .amenities
            .get(&id)
            .cloned()
            .ok_or_else(|| NotFoundError::new("amenity", id).into())
    }

    async fn update_amenity(
        &self,
        id: i64,
        changes: &AmenityChanges,
    ) -> StaylistResult<AmenityRecord> {
        let mut tables = self.tables.lock().await;
        let amenity = tables
            .amenities
            .get_mut(&id)
            .ok_or_else(|| NotFoundError::new("amenity", id))?;
        if let Some(name) = &changes.name {
            amenity.name = name.clone();
        }
        if let Some(description) = &changes.description {
            amenity.description = Some(description.clone());
        }
        Ok(amenity.clone())
    }

    async fn delete_amenity(&self, id: i64) -> StaylistResult<()> {
        let mut tables = self.tables.lock().await;
        if tables.amenities.remove(&id).is_none() {
            return Err(NotFoundError::new("amenity", id).into());
        }
        // Cascade: detach from every room.
        for room in tables.rooms.values_mut() {
            room.amenity_ids.retain(|amenity_id| *amenity_id != id);
        }
        Ok(())
    }
}

#[async_trait]
impl RoomStore for MemoryMarketStore {
    async fn list_rooms(&self) -> StaylistResult<Vec<RoomSummary>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .rooms
            .values()
            .map(|room| tables.room_summary(room))
            .collect())
    }

    async fn create_room(
        &self,
        owner_id: i64,
        category_id: i64,
        room: &NewRoom,
    ) -> StaylistResult<RoomRecord> {
        let mut tables = self.tables.lock().await;
        // Nothing is written until every amenity id resolves; this is the
        // in-memory equivalent of the transactional rollback.
        for &amenity_id in &room.amenities {
            if !tables.amenities.contains_key(&amenity_id) {
                return Err(RuleError::new(RuleErrorKind::AmenityNotFound(amenity_id)).into());
            }
        }
        let id = tables.next_id();
        tables.rooms.insert(
            id,
            MemRoom {
                id,
                owner_id,
                category_id,
                name: room.name.clone(),
                country: room.country.clone(),
                city: room.city.clone(),
                price: room.price,
                rooms: room.rooms,
                toilets: room.toilets,
                description: room.description.clone(),
                address: room.address.clone(),
                pet_friendly: room.pet_friendly,
                kind: room.kind,
                amenity_ids: room.amenities.clone(),
            },
        );
        let room = tables.rooms[&id].clone();
        tables.room_record(&room)
    }

    async fn get_room(&self, id: i64) -> StaylistResult<RoomRecord> {
        let tables = self.tables.lock().await;
        let room = tables
            .rooms
            .get(&id)
            .ok_or_else(|| NotFoundError::new("room", id))?;
        tables.room_record(room)
    }

    async fn room_owner(&self, id: i64) -> StaylistResult<i64> {
        let tables = self.tables.lock().await;
        tables
            .rooms
            .get(&id)
            .map(|room| room.owner_id)
            .ok_or_else(|| NotFoundError::new("room", id).into())
    }

    async fn update_room(&self, id: i64, changes: &RoomChanges) -> StaylistResult<RoomRecord> {
        let mut tables = self.tables.lock().await;
        let room = tables
            .rooms
            .get_mut(&id)
            .ok_or_else(|| NotFoundError::new("room", id))?;
        if let Some(name) = &changes.name {
            room.name = name.clone();
        }
        if let Some(country) = &changes.country {
            room.country = country.clone();
        }
        if let Some(city) = &changes.city {
            room.city = city.clone();
        }
        if let Some(price) = changes.price {
            room.price = price;
        }
        if let Some(rooms) = changes.rooms {
            room.rooms = rooms;
        }
        if let Some(toilets) = changes.toilets {
            room.toilets = toilets;
        }
        if let Some(description) = &changes.description {
            room.description = description.clone();
        }
        if let Some(address) = &changes.address {
            room.address = address.clone();
        }
        if let Some(pet_friendly) = changes.pet_friendly {
            room.pet_friendly = pet_friendly;
        }
        if let Some(kind) = changes.kind {
            room.kind = kind;
        }
        let room = room.clone();
        tables.room_record(&room)
    }

    async fn delete_room(&self, id: i64) -> StaylistResult<()> {
        let mut tables = self.tables.lock().await;
        if tables.rooms.remove(&id).is_none() {
            return Err(NotFoundError::new("room", id).into());
        }
        // Cascade: reviews, media, and wishlist memberships go with it.
        tables.reviews.retain(|_, review| review.room_id != id);
        tables.photos.retain(|_, photo| photo.room_id != id);
        tables.videos.retain(|_, video| video.room_id != id);
        for wishlist in tables.wishlists.values_mut() {
            wishlist.room_ids.retain(|room_id| *room_id != id);
        }
        Ok(())
    }

    async fn room_amenities(
        &self,
        room_id: i64,
        offset: i64,
        limit: i64,
    ) -> StaylistResult<Vec<AmenityRecord>> {
        let tables = self.tables.lock().await;
        let room = tables
            .rooms
            .get(&room_id)
            .ok_or_else(|| NotFoundError::new("room", room_id))?;
        let mut amenities: Vec<AmenityRecord> = room
            .amenity_ids
            .iter()
            .filter_map(|id| tables.amenities.get(id).cloned())
            .collect();
        amenities.sort_by_key(|amenity| amenity.id);
        Ok(window(&amenities, offset, limit))
    }
}

#[async_trait]
impl ReviewStore for MemoryMarketStore {
    async fn reviews_for_room(
        &self,
        room_id: i64,
        offset: i64,
        limit: i64,
    ) -> StaylistResult<Vec<ReviewRecord>> {
        let tables = self.tables.lock().await;
        if !tables.rooms.contains_key(&room_id) {
            return Err(NotFoundError::new("room", room_id).into());
        }
        let reviews: Vec<ReviewRecord> = tables
            .reviews
            .values()
            .filter(|review| review.room_id == room_id)
            .map(|review| tables.review_record(review))
            .collect::<StaylistResult<_>>()?;
        Ok(window(&reviews, offset, limit))
    }

    async fn create_review(
        &self,
        user_id: i64,
        room_id: i64,
        review: &NewReview,
    ) -> StaylistResult<ReviewRecord> {
        let mut tables = self.tables.lock().await;
        if !tables.rooms.contains_key(&room_id) {
            return Err(NotFoundError::new("room", room_id).into());
        }
        let id = tables.next_id();
        tables.reviews.insert(
            id,
            MemReview {
                id,
                user_id,
                room_id,
                payload: review.payload.clone(),
                rating: review.rating,
            },
        );
        let review = tables.reviews[&id].clone();
        tables.review_record(&review)
    }
}

#[async_trait]
impl WishlistStore for MemoryMarketStore {
    async fn wishlists_for_user(&self, user_id: i64) -> StaylistResult<Vec<WishlistRecord>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .wishlists
            .values()
            .filter(|wishlist| wishlist.user_id == user_id)
            .map(|wishlist| tables.wishlist_record(wishlist))
            .collect())
    }

    async fn create_wishlist(
        &self,
        user_id: i64,
        wishlist: &NewWishlist,
    ) -> StaylistResult<WishlistRecord> {
        let mut tables = self.tables.lock().await;
        let id = tables.next_id();
        tables.wishlists.insert(
            id,
            MemWishlist {
                id,
                user_id,
                name: wishlist.name.clone(),
                room_ids: Vec::new(),
            },
        );
        Ok(tables.wishlist_record(&tables.wishlists[&id]))
    }

    async fn get_wishlist(&self, id: i64, user_id: i64) -> StaylistResult<WishlistRecord> {
        let tables = self.tables.lock().await;
        let wishlist = tables
            .wishlists
            .get(&id)
            .filter(|wishlist| wishlist.user_id == user_id)
            .ok_or_else(|| NotFoundError::new("wishlist", id))?;
        Ok(tables.wishlist_record(wishlist))
    }

    async fn update_wishlist(
        &self,
        id: i64,
        user_id: i64,
        changes: &WishlistChanges,
    ) -> StaylistResult<WishlistRecord> {
        let mut tables = self.tables.lock().await;
        let wishlist = tables
            .wishlists
            .get_mut(&id)
            .filter(|wishlist| wishlist.user_id == user_id)
            .ok_or_else(|| NotFoundError::new("wishlist", id))?;
        if let Some(name) = &changes.name {
            wishlist.name = name.clone();
        }
        let wishlist = wishlist.clone();
        Ok(tables.wishlist_record(&wishlist))
    }

    async fn delete_wishlist(&self, id: i64, user_id: i64) -> StaylistResult<()> {
        let mut tables = self.tables.lock().await;
        let owned = tables
            .wishlists
            .get(&id)
            .is_some_and(|wishlist| wishlist.user_id == user_id);
        if !owned {
            return Err(NotFoundError::new("wishlist", id).into());
        }
        tables.wishlists.remove(&id);
        Ok(())
    }

    async fn toggle_room(
        &self,
        id: i64,
        user_id: i64,
        room_id: i64,
    ) -> StaylistResult<ToggleOutcome> {
        let mut tables = self.tables.lock().await;
        if !tables.rooms.contains_key(&room_id) {
            return Err(NotFoundError::new("room", room_id).into());
        }
        let wishlist = tables
            .wishlists
            .get_mut(&id)
            .filter(|wishlist| wishlist.user_id == user_id)
            .ok_or_else(|| NotFoundError::new("wishlist", id))?;
        if wishlist.room_ids.contains(&room_id) {
            wishlist.room_ids.retain(|member| *member != room_id);
            Ok(ToggleOutcome::Removed)
        } else {
            wishlist.room_ids.push(room_id);
            Ok(ToggleOutcome::Added)
        }
    }
}

#[async_trait]
impl MediaStore for MemoryMarketStore {
    async fn add_photo(&self, room_id: i64, photo: &NewPhoto) -> StaylistResult<PhotoRecord> {
        let mut tables = self.tables.lock().await;
        if !tables.rooms.contains_key(&room_id) {
            return Err(NotFoundError::new("room", room_id).into());
        }
        let id = tables.next_id();
        tables.photos.insert(
            id,
            MemPhoto {
                id,
                room_id,
                file: photo.file.clone(),
                description: photo.description.clone(),
            },
        );
        Ok(PhotoRecord {
            id,
            file: photo.file.clone(),
            description: photo.description.clone(),
        })
    }

    async fn photo_room_owner(&self, id: i64) -> StaylistResult<i64> {
        let tables = self.tables.lock().await;
        let photo = tables
            .photos
            .get(&id)
            .ok_or_else(|| NotFoundError::new("photo", id))?;
        tables
            .rooms
            .get(&photo.room_id)
            .map(|room| room.owner_id)
            .ok_or_else(|| NotFoundError::new("room", photo.room_id).into())
    }

    async fn delete_photo(&self, id: i64) -> StaylistResult<()> {
        let mut tables = self.tables.lock().await;
        if tables.photos.remove(&id).is_none() {
            return Err(NotFoundError::new("photo", id).into());
        }
        Ok(())
    }

    async fn set_video(&self, room_id: i64, video: &NewVideo) -> StaylistResult<VideoRecord> {
        let mut tables = self.tables.lock().await;
        if !tables.rooms.contains_key(&room_id) {
            return Err(NotFoundError::new("room", room_id).into());
        }
        if tables.videos.values().any(|video| video.room_id == room_id) {
            return Err(ValidationError::single("room", "This room already has a video.").into());
        }
        let id = tables.next_id();
        tables.videos.insert(
            id,
            MemVideo {
                id,
                room_id,
                file: video.file.clone(),
            },
        );
        Ok(VideoRecord {
            id,
            file: video.file.clone(),
        })
    }

    async fn video_room_owner(&self, id: i64) -> StaylistResult<i64> {
        let tables = self.tables.lock().await;
        let video = tables
            .videos
            .get(&id)
            .ok_or_else(|| NotFoundError::new("video", id))?;
        tables
            .rooms
            .get(&video.room_id)
            .map(|room| room.owner_id)
            .ok_or_else(|| NotFoundError::new("room", video.room_id).into())
    }

    async fn delete_video(&self, id: i64) -> StaylistResult<()> {
        let mut tables = self.tables.lock().await;
        if tables.videos.remove(&id).is_none() {
            return Err(NotFoundError::new("video", id).into());
        }
        Ok(())
    }
}
