//! Row to record conversions.

use crate::models::{
    AmenityRow, CategoryRow, PhotoRow, ReviewRow, RoomRow, UserRow, VideoRow, WishlistRow,
};
use staylist_core::{CategoryKind, RoomKind};
use staylist_error::{DatabaseError, DatabaseErrorKind, StaylistResult};
use staylist_interface::{
    AmenityRecord, CategoryRecord, Credential, PhotoRecord, ReviewRecord, RoomRecord, RoomSummary,
    UserRecord, VideoRecord, WishlistRecord,
};

/// Mean rating rounded to two decimals, `0.0` for an unreviewed room.
pub fn mean_rating(ratings: &[i32]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: i64 = ratings.iter().map(|r| i64::from(*r)).sum();
    let mean = sum as f64 / ratings.len() as f64;
    (mean * 100.0).round() / 100.0
}

pub fn user_record(row: UserRow) -> UserRecord {
    UserRecord {
        id: row.id,
        username: row.username,
        avatar: row.avatar,
    }
}

pub fn credential(row: UserRow) -> Credential {
    Credential {
        password_hash: row.password_hash.clone(),
        user: user_record(row),
    }
}

pub fn category_record(row: CategoryRow) -> StaylistResult<CategoryRecord> {
    let kind = CategoryKind::parse(&row.kind).ok_or_else(|| {
        DatabaseError::new(DatabaseErrorKind::Serialization(format!(
            "unknown category kind '{}' on category {}",
            row.kind, row.id
        )))
    })?;
    Ok(CategoryRecord {
        id: row.id,
        name: row.name,
        kind,
    })
}

pub fn amenity_record(row: AmenityRow) -> AmenityRecord {
    AmenityRecord {
        id: row.id,
        name: row.name,
        description: row.description,
    }
}

pub fn photo_record(row: PhotoRow) -> PhotoRecord {
    PhotoRecord {
        id: row.id,
        file: row.file,
        description: row.description,
    }
}

pub fn video_record(row: VideoRow) -> VideoRecord {
    VideoRecord {
        id: row.id,
        file: row.file,
    }
}

pub fn review_record(row: ReviewRow, user: UserRow) -> ReviewRecord {
    ReviewRecord {
        id: row.id,
        user: user_record(user),
        payload: row.payload,
        rating: row.rating,
    }
}

pub fn room_summary(row: &RoomRow, ratings: &[i32]) -> RoomSummary {
    RoomSummary {
        id: row.id,
        name: row.name.clone(),
        country: row.country.clone(),
        city: row.city.clone(),
        price: row.price,
        rating: mean_rating(ratings),
    }
}

pub fn room_record(
    row: RoomRow,
    owner: UserRow,
    category: CategoryRow,
    amenities: Vec<AmenityRow>,
    photos: Vec<PhotoRow>,
    ratings: &[i32],
) -> StaylistResult<RoomRecord> {
    let kind = RoomKind::parse(&row.kind).ok_or_else(|| {
        DatabaseError::new(DatabaseErrorKind::Serialization(format!(
            "unknown room kind '{}' on room {}",
            row.kind, row.id
        )))
    })?;
    Ok(RoomRecord {
        id: row.id,
        name: row.name,
        country: row.country,
        city: row.city,
        price: row.price,
        rooms: row.rooms,
        toilets: row.toilets,
        description: row.description,
        address: row.address,
        pet_friendly: row.pet_friendly,
        kind,
        rating: mean_rating(ratings),
        owner: user_record(owner),
        category: category_record(category)?,
        amenities: amenities.into_iter().map(amenity_record).collect(),
        photos: photos.into_iter().map(photo_record).collect(),
    })
}

pub fn wishlist_record(row: WishlistRow, rooms: Vec<RoomSummary>) -> WishlistRecord {
    WishlistRecord {
        id: row.id,
        name: row.name,
        rooms,
    }
}

#[cfg(test)]
mod tests {
    use super::mean_rating;

    #[test]
    fn mean_rating_rounds_to_two_decimals() {
        assert_eq!(mean_rating(&[]), 0.0);
        assert_eq!(mean_rating(&[4]), 4.0);
        assert_eq!(mean_rating(&[5, 4]), 4.5);
        assert_eq!(mean_rating(&[5, 4, 4]), 4.33);
    }
}
