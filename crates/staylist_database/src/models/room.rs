//! Room models.

use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Database row for the rooms table.
///
/// The kind column stores the wire form of `RoomKind`.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::rooms)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RoomRow {
    pub id: i64,
    pub owner_id: i64,
    pub category_id: i64,
    pub name: String,
    pub country: String,
    pub city: String,
    pub price: i32,
    #[diesel(column_name = room_count)]
    pub rooms: i32,
    pub toilets: i32,
    pub description: String,
    pub address: String,
    pub pet_friendly: bool,
    pub kind: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable struct for the rooms table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::rooms)]
pub struct NewRoomRow {
    pub owner_id: i64,
    pub category_id: i64,
    pub name: String,
    pub country: String,
    pub city: String,
    pub price: i32,
    #[diesel(column_name = room_count)]
    pub rooms: i32,
    pub toilets: i32,
    pub description: String,
    pub address: String,
    pub pet_friendly: bool,
    pub kind: String,
}

/// Insertable struct for the room/amenity join table.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = crate::schema::room_amenities)]
pub struct NewRoomAmenityRow {
    pub room_id: i64,
    pub amenity_id: i64,
}

/// Partial-update changeset for the rooms table.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = crate::schema::rooms)]
pub struct RoomChangesRow {
    pub name: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub price: Option<i32>,
    #[diesel(column_name = room_count)]
    pub rooms: Option<i32>,
    pub toilets: Option<i32>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub pet_friendly: Option<bool>,
    pub kind: Option<String>,
}

impl RoomChangesRow {
    /// Whether the changeset would touch any column.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.country.is_none()
            && self.city.is_none()
            && self.price.is_none()
            && self.rooms.is_none()
            && self.toilets.is_none()
            && self.description.is_none()
            && self.address.is_none()
            && self.pet_friendly.is_none()
            && self.kind.is_none()
    }
}
