//! Wishlist models.

use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Database row for the wishlists table.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::wishlists)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct WishlistRow {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable struct for the wishlists table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::wishlists)]
pub struct NewWishlistRow {
    pub user_id: i64,
    pub name: String,
}

/// Insertable struct for the wishlist/room join table.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = crate::schema::wishlist_rooms)]
pub struct NewWishlistRoomRow {
    pub wishlist_id: i64,
    pub room_id: i64,
}
