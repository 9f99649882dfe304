//! Review models.

use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Database row for the reviews table.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Associations)]
#[diesel(table_name = crate::schema::reviews)]
#[diesel(belongs_to(crate::models::RoomRow, foreign_key = room_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ReviewRow {
    pub id: i64,
    pub user_id: i64,
    pub room_id: i64,
    pub payload: String,
    pub rating: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable struct for the reviews table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::reviews)]
pub struct NewReviewRow {
    pub user_id: i64,
    pub room_id: i64,
    pub payload: String,
    pub rating: i32,
}
