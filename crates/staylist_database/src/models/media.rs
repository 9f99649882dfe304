//! Photo and video models.

use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Database row for the photos table.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::photos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PhotoRow {
    pub id: i64,
    pub room_id: i64,
    pub file: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable struct for the photos table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::photos)]
pub struct NewPhotoRow {
    pub room_id: i64,
    pub file: String,
    pub description: Option<String>,
}

/// Database row for the videos table. One video per room.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::videos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct VideoRow {
    pub id: i64,
    pub room_id: i64,
    pub file: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable struct for the videos table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::videos)]
pub struct NewVideoRow {
    pub room_id: i64,
    pub file: String,
}
