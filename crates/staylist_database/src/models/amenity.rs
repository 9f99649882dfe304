//! Amenity models.

use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Database row for the amenities table.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::amenities)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AmenityRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable struct for the amenities table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::amenities)]
pub struct NewAmenityRow {
    pub name: String,
    pub description: Option<String>,
}

/// Partial-update changeset for the amenities table.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = crate::schema::amenities)]
pub struct AmenityChangesRow {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl AmenityChangesRow {
    /// Whether the changeset would touch any column.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}
