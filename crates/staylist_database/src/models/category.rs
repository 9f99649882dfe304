//! Category models.

use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Database row for the categories table.
///
/// The kind column stores the wire form of `CategoryKind`.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CategoryRow {
    pub id: i64,
    pub name: String,
    pub kind: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable struct for the categories table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategoryRow {
    pub name: String,
    pub kind: String,
}
