//! Shared query helpers for the store implementations.

use crate::conversions;
use crate::models::{AmenityRow, CategoryRow, PhotoRow, RoomRow, UserRow};
use crate::schema::{amenities, categories, photos, reviews, room_amenities, rooms, users};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use staylist_error::{DatabaseError, NotFoundError, StaylistError, StaylistResult};
use staylist_interface::{RoomRecord, RoomSummary};

/// Error type threaded through the room-creation transaction.
///
/// Distinguishes plain query failures from typed aborts so a missing
/// amenity survives the rollback with its id intact.
pub(crate) enum TxError {
    Diesel(diesel::result::Error),
    Abort(StaylistError),
}

impl From<diesel::result::Error> for TxError {
    fn from(err: diesel::result::Error) -> Self {
        Self::Diesel(err)
    }
}

pub(crate) fn unwrap_tx(err: TxError) -> StaylistError {
    match err {
        TxError::Diesel(e) => DatabaseError::from(e).into(),
        TxError::Abort(e) => e,
    }
}

/// Load a room row or fail with a 404-mapped error.
pub(crate) fn load_room(conn: &mut PgConnection, id: i64) -> StaylistResult<RoomRow> {
    rooms::table
        .find(id)
        .select(RoomRow::as_select())
        .first(conn)
        .optional()
        .map_err(DatabaseError::from)?
        .ok_or_else(|| NotFoundError::new("room", id).into())
}

/// All review ratings for a room.
pub(crate) fn room_ratings(conn: &mut PgConnection, room_id: i64) -> StaylistResult<Vec<i32>> {
    reviews::table
        .filter(reviews::room_id.eq(room_id))
        .select(reviews::rating)
        .load(conn)
        .map_err(|e| DatabaseError::from(e).into())
}

/// Assemble the detail record for an already-loaded room row.
pub(crate) fn room_detail(conn: &mut PgConnection, row: RoomRow) -> StaylistResult<RoomRecord> {
    let owner: UserRow = users::table
        .find(row.owner_id)
        .select(UserRow::as_select())
        .first(conn)
        .map_err(DatabaseError::from)?;

    let category: CategoryRow = categories::table
        .find(row.category_id)
        .select(CategoryRow::as_select())
        .first(conn)
        .map_err(DatabaseError::from)?;

    let amenity_rows: Vec<AmenityRow> = room_amenities::table
        .inner_join(amenities::table)
        .filter(room_amenities::room_id.eq(row.id))
        .select(AmenityRow::as_select())
        .order(amenities::id.asc())
        .load(conn)
        .map_err(DatabaseError::from)?;

    let photo_rows: Vec<PhotoRow> = photos::table
        .filter(photos::room_id.eq(row.id))
        .select(PhotoRow::as_select())
        .order(photos::id.asc())
        .load(conn)
        .map_err(DatabaseError::from)?;

    let ratings = room_ratings(conn, row.id)?;

    conversions::room_record(row, owner, category, amenity_rows, photo_rows, &ratings)
}

/// Collapse room rows into list summaries with their ratings.
pub(crate) fn room_summaries(
    conn: &mut PgConnection,
    rows: Vec<RoomRow>,
) -> StaylistResult<Vec<RoomSummary>> {
    let mut summaries = Vec::with_capacity(rows.len());
    for row in rows {
        let ratings = room_ratings(conn, row.id)?;
        summaries.push(conversions::room_summary(&row, &ratings));
    }
    Ok(summaries)
}
