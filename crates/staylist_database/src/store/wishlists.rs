//! Owner-scoped wishlists and the membership toggle.

use super::PostgresMarketStore;
use super::support;
use crate::conversions::wishlist_record;
use crate::models::{NewWishlistRoomRow, NewWishlistRow, RoomRow, WishlistRow};
use crate::schema::{rooms, wishlist_rooms, wishlists};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use staylist_error::{DatabaseError, NotFoundError, StaylistResult};
use staylist_interface::{
    NewWishlist, RoomSummary, ToggleOutcome, WishlistChanges, WishlistRecord, WishlistStore,
};
use tracing::{info, instrument};

/// Resolve a wishlist scoped to its owner.
///
/// Someone else's wishlist resolves exactly like a missing one.
fn load_wishlist(conn: &mut PgConnection, id: i64, user_id: i64) -> StaylistResult<WishlistRow> {
    wishlists::table
        .find(id)
        .filter(wishlists::user_id.eq(user_id))
        .select(WishlistRow::as_select())
        .first(conn)
        .optional()
        .map_err(DatabaseError::from)?
        .ok_or_else(|| NotFoundError::new("wishlist", id).into())
}

/// Member rooms of a wishlist as list summaries.
fn member_rooms(conn: &mut PgConnection, wishlist_id: i64) -> StaylistResult<Vec<RoomSummary>> {
    let rows: Vec<RoomRow> = wishlist_rooms::table
        .inner_join(rooms::table)
        .filter(wishlist_rooms::wishlist_id.eq(wishlist_id))
        .select(RoomRow::as_select())
        .order(rooms::id.asc())
        .load(conn)
        .map_err(DatabaseError::from)?;
    support::room_summaries(conn, rows)
}

#[async_trait]
impl WishlistStore for PostgresMarketStore {
    async fn wishlists_for_user(&self, user_id: i64) -> StaylistResult<Vec<WishlistRecord>> {
        self.blocking(move |conn| {
            let rows: Vec<WishlistRow> = wishlists::table
                .filter(wishlists::user_id.eq(user_id))
                .select(WishlistRow::as_select())
                .order(wishlists::id.asc())
                .load(conn)
                .map_err(DatabaseError::from)?;
            let mut records = Vec::with_capacity(rows.len());
            for row in rows {
                let rooms = member_rooms(conn, row.id)?;
                records.push(wishlist_record(row, rooms));
            }
            Ok(records)
        })
        .await
    }

    async fn create_wishlist(
        &self,
        user_id: i64,
        wishlist: &NewWishlist,
    ) -> StaylistResult<WishlistRecord> {
        let new_row = NewWishlistRow {
            user_id,
            name: wishlist.name.clone(),
        };
        self.blocking(move |conn| {
            let row: WishlistRow = diesel::insert_into(wishlists::table)
                .values(&new_row)
                .get_result(conn)
                .map_err(DatabaseError::from)?;
            Ok(wishlist_record(row, Vec::new()))
        })
        .await
    }

    async fn get_wishlist(&self, id: i64, user_id: i64) -> StaylistResult<WishlistRecord> {
        self.blocking(move |conn| {
            let row = load_wishlist(conn, id, user_id)?;
            let rooms = member_rooms(conn, row.id)?;
            Ok(wishlist_record(row, rooms))
        })
        .await
    }

    async fn update_wishlist(
        &self,
        id: i64,
        user_id: i64,
        changes: &WishlistChanges,
    ) -> StaylistResult<WishlistRecord> {
        let name = changes.name.clone();
        self.blocking(move |conn| {
            let row = match name {
                None => load_wishlist(conn, id, user_id)?,
                Some(name) => diesel::update(
                    wishlists::table
                        .find(id)
                        .filter(wishlists::user_id.eq(user_id)),
                )
                .set((
                    wishlists::name.eq(name),
                    wishlists::updated_at.eq(diesel::dsl::now),
                ))
                .get_result::<WishlistRow>(conn)
                .optional()
                .map_err(DatabaseError::from)?
                .ok_or_else(|| NotFoundError::new("wishlist", id))?,
            };
            let rooms = member_rooms(conn, row.id)?;
            Ok(wishlist_record(row, rooms))
        })
        .await
    }

    async fn delete_wishlist(&self, id: i64, user_id: i64) -> StaylistResult<()> {
        self.blocking(move |conn| {
            let deleted = diesel::delete(
                wishlists::table
                    .find(id)
                    .filter(wishlists::user_id.eq(user_id)),
            )
            .execute(conn)
            .map_err(DatabaseError::from)?;
            if deleted == 0 {
                return Err(NotFoundError::new("wishlist", id).into());
            }
            Ok(())
        })
        .await
    }

    #[instrument(skip(self))]
    async fn toggle_room(
        &self,
        id: i64,
        user_id: i64,
        room_id: i64,
    ) -> StaylistResult<ToggleOutcome> {
        self.blocking(move |conn| {
            let wishlist = load_wishlist(conn, id, user_id)?;
            support::load_room(conn, room_id)?;

            let membership: Option<i64> = wishlist_rooms::table
                .filter(wishlist_rooms::wishlist_id.eq(wishlist.id))
                .filter(wishlist_rooms::room_id.eq(room_id))
                .select(wishlist_rooms::id)
                .first(conn)
                .optional()
                .map_err(DatabaseError::from)?;

            let outcome = match membership {
                Some(join_id) => {
                    diesel::delete(wishlist_rooms::table.find(join_id))
                        .execute(conn)
                        .map_err(DatabaseError::from)?;
                    ToggleOutcome::Removed
                }
                None => {
                    diesel::insert_into(wishlist_rooms::table)
                        .values(&NewWishlistRoomRow {
                            wishlist_id: wishlist.id,
                            room_id,
                        })
                        .execute(conn)
                        .map_err(DatabaseError::from)?;
                    ToggleOutcome::Added
                }
            };

            info!(outcome = outcome.as_str(), "Toggled wishlist room");
            Ok(outcome)
        })
        .await
    }
}
