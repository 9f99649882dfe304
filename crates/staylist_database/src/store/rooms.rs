//! Room operations, including the transactional creation flow.

use super::PostgresMarketStore;
use super::support::{self, TxError, unwrap_tx};
use crate::models::{AmenityRow, NewRoomAmenityRow, NewRoomRow, RoomChangesRow, RoomRow};
use crate::schema::{amenities, room_amenities, rooms};
use async_trait::async_trait;
use diesel::prelude::*;
use staylist_error::{
    DatabaseError, NotFoundError, RuleError, RuleErrorKind, StaylistResult,
};
use staylist_interface::{AmenityRecord, NewRoom, RoomChanges, RoomRecord, RoomStore, RoomSummary};
use tracing::{info, instrument};

#[async_trait]
impl RoomStore for PostgresMarketStore {
    async fn list_rooms(&self) -> StaylistResult<Vec<RoomSummary>> {
        self.blocking(|conn| {
            let rows: Vec<RoomRow> = rooms::table
                .select(RoomRow::as_select())
                .order(rooms::id.asc())
                .load(conn)
                .map_err(DatabaseError::from)?;
            support::room_summaries(conn, rows)
        })
        .await
    }

    #[instrument(skip(self, room))]
    async fn create_room(
        &self,
        owner_id: i64,
        category_id: i64,
        room: &NewRoom,
    ) -> StaylistResult<RoomRecord> {
        let room = room.clone();
        self.blocking(move |conn| {
            // The room row and its amenity set commit or roll back together.
            let row = conn
                .transaction::<RoomRow, TxError, _>(|conn| {
                    let new_row = NewRoomRow {
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
                        kind: room.kind.as_str().to_string(),
                    };
                    let row: RoomRow = diesel::insert_into(rooms::table)
                        .values(&new_row)
                        .get_result(conn)?;

                    for &amenity_id in &room.amenities {
                        let found: Option<AmenityRow> = amenities::table
                            .find(amenity_id)
                            .select(AmenityRow::as_select())
                            .first(conn)
                            .optional()?;
                        if found.is_none() {
                            return Err(TxError::Abort(
                                RuleError::new(RuleErrorKind::AmenityNotFound(amenity_id)).into(),
                            ));
                        }
                        diesel::insert_into(room_amenities::table)
                            .values(&NewRoomAmenityRow {
                                room_id: row.id,
                                amenity_id,
                            })
                            .execute(conn)?;
                    }

                    Ok(row)
                })
                .map_err(unwrap_tx)?;

            info!(room_id = row.id, "Created room");
            support::room_detail(conn, row)
        })
        .await
    }

    async fn get_room(&self, id: i64) -> StaylistResult<RoomRecord> {
        self.blocking(move |conn| {
            let row = support::load_room(conn, id)?;
            support::room_detail(conn, row)
        })
        .await
    }

    async fn room_owner(&self, id: i64) -> StaylistResult<i64> {
        self.blocking(move |conn| {
            rooms::table
                .find(id)
                .select(rooms::owner_id)
                .first(conn)
                .optional()
                .map_err(DatabaseError::from)?
                .ok_or_else(|| NotFoundError::new("room", id).into())
        })
        .await
    }

    async fn update_room(&self, id: i64, changes: &RoomChanges) -> StaylistResult<RoomRecord> {
        let changeset = RoomChangesRow {
            name: changes.name.clone(),
            country: changes.country.clone(),
            city: changes.city.clone(),
            price: changes.price,
            rooms: changes.rooms,
            toilets: changes.toilets,
            description: changes.description.clone(),
            address: changes.address.clone(),
            pet_friendly: changes.pet_friendly,
            kind: changes.kind.map(|kind| kind.as_str().to_string()),
        };
        self.blocking(move |conn| {
            let row = if changeset.is_empty() {
                support::load_room(conn, id)?
            } else {
                diesel::update(rooms::table.find(id))
                    .set((&changeset, rooms::updated_at.eq(diesel::dsl::now)))
                    .get_result::<RoomRow>(conn)
                    .optional()
                    .map_err(DatabaseError::from)?
                    .ok_or_else(|| NotFoundError::new("room", id))?
            };
            support::room_detail(conn, row)
        })
        .await
    }

    async fn delete_room(&self, id: i64) -> StaylistResult<()> {
        self.blocking(move |conn| {
            let deleted = diesel::delete(rooms::table.find(id))
                .execute(conn)
                .map_err(DatabaseError::from)?;
            if deleted == 0 {
                return Err(NotFoundError::new("room", id).into());
            }
            info!(room_id = id, "Deleted room");
            Ok(())
        })
        .await
    }

    async fn room_amenities(
        &self,
        room_id: i64,
        offset: i64,
        limit: i64,
    ) -> StaylistResult<Vec<AmenityRecord>> {
        self.blocking(move |conn| {
            support::load_room(conn, room_id)?;
            let rows: Vec<AmenityRow> = room_amenities::table
                .inner_join(amenities::table)
                .filter(room_amenities::room_id.eq(room_id))
                .select(AmenityRow::as_select())
                .order(amenities::id.asc())
                .offset(offset)
                .limit(limit)
                .load(conn)
                .map_err(DatabaseError::from)?;
            Ok(rows.into_iter().map(crate::conversions::amenity_record).collect())
        })
        .await
    }
}
