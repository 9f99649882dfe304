//! Amenity CRUD.

use super::PostgresMarketStore;
use crate::conversions::amenity_record;
use crate::models::{AmenityChangesRow, AmenityRow, NewAmenityRow};
use crate::schema::amenities;
use async_trait::async_trait;
use diesel::prelude::*;
use staylist_error::{DatabaseError, NotFoundError, StaylistResult};
use staylist_interface::{AmenityChanges, AmenityRecord, AmenityStore, NewAmenity};
use tracing::info;

fn load_amenity(
    conn: &mut diesel::pg::PgConnection,
    id: i64,
) -> StaylistResult<AmenityRow> {
    amenities::table
        .find(id)
        .select(AmenityRow::as_select())
        .first(conn)
        .optional()
        .map_err(DatabaseError::from)?
        .ok_or_else(|| NotFoundError::new("amenity", id).into())
}

#[async_trait]
impl AmenityStore for PostgresMarketStore {
    async fn list_amenities(&self) -> StaylistResult<Vec<AmenityRecord>> {
        self.blocking(|conn| {
            let rows: Vec<AmenityRow> = amenities::table
                .select(AmenityRow::as_select())
                .order(amenities::id.asc())
                .load(conn)
                .map_err(DatabaseError::from)?;
            Ok(rows.into_iter().map(amenity_record).collect())
        })
        .await
    }

    async fn create_amenity(&self, amenity: &NewAmenity) -> StaylistResult<AmenityRecord> {
        let new_row = NewAmenityRow {
            name: amenity.name.clone(),
            description: amenity.description.clone(),
        };
        self.blocking(move |conn| {
            let row: AmenityRow = diesel::insert_into(amenities::table)
                .values(&new_row)
                .get_result(conn)
                .map_err(DatabaseError::from)?;
            info!(amenity_id = row.id, name = %row.name, "Created amenity");
            Ok(amenity_record(row))
        })
        .await
    }

    async fn get_amenity(&self, id: i64) -> StaylistResult<AmenityRecord> {
        self.blocking(move |conn| load_amenity(conn, id).map(amenity_record))
            .await
    }

    async fn update_amenity(
        &self,
        id: i64,
        changes: &AmenityChanges,
    ) -> StaylistResult<AmenityRecord> {
        let changeset = AmenityChangesRow {
            name: changes.name.clone(),
            description: changes.description.clone(),
        };
        self.blocking(move |conn| {
            let row = if changeset.is_empty() {
                load_amenity(conn, id)?
            } else {
                diesel::update(amenities::table.find(id))
                    .set((&changeset, amenities::updated_at.eq(diesel::dsl::now)))
                    .get_result::<AmenityRow>(conn)
                    .optional()
                    .map_err(DatabaseError::from)?
                    .ok_or_else(|| NotFoundError::new("amenity", id))?
            };
            Ok(amenity_record(row))
        })
        .await
    }

    async fn delete_amenity(&self, id: i64) -> StaylistResult<()> {
        self.blocking(move |conn| {
            let deleted = diesel::delete(amenities::table.find(id))
                .execute(conn)
                .map_err(DatabaseError::from)?;
            if deleted == 0 {
                return Err(NotFoundError::new("amenity", id).into());
            }
            Ok(())
        })
        .await
    }
}
