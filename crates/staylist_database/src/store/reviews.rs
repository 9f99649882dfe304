//! Append-only reviews.

use super::PostgresMarketStore;
use super::support;
use crate::conversions::review_record;
use crate::models::{NewReviewRow, ReviewRow, UserRow};
use crate::schema::{reviews, users};
use async_trait::async_trait;
use diesel::prelude::*;
use staylist_error::{DatabaseError, StaylistResult};
use staylist_interface::{NewReview, ReviewRecord, ReviewStore};
use tracing::info;

#[async_trait]
impl ReviewStore for PostgresMarketStore {
    async fn reviews_for_room(
        &self,
        room_id: i64,
        offset: i64,
        limit: i64,
    ) -> StaylistResult<Vec<ReviewRecord>> {
        self.blocking(move |conn| {
            support::load_room(conn, room_id)?;
            let rows: Vec<(ReviewRow, UserRow)> = reviews::table
                .inner_join(users::table)
                .filter(reviews::room_id.eq(room_id))
                .select((ReviewRow::as_select(), UserRow::as_select()))
                .order(reviews::id.asc())
                .offset(offset)
                .limit(limit)
                .load(conn)
                .map_err(DatabaseError::from)?;
            Ok(rows
                .into_iter()
                .map(|(review, user)| review_record(review, user))
                .collect())
        })
        .await
    }

    async fn create_review(
        &self,
        user_id: i64,
        room_id: i64,
        review: &NewReview,
    ) -> StaylistResult<ReviewRecord> {
        let new_row = NewReviewRow {
            user_id,
            room_id,
            payload: review.payload.clone(),
            rating: review.rating,
        };
        self.blocking(move |conn| {
            support::load_room(conn, room_id)?;
            let row: ReviewRow = diesel::insert_into(reviews::table)
                .values(&new_row)
                .get_result(conn)
                .map_err(DatabaseError::from)?;
            let user: UserRow = users::table
                .find(user_id)
                .select(UserRow::as_select())
                .first(conn)
                .map_err(DatabaseError::from)?;
            info!(review_id = row.id, room_id, "Created review");
            Ok(review_record(row, user))
        })
        .await
    }
}
