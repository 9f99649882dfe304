//! Photos and videos hanging off rooms.

use super::PostgresMarketStore;
use crate::conversions::{photo_record, video_record};
use crate::models::{NewPhotoRow, NewVideoRow, PhotoRow, VideoRow};
use crate::schema::{photos, rooms, videos};
use async_trait::async_trait;
use diesel::prelude::*;
use staylist_error::{DatabaseError, NotFoundError, StaylistResult, ValidationError};
use staylist_interface::{MediaStore, NewPhoto, NewVideo, PhotoRecord, VideoRecord};

#[async_trait]
impl MediaStore for PostgresMarketStore {
    async fn add_photo(&self, room_id: i64, photo: &NewPhoto) -> StaylistResult<PhotoRecord> {
        let new_row = NewPhotoRow {
            room_id,
            file: photo.file.clone(),
            description: photo.description.clone(),
        };
        self.blocking(move |conn| {
            let row: PhotoRow = diesel::insert_into(photos::table)
                .values(&new_row)
                .get_result(conn)
                .map_err(DatabaseError::from)?;
            Ok(photo_record(row))
        })
        .await
    }

    async fn photo_room_owner(&self, id: i64) -> StaylistResult<i64> {
        self.blocking(move |conn| {
            photos::table
                .inner_join(rooms::table)
                .filter(photos::id.eq(id))
                .select(rooms::owner_id)
                .first(conn)
                .optional()
                .map_err(DatabaseError::from)?
                .ok_or_else(|| NotFoundError::new("photo", id).into())
        })
        .await
    }

    async fn delete_photo(&self, id: i64) -> StaylistResult<()> {
        self.blocking(move |conn| {
            let deleted = diesel::delete(photos::table.find(id))
                .execute(conn)
                .map_err(DatabaseError::from)?;
            if deleted == 0 {
                return Err(NotFoundError::new("photo", id).into());
            }
            Ok(())
        })
        .await
    }

    async fn set_video(&self, room_id: i64, video: &NewVideo) -> StaylistResult<VideoRecord> {
        let new_row = NewVideoRow {
            room_id,
            file: video.file.clone(),
        };
        self.blocking(move |conn| {
            let taken: Option<i64> = videos::table
                .filter(videos::room_id.eq(room_id))
                .select(videos::id)
                .first(conn)
                .optional()
                .map_err(DatabaseError::from)?;
            if taken.is_some() {
                return Err(
                    ValidationError::single("room", "This room already has a video.").into(),
                );
            }

            let row: VideoRow = diesel::insert_into(videos::table)
                .values(&new_row)
                .get_result(conn)
                .map_err(DatabaseError::from)?;
            Ok(video_record(row))
        })
        .await
    }

    async fn video_room_owner(&self, id: i64) -> StaylistResult<i64> {
        self.blocking(move |conn| {
            videos::table
                .inner_join(rooms::table)
                .filter(videos::id.eq(id))
                .select(rooms::owner_id)
                .first(conn)
                .optional()
                .map_err(DatabaseError::from)?
                .ok_or_else(|| NotFoundError::new("video", id).into())
        })
        .await
    }

    async fn delete_video(&self, id: i64) -> StaylistResult<()> {
        self.blocking(move |conn| {
            let deleted = diesel::delete(videos::table.find(id))
                .execute(conn)
                .map_err(DatabaseError::from)?;
            if deleted == 0 {
                return Err(NotFoundError::new("video", id).into());
            }
            Ok(())
        })
        .await
    }
}
