//! User accounts and login material.

use super::PostgresMarketStore;
use crate::conversions::{credential, user_record};
use crate::models::{NewUserRow, UserRow};
use crate::schema::users;
use async_trait::async_trait;
use diesel::prelude::*;
use staylist_error::{DatabaseError, NotFoundError, StaylistResult, ValidationError};
use staylist_interface::{Credential, NewUser, UserRecord, UserStore};
use tracing::info;

#[async_trait]
impl UserStore for PostgresMarketStore {
    async fn create_user(&self, user: &NewUser) -> StaylistResult<UserRecord> {
        let new_row = NewUserRow {
            username: user.username.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            is_host: false,
            avatar: None,
        };
        self.blocking(move |conn| {
            let taken: Option<i64> = users::table
                .filter(users::username.eq(&new_row.username))
                .select(users::id)
                .first(conn)
                .optional()
                .map_err(DatabaseError::from)?;
            if taken.is_some() {
                return Err(ValidationError::single(
                    "username",
                    "A user with that username already exists.",
                )
                .into());
            }

            let row: UserRow = diesel::insert_into(users::table)
                .values(&new_row)
                .get_result(conn)
                .map_err(DatabaseError::from)?;
            info!(user_id = row.id, username = %row.username, "Created user");
            Ok(user_record(row))
        })
        .await
    }

    async fn get_user(&self, id: i64) -> StaylistResult<UserRecord> {
        self.blocking(move |conn| {
            users::table
                .find(id)
                .select(UserRow::as_select())
                .first(conn)
                .optional()
                .map_err(DatabaseError::from)?
                .map(user_record)
                .ok_or_else(|| NotFoundError::new("user", id).into())
        })
        .await
    }

    async fn credential(&self, username: &str) -> StaylistResult<Option<Credential>> {
        let username = username.to_string();
        self.blocking(move |conn| {
            let row: Option<UserRow> = users::table
                .filter(users::username.eq(&username))
                .select(UserRow::as_select())
                .first(conn)
                .optional()
                .map_err(DatabaseError::from)?;
            Ok(row.map(credential))
        })
        .await
    }
}
