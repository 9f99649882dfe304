//! Category reference data.

use super::PostgresMarketStore;
use crate::conversions::category_record;
use crate::models::{CategoryRow, NewCategoryRow};
use crate::schema::categories;
use async_trait::async_trait;
use diesel::prelude::*;
use staylist_error::{DatabaseError, NotFoundError, StaylistResult};
use staylist_interface::{CategoryRecord, CategoryStore, NewCategory};

#[async_trait]
impl CategoryStore for PostgresMarketStore {
    async fn list_categories(&self) -> StaylistResult<Vec<CategoryRecord>> {
        self.blocking(|conn| {
            let rows: Vec<CategoryRow> = categories::table
                .select(CategoryRow::as_select())
                .order(categories::id.asc())
                .load(conn)
                .map_err(DatabaseError::from)?;
            rows.into_iter().map(category_record).collect()
        })
        .await
    }

    async fn create_category(&self, category: &NewCategory) -> StaylistResult<CategoryRecord> {
        let new_row = NewCategoryRow {
            name: category.name.clone(),
            kind: category.kind.as_str().to_string(),
        };
        self.blocking(move |conn| {
            let row: CategoryRow = diesel::insert_into(categories::table)
                .values(&new_row)
                .get_result(conn)
                .map_err(DatabaseError::from)?;
            category_record(row)
        })
        .await
    }

    async fn get_category(&self, id: i64) -> StaylistResult<CategoryRecord> {
        self.blocking(move |conn| {
            let row: Option<CategoryRow> = categories::table
                .find(id)
                .select(CategoryRow::as_select())
                .first(conn)
                .optional()
                .map_err(DatabaseError::from)?;
            match row {
                Some(row) => category_record(row),
                None => Err(NotFoundError::new("category", id).into()),
            }
        })
        .await
    }
}
