use anyhow::Result;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::database::{models::Holiday, utils::sql};

#[derive(Clone)]
pub struct HolidayRepository {
    pool: PgPool,
}

impl HolidayRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Non-deleted holidays whose inclusive span intersects the window.
    pub async fn find_overlapping(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Holiday>> {
        let holidays = sqlx::query_as::<_, Holiday>(&sql(r#"
            SELECT
                id,
                name,
                start_date,
                end_date,
                is_deleted,
                created_at,
                updated_at
            FROM
                holidays
            WHERE
                is_deleted = FALSE
                AND start_date <= ?
                AND end_date >= ?
            ORDER BY
                start_date
        "#))
        .bind(end)
        .bind(start)
        .fetch_all(&self.pool)
        .await?;

        Ok(holidays)
    }
}
