use anyhow::Result;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::{
    models::{Leave, LeaveStatus},
    utils::sql,
};

#[derive(Clone)]
pub struct LeaveRepository {
    pool: PgPool,
}

impl LeaveRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Approved, non-deleted leaves whose span overlaps the window. An
    /// absent end date is read as a single-day leave.
    pub async fn find_approved_overlapping(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        user_id: Option<Uuid>,
    ) -> Result<Vec<Leave>> {
        let leaves = sqlx::query_as::<_, Leave>(&sql(r#"
            SELECT
                id,
                user_id,
                start_date,
                start_day_type,
                end_date,
                end_day_type,
                status,
                is_deleted,
                created_at,
                updated_at
            FROM
                leaves
            WHERE
                status = ?
                AND is_deleted = FALSE
                AND start_date <= ?
                AND COALESCE(end_date, start_date) >= ?
                AND (?::uuid IS NULL OR user_id = ?)
            ORDER BY
                user_id, start_date
        "#))
        .bind(LeaveStatus::Approved.to_string())
        .bind(end)
        .bind(start)
        .bind(user_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(leaves)
    }
}
