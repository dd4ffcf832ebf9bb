use anyhow::Result;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::{models::AttendancePunch, utils::sql};

#[derive(Clone)]
pub struct AttendanceRepository {
    pool: PgPool,
}

impl AttendanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Non-deleted punches whose attendance date falls inside the range,
    /// optionally narrowed to one user. Ordered so callers can pair
    /// punches positionally.
    pub async fn find_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        user_id: Option<Uuid>,
    ) -> Result<Vec<AttendancePunch>> {
        let punches = sqlx::query_as::<_, AttendancePunch>(&sql(r#"
            SELECT
                id,
                user_id,
                date,
                punched_at,
                is_deleted,
                created_at,
                updated_at
            FROM
                attendance
            WHERE
                is_deleted = FALSE
                AND date BETWEEN ? AND ?
                AND (?::uuid IS NULL OR user_id = ?)
            ORDER BY
                user_id, date, punched_at
        "#))
        .bind(start)
        .bind(end)
        .bind(user_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(punches)
    }
}
