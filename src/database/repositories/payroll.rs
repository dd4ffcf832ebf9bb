use anyhow::Result;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::{
    models::{PayrollStatus, UserPayroll},
    utils::sql,
};

#[derive(Clone)]
pub struct PayrollRepository {
    pool: PgPool,
}

impl PayrollRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Whether a payroll row already exists for the pair. Soft-deleted rows
    /// still count: existence is the idempotency key and a regenerated row
    /// would violate the at-most-once lifecycle.
    pub async fn exists(&self, user_id: Uuid, month: NaiveDate) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(&sql(r#"
            SELECT EXISTS (
                SELECT 1 FROM payroll WHERE user_id = ? AND month = ?
            )
        "#))
        .bind(user_id)
        .bind(month)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Insert one computed line. Returns false when another run won the
    /// race for this (user, month) pair; the unique constraint, not the
    /// existence pre-check, is what actually enforces at-most-once.
    pub async fn insert(&self, line: &UserPayroll) -> Result<bool> {
        let now = Utc::now();

        let result = sqlx::query(&sql(r#"
            INSERT INTO
                payroll (
                    user_id,
                    month,
                    base_salary,
                    official_working_days,
                    actual_working_days,
                    deduction,
                    payable,
                    leave_count,
                    status,
                    created_at,
                    updated_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT (user_id, month) DO NOTHING
        "#))
        .bind(line.user_id)
        .bind(line.month)
        .bind(line.base_salary)
        .bind(line.official_working_days)
        .bind(line.actual_working_days)
        .bind(line.deduction)
        .bind(line.payable)
        .bind(line.leave_count)
        .bind(PayrollStatus::Pending.to_string())
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Record a failed computation. Append-only; repeated failures for the
    /// same pair produce one row each.
    pub async fn append_error(
        &self,
        user_id: Uuid,
        target_month: NaiveDate,
        error_message: &str,
    ) -> Result<()> {
        sqlx::query(&sql(r#"
            INSERT INTO
                payroll_error_logs (user_id, target_month, error_message, created_at)
            VALUES
                (?, ?, ?, ?)
        "#))
        .bind(user_id)
        .bind(target_month)
        .bind(error_message)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
