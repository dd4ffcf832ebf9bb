use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::{models::UserSalary, utils::sql};

#[derive(Clone)]
pub struct SalaryRepository {
    pool: PgPool,
}

impl SalaryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Active salary rows, optionally narrowed to one user. Users without
    /// an active row are treated as earning zero by the calculator.
    pub async fn list_active(&self, user_id: Option<Uuid>) -> Result<Vec<UserSalary>> {
        let salaries = sqlx::query_as::<_, UserSalary>(&sql(r#"
            SELECT
                id,
                user_id,
                amount,
                effective_date,
                is_active,
                is_deleted,
                created_at,
                updated_at
            FROM
                user_salaries
            WHERE
                is_active = TRUE
                AND is_deleted = FALSE
                AND (?::uuid IS NULL OR user_id = ?)
        "#))
        .bind(user_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(salaries)
    }
}
