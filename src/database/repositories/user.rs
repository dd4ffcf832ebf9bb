use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::{models::User, utils::sql};

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Active (non-deleted) users, optionally narrowed to one user.
    pub async fn list_active(&self, user_id: Option<Uuid>) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(&sql(r#"
            SELECT
                id,
                full_name,
                email,
                join_date,
                week_off_rule_id,
                is_deleted,
                created_at,
                updated_at
            FROM
                users
            WHERE
                is_deleted = FALSE
                AND (?::uuid IS NULL OR id = ?)
            ORDER BY
                join_date, id
        "#))
        .bind(user_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&sql(r#"
            SELECT
                id,
                full_name,
                email,
                join_date,
                week_off_rule_id,
                is_deleted,
                created_at,
                updated_at
            FROM
                users
            WHERE
                id = ?
                AND is_deleted = FALSE
        "#))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
