use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::{models::WeekOffRule, utils::sql};

#[derive(Clone)]
pub struct WeekOffRepository {
    pool: PgPool,
}

impl WeekOffRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_rule(&self, id: Uuid) -> Result<Option<WeekOffRule>> {
        let rule = sqlx::query_as::<_, WeekOffRule>(&sql(r#"
            SELECT
                id,
                name,
                effective_date,
                days,
                is_deleted,
                created_at,
                updated_at
            FROM
                week_off_rules
            WHERE
                id = ?
                AND is_deleted = FALSE
        "#))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(rule)
    }
}
