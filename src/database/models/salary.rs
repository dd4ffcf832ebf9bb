use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A salary assignment. The create/update flow in the HR tooling keeps at
/// most one row active per user.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserSalary {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: f64,
    pub effective_date: NaiveDate,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
