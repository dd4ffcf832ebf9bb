use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One raw punch. Punches carry no in/out direction; the aggregator pairs
/// them by position after sorting.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AttendancePunch {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    /// Wall-clock local time, matching the 19:00 fallback-checkout rule.
    pub punched_at: NaiveDateTime,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
