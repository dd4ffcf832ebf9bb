use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::macros::string_enum;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Leave {
    pub id: Uuid,
    pub user_id: Uuid,
    pub start_date: NaiveDate,
    pub start_day_type: LeaveDayType,
    /// Absent for single-day leaves; treated as equal to `start_date`.
    pub end_date: Option<NaiveDate>,
    pub end_day_type: Option<LeaveDayType>,
    pub status: LeaveStatus,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Leave {
    /// End of the leave span, defaulting to the start for open-ended rows.
    pub fn span_end(&self) -> NaiveDate {
        self.end_date.unwrap_or(self.start_date)
    }
}

string_enum! {
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
    pub enum LeaveDayType {
        FullDay => "Full Day",
        FirstHalf => "First Half",
        SecondHalf => "Second Half",
    }
}

string_enum! {
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
    pub enum LeaveStatus {
        Pending => "Pending",
        Approved => "Approved",
        Rejected => "Rejected",
    }
}
