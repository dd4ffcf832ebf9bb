use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;

/// Day-type tag in the first position of a weekday's configuration list.
pub const DAY_TAG_FULL_DAY: &str = "FullDay";
pub const DAY_TAG_HALF_DAY: &str = "HalfDay";
pub const DAY_TAG_WEEK_OFF: &str = "WeekOff";

/// Week-ordinal qualifier labels, in ordinal order. A fifth occurrence of
/// a weekday in a month has no label and never matches a qualifier.
pub const WEEK_ORDINAL_LABELS: [&str; 4] = ["First", "Second", "Third", "Fourth"];

/// A named week-off configuration assignable to users.
///
/// `days` maps a weekday name (`"Sunday"` .. `"Saturday"`) to an ordered
/// list whose first element is a day-type tag and whose remaining elements
/// are week-ordinal qualifiers restricting a `WeekOff` tag to specific
/// occurrences of that weekday.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WeekOffRule {
    pub id: Uuid,
    pub name: Option<String>,
    /// Stored with the rule but not consulted when the rule is expanded:
    /// an assigned rule applies across the whole evaluated window.
    pub effective_date: NaiveDate,
    pub days: Json<HashMap<String, Vec<String>>>,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
