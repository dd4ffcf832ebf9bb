use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::macros::string_enum;

/// Computed payroll line for one user and one month. This is both the
/// calculator's API response shape and the row inserted by the driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayroll {
    pub user_id: Uuid,
    pub join_date: NaiveDate,
    /// First day of the payroll month.
    pub month: NaiveDate,
    pub base_salary: f64,
    pub official_working_days: f64,
    /// Fractional in 0.5-day steps.
    pub actual_working_days: f64,
    pub deduction: f64,
    pub payable: f64,
    /// Approved leave days overlapping the month. Reported alongside the
    /// figures; not part of the deduction arithmetic.
    pub leave_count: f64,
    /// Set for users who joined after the payroll period ended.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

string_enum! {
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
    pub enum PayrollStatus {
        Pending => "Pending",
        Approved => "Approved",
        Paid => "Paid",
        Rejected => "Rejected",
    }
}
