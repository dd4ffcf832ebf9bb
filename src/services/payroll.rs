//! Monthly payroll calculation: one closed calendar month, one or all
//! users, no side effects.

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use thiserror::Error;
use uuid::Uuid;

use crate::database::models::{AttendancePunch, User, UserPayroll, WeekOffRule};
use crate::database::repositories::{
    AttendanceRepository, HolidayRepository, LeaveRepository, SalaryRepository, UserRepository,
    WeekOffRepository,
};
use crate::services::{calendar, leave_ledger, worklog};
use crate::services::leave_ledger::LeaveLedger;

/// Result message for users whose join date falls after the period end.
pub const JOINED_AFTER_PERIOD: &str = "Joined after payroll period";

#[derive(Debug, Error)]
pub enum PayrollError {
    #[error("Invalid month selected.")]
    InvalidMonth,

    #[error("Please select a single month for payroll.")]
    InvalidPeriod,

    #[error("Future dates not allowed.")]
    FutureMonth,

    #[error("Cannot fetch current month payroll.")]
    CurrentMonth,

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl PayrollError {
    /// Validation failures are reported to callers as bad input; store
    /// failures fail the whole batch.
    pub fn is_validation(&self) -> bool {
        !matches!(self, PayrollError::Store(_))
    }
}

/// Validated payroll window for a month token (`YYYY-MM-01`; the day is
/// parsed but only year and month matter). Rejects months that are not
/// strictly in the past relative to `today`.
pub fn month_window(
    month_token: &str,
    today: NaiveDate,
) -> Result<(NaiveDate, NaiveDate), PayrollError> {
    let parsed = NaiveDate::parse_from_str(month_token.trim(), "%Y-%m-%d")
        .map_err(|_| PayrollError::InvalidMonth)?;

    let start = calendar::month_start(parsed);
    let end = calendar::month_end(start);

    if start > end {
        return Err(PayrollError::InvalidPeriod);
    }
    if start > today || end > today {
        return Err(PayrollError::FutureMonth);
    }
    if (start.year(), start.month()) == (today.year(), today.month()) {
        return Err(PayrollError::CurrentMonth);
    }

    Ok((start, end))
}

/// Everything the per-user computation reads, assembled fresh for each
/// calculator invocation and never mutated afterwards.
pub struct PayrollContext {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub salaries: HashMap<Uuid, f64>,
    pub holidays: HashSet<NaiveDate>,
    pub week_off_rules: HashMap<Uuid, WeekOffRule>,
    pub leave_ledgers: HashMap<Uuid, LeaveLedger>,
    /// Punch times grouped by user, then by attendance date.
    pub punches: HashMap<Uuid, HashMap<NaiveDate, Vec<NaiveDateTime>>>,
}

/// Payroll figures for one user against a prepared context.
///
/// Official days count window dates that are neither holiday nor week-off.
/// Actual days sum the per-day attendance credit over the whole window
/// independently, so logged work on an off-day still earns credit. Leave
/// days ride along in the output without entering the deduction.
pub fn compute_user_payroll(user: &User, ctx: &PayrollContext) -> UserPayroll {
    let effective_start = user.join_date.max(ctx.period_start);

    if effective_start > ctx.period_end {
        return UserPayroll {
            user_id: user.id,
            join_date: user.join_date,
            month: ctx.period_start,
            base_salary: 0.0,
            official_working_days: 0.0,
            actual_working_days: 0.0,
            deduction: 0.0,
            payable: 0.0,
            leave_count: 0.0,
            note: Some(JOINED_AFTER_PERIOD.to_string()),
        };
    }

    let salary = ctx.salaries.get(&user.id).copied().unwrap_or(0.0);
    let rule = user
        .week_off_rule_id
        .and_then(|rule_id| ctx.week_off_rules.get(&rule_id));
    let week_offs = calendar::week_off_dates(rule, effective_start, ctx.period_end);

    let no_punches = HashMap::new();
    let day_punches = ctx.punches.get(&user.id).unwrap_or(&no_punches);

    let mut official_days = 0i64;
    let mut actual_days = 0.0f64;
    for date in calendar::expand_range(effective_start, ctx.period_end) {
        if !ctx.holidays.contains(&date) && !week_offs.contains(&date) {
            official_days += 1;
        }

        let minutes = day_punches
            .get(&date)
            .map(|times| worklog::worked_minutes(times))
            .unwrap_or(0);
        actual_days += worklog::day_credit(minutes);
    }

    let per_day = if official_days > 0 {
        salary / official_days as f64
    } else {
        0.0
    };
    let deduction = ((official_days as f64 - actual_days) * per_day).max(0.0);
    let payable = (salary - deduction).min(salary);

    let leave_count = ctx
        .leave_ledgers
        .get(&user.id)
        .map(|ledger| ledger.total_days)
        .unwrap_or(0.0);

    UserPayroll {
        user_id: user.id,
        join_date: user.join_date,
        month: ctx.period_start,
        base_salary: salary,
        official_working_days: official_days as f64,
        actual_working_days: actual_days,
        deduction,
        payable,
        leave_count,
        note: None,
    }
}

/// Group punch rows by user and attendance date, preserving fetch order.
pub fn group_punches(
    rows: &[AttendancePunch],
) -> HashMap<Uuid, HashMap<NaiveDate, Vec<NaiveDateTime>>> {
    let mut grouped: HashMap<Uuid, HashMap<NaiveDate, Vec<NaiveDateTime>>> = HashMap::new();
    for row in rows {
        grouped
            .entry(row.user_id)
            .or_default()
            .entry(row.date)
            .or_default()
            .push(row.punched_at);
    }
    grouped
}

#[derive(Clone)]
pub struct PayrollService {
    users: UserRepository,
    attendance: AttendanceRepository,
    leaves: LeaveRepository,
    holidays: HolidayRepository,
    week_offs: WeekOffRepository,
    salaries: SalaryRepository,
}

impl PayrollService {
    pub fn new(
        users: UserRepository,
        attendance: AttendanceRepository,
        leaves: LeaveRepository,
        holidays: HolidayRepository,
        week_offs: WeekOffRepository,
        salaries: SalaryRepository,
    ) -> Self {
        Self {
            users,
            attendance,
            leaves,
            holidays,
            week_offs,
            salaries,
        }
    }

    /// Compute payroll for one closed month, for one user or for everyone.
    ///
    /// Reads only; persistence belongs to the driver. Any read failure
    /// fails the whole batch rather than producing partial results.
    pub async fn compute_monthly_payroll(
        &self,
        user_id: Option<Uuid>,
        month_token: &str,
    ) -> Result<Vec<UserPayroll>, PayrollError> {
        let today = Local::now().date_naive();
        let (period_start, period_end) = month_window(month_token, today)?;

        let users = self.users.list_active(user_id).await?;
        let ctx = self
            .build_context(&users, user_id, period_start, period_end)
            .await?;

        Ok(users
            .iter()
            .map(|user| compute_user_payroll(user, &ctx))
            .collect())
    }

    async fn build_context(
        &self,
        users: &[User],
        user_id: Option<Uuid>,
        period_start: NaiveDate,
        period_end: NaiveDate,
    ) -> Result<PayrollContext, PayrollError> {
        let punch_rows = self
            .attendance
            .find_in_range(period_start, period_end, user_id)
            .await?;
        let salary_rows = self.salaries.list_active(user_id).await?;
        let leave_rows = self
            .leaves
            .find_approved_overlapping(period_start, period_end, user_id)
            .await?;
        let holiday_rows = self.holidays.find_overlapping(period_start, period_end).await?;

        let mut week_off_rules = HashMap::new();
        for user in users {
            let Some(rule_id) = user.week_off_rule_id else {
                continue;
            };
            if week_off_rules.contains_key(&rule_id) {
                continue;
            }
            if let Some(rule) = self.week_offs.find_rule(rule_id).await? {
                week_off_rules.insert(rule_id, rule);
            }
        }

        Ok(PayrollContext {
            period_start,
            period_end,
            salaries: salary_rows
                .iter()
                .map(|row| (row.user_id, row.amount))
                .collect(),
            holidays: calendar::holiday_dates(&holiday_rows),
            week_off_rules,
            leave_ledgers: leave_ledger::build_ledgers(&leave_rows, period_start, period_end),
            punches: group_punches(&punch_rows),
        })
    }
}
