//! Monthly payroll driver: walks every active user's closed months,
//! computes the missing ones, and records failures without aborting the
//! pass. Also owns the first-of-month schedule loop.

use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::models::User;
use crate::database::repositories::{PayrollRepository, UserRepository};
use crate::services::calendar;
use crate::services::payroll::PayrollService;

/// Additional whole-pass attempts after the first one fails.
pub const MAX_RUN_RETRIES: u32 = 3;

/// Outcome of one driver pass over all (user, month) pairs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub generated: u32,
    pub failed: u32,
    pub skipped: u32,
}

impl RunSummary {
    pub fn message(&self) -> String {
        format!(
            "Payroll generation complete. Success: {}, Failed: {}",
            self.generated, self.failed
        )
    }
}

#[derive(Clone)]
pub struct PayrollRunner {
    users: UserRepository,
    payrolls: PayrollRepository,
    calculator: PayrollService,
}

impl PayrollRunner {
    pub fn new(
        users: UserRepository,
        payrolls: PayrollRepository,
        calculator: PayrollService,
    ) -> Self {
        Self {
            users,
            payrolls,
            calculator,
        }
    }

    /// Run one pass, retrying the whole pass on errors raised outside the
    /// per-pair handling (e.g. the user enumeration itself failing).
    pub async fn run_with_retry(&self) -> Result<RunSummary> {
        let mut attempt = 0;
        loop {
            match self.run_once().await {
                Ok(summary) => {
                    log::info!("{}", summary.message());
                    return Ok(summary);
                }
                Err(err) if attempt < MAX_RUN_RETRIES => {
                    attempt += 1;
                    log::warn!(
                        "Payroll pass failed ({err:#}); retrying, attempt {attempt} of {MAX_RUN_RETRIES}"
                    );
                }
                Err(err) => {
                    log::error!("Max retries reached. Payroll pass abandoned: {err:#}");
                    return Err(err);
                }
            }
        }
    }

    /// One sequential pass: for every active user, every month from the
    /// join month through the last closed month, compute-and-store unless
    /// a payroll row already exists for the pair.
    pub async fn run_once(&self) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        let users = self.users.list_active(None).await?;
        let last_closed = calendar::previous_month_start(Local::now().date_naive());

        for user in &users {
            for month in calendar::month_sequence(user.join_date, last_closed) {
                if self.payrolls.exists(user.id, month).await? {
                    log::debug!(
                        "Payroll already exists for user {} for {month}, skipping",
                        user.id
                    );
                    summary.skipped += 1;
                    continue;
                }

                self.process_pair(user, month, &mut summary).await;
            }
        }

        Ok(summary)
    }

    /// Compute and persist one (user, month) pair. Failures land in the
    /// error log; they never abort the pass.
    async fn process_pair(&self, user: &User, month: NaiveDate, summary: &mut RunSummary) {
        log::info!("Generating payroll for user {} for {month}", user.id);

        let month_token = month.format("%Y-%m-01").to_string();
        match self
            .calculator
            .compute_monthly_payroll(Some(user.id), &month_token)
            .await
        {
            Ok(lines) => {
                for line in lines {
                    match self.payrolls.insert(&line).await {
                        Ok(true) => summary.generated += 1,
                        Ok(false) => {
                            // Lost the race to a concurrent run; the row
                            // that exists is the one that counts.
                            summary.skipped += 1;
                        }
                        Err(err) => {
                            summary.failed += 1;
                            self.log_failure(user.id, month, &format!("{err:#}")).await;
                        }
                    }
                }
            }
            Err(err) => {
                summary.failed += 1;
                self.log_failure(user.id, month, &err.to_string()).await;
            }
        }
    }

    async fn log_failure(&self, user_id: Uuid, month: NaiveDate, message: &str) {
        log::error!("Payroll generation failed for user {user_id}, month {month}: {message}");
        if let Err(err) = self.payrolls.append_error(user_id, month, message).await {
            log::error!("Failed to record payroll error for user {user_id} ({month}): {err:#}");
        }
    }
}

/// Fire one driver pass at the start of every calendar month. The loop
/// sleeps until the next first-of-month midnight, so a freshly started
/// process never re-fires for a month the schedule already covered.
pub fn spawn_monthly(runner: PayrollRunner) {
    tokio::spawn(async move {
        loop {
            let now = Local::now().naive_local();
            let next_run = calendar::next_month_start(now.date()).and_time(NaiveTime::MIN);
            let wait = (next_run - now).to_std().unwrap_or_default();

            log::info!("Next scheduled payroll run at {next_run}");
            tokio::time::sleep(wait).await;

            log::info!("Running scheduled monthly payroll generation");
            if let Err(err) = runner.run_with_retry().await {
                log::error!("Scheduled payroll run gave up: {err:#}");
            }
        }
    });
}
