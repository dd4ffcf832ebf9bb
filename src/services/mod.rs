pub mod calendar;
pub mod leave_ledger;
pub mod payroll;
pub mod runner;
pub mod worklog;

pub use payroll::PayrollService;
pub use runner::PayrollRunner;

#[cfg(test)]
mod calendar_tests;
#[cfg(test)]
mod leave_ledger_tests;
#[cfg(test)]
mod runner_tests;
