pub mod config;
pub mod database;
pub mod handlers;
pub mod services;

pub use config::Config;
pub use services::{PayrollRunner, PayrollService};
