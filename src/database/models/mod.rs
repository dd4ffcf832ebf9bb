pub mod attendance;
pub mod holiday;
pub mod leave;
pub(crate) mod macros;
pub mod payroll;
pub mod salary;
pub mod user;
pub mod week_off;

// Re-export all models for easy importing
pub use attendance::*;
pub use holiday::*;
pub use leave::*;
pub use payroll::*;
pub use salary::*;
pub use user::*;
pub use week_off::*;
