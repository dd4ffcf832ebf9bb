pub mod attendance;
pub mod holiday;
pub mod leave;
pub mod payroll;
pub mod salary;
pub mod user;
pub mod week_off;

// Re-export all repositories for easy importing
pub use attendance::AttendanceRepository;
pub use holiday::HolidayRepository;
pub use leave::LeaveRepository;
pub use payroll::PayrollRepository;
pub use salary::SalaryRepository;
pub use user::UserRepository;
pub use week_off::WeekOffRepository;
