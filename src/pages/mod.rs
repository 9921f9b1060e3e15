pub mod approvals;
pub mod attendance;
pub mod dashboard;
pub mod employees;
pub mod leaves;
pub mod login;
pub mod payroll;
