pub mod directory;
pub mod panel;

pub use panel::EmployeesPage;
