pub mod panel;
pub mod repository;

pub use panel::DashboardPage;
