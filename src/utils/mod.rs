pub mod browser;
pub mod session;
