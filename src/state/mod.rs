pub mod auth;
pub mod leaves;
