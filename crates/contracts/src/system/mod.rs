pub mod account;
pub mod auth;
pub mod top_up;
