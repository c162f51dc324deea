pub mod config;
pub mod csv_export;
pub mod error;
pub mod list_view;
pub mod money;
pub mod status;
