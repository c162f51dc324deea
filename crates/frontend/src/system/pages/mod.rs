pub mod forgot_password;
pub mod login;
pub mod not_found;
pub mod settings;
pub mod team_settings;
