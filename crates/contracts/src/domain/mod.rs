pub mod a001_promo_group;
pub mod a002_team_member;
pub mod a003_team_usage;
pub mod a004_email_controls;
pub mod common;
