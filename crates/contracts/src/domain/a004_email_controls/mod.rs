pub mod aggregate;

pub use aggregate::{seed_email_controls, split_bulk_emails, EmailControls, EmailListKind};
