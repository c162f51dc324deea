pub mod header;
pub mod top_up_dialog;

pub use header::Header;
