pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;
pub mod table;
pub mod ui;

pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use stat_card::{StatCard, Trend};
