pub mod components;
pub mod date_utils;
pub mod export;
pub mod icons;
pub mod import;
pub mod list_utils;
pub mod modal;
pub mod page_frame;
pub mod page_standard;
