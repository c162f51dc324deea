pub mod common;
pub mod u501_redeem_code;
