pub mod common;
pub mod menu_analysis;
pub mod storage;
