pub mod analyze_menu;
pub mod upload_and_analyze_menu;
