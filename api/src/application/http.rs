pub mod file;
pub mod health;
pub mod menu_analysis;
pub mod server;
