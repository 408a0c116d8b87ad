pub mod config_file;
pub mod driver;
pub mod journal_file;
pub mod keys;
pub mod save_file;

pub const APP_NAME: &str = "Seedworld";
