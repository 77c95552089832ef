pub mod config_manager;
pub mod extract;
pub mod page;
pub mod timefmt;
pub mod url;
