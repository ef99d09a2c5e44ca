#[path = "config/mod.rs"]
pub mod config_mod;
pub use config_mod as config;
pub mod bootstrap;
pub mod geo;
pub mod response;
pub mod spreadsheet;
