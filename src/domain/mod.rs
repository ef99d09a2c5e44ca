pub mod company;
pub mod dashboard_config;
pub mod display;
pub mod error;
pub mod geo;
pub mod region;
