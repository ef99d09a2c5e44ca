pub mod http;
pub mod state;

pub use state::DashboardState;
