//! State Management
//!
//! Screen messages and the reactive dashboard state.

pub mod dashboard;
pub mod messages;

pub use dashboard::DashboardState;
