//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod register;

pub use dashboard::Dashboard;
pub use home::Home;
pub use login::Login;
pub use register::Register;
