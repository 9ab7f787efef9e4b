//! Pages
//!
//! Top-level page components for each route.

pub mod home;
pub mod dashboard;
pub mod settings;

pub use home::Home;
pub use dashboard::Dashboard;
pub use settings::Settings;
