//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod nav;
pub mod chart;
pub mod message_list;
pub mod reading_card;
pub mod loading;

pub use nav::Nav;
pub use chart::TelemetryChart;
pub use message_list::MessageList;
pub use reading_card::ReadingCard;
pub use loading::{InlineLoading, Loading};
