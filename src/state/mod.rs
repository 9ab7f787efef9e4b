//! State Management
//!
//! Feed data model, reactive state, and the WebSocket feed connector.

pub mod feed;
pub mod global;
pub mod websocket;

pub use feed::{FeedFrame, FeedWindows, TelemetrySample};
pub use global::{provide_global_state, GlobalState};
pub use websocket::FeedConnector;
