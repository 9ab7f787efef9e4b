//! API Client
//!
//! HTTP access to the backend and endpoint configuration.

pub mod client;

pub use client::*;
