//! MPPT Dashboard
//!
//! Web dashboard for a LoRa-linked MPPT solar charge controller, built with
//! Leptos (WASM).
//!
//! # Features
//!
//! - Live telemetry feed over WebSocket with automatic reconnect
//! - Scrolling raw message window and live power chart
//! - One-shot backend health check
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the backend via HTTP and WebSocket.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
