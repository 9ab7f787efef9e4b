//! Dashboard Page
//!
//! Live telemetry view. Owns the feed connection for its lifetime: dials on
//! mount, shuts down (socket and pending retry) on unmount.

use leptos::*;

use crate::api;
use crate::components::{MessageList, ReadingCard, TelemetryChart};
use crate::state::global::GlobalState;
use crate::state::websocket::FeedConnector;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Dial the feed for this view instance
    let connector = FeedConnector::new(&api::get_feed_url());
    connector.connect(state.clone());

    // The view takes its state with it: socket, pending retry, windows,
    // and the received counter
    let teardown = connector.clone();
    let cleanup_state = state.clone();
    on_cleanup(move || {
        teardown.shutdown();
        cleanup_state.reset();
    });

    // Latest-reading card values
    let state_pot = state.clone();
    let pot = Signal::derive(move || {
        state_pot
            .latest_frame
            .get()
            .and_then(|f| f.pot_value())
            .map(|v| format!("{:.1}", v))
    });

    let state_snr = state.clone();
    let snr = Signal::derive(move || {
        state_snr
            .latest_frame
            .get()
            .and_then(|f| f.snr_value())
            .map(|v| format!("{:.1}", v))
    });

    let state_payload = state.clone();
    let payload = Signal::derive(move || {
        state_payload.latest_frame.get().and_then(|f| f.payload)
    });

    let total = state.total_received;

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Live readings from the LoRa receiver"</p>
                </div>

                // Total received counter
                <div class="text-sm text-gray-400">
                    {move || format!("Readings received ({})", total.get())}
                </div>
            </div>

            // Latest reading summary
            <section>
                <h2 class="text-lg font-semibold mb-4">"Latest Reading"</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <ReadingCard label="Power" unit="dBm" value=pot />
                    <ReadingCard label="SNR" unit="dB" value=snr />
                    <ReadingCard label="Payload" value=payload />
                </div>
            </section>

            // Live power chart
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Power Trend"</h2>
                <TelemetryChart />
            </section>

            // Raw message window
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Raw Messages"</h2>
                <MessageList />
            </section>
        </div>
    }
}
