//! Reading Card Component
//!
//! Displays one field of the most recent structured frame.

use leptos::*;

/// Latest-reading card component
#[component]
pub fn ReadingCard(
    /// Field label to display
    label: &'static str,
    /// Optional unit label
    #[prop(optional)]
    unit: Option<&'static str>,
    /// Current value, `None` until a structured frame arrives
    #[prop(into)]
    value: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            // Header with field label
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{label}</span>
                {unit.map(|u| view! {
                    <span class="text-gray-500 text-xs">{u}</span>
                })}
            </div>

            // Current value
            <div class="text-3xl font-bold mt-2 break-all">
                {move || value.get().unwrap_or_else(|| "—".to_string())}
            </div>
        </div>
    }
}
