//! Message List Component
//!
//! Scrolling window of raw feed payloads, most recent last.

use leptos::*;

use crate::state::global::GlobalState;

/// Raw message list component
#[component]
pub fn MessageList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="bg-gray-900 rounded-lg p-4 h-64 overflow-y-auto font-mono text-sm">
            {move || {
                let messages = state.windows.get().messages;

                if messages.is_empty() {
                    view! {
                        <p class="text-gray-500">"No readings yet"</p>
                    }.into_view()
                } else {
                    messages.into_iter().map(|line| {
                        view! {
                            <div class="py-1 border-b border-gray-800 last:border-0 text-gray-300 break-all">
                                {line}
                            </div>
                        }
                    }).collect_view()
                }
            }}
        </div>
    }
}
