//! Settings Page
//!
//! Endpoint configuration for the backend API and the feed WebSocket.

use leptos::*;

use crate::api;
use crate::components::InlineLoading;
use crate::state::global::GlobalState;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Configure the dashboard endpoints"</p>
            </div>

            <EndpointSettings />
        </div>
    }
}

/// Endpoint configuration section
#[component]
fn EndpointSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (feed_url, set_feed_url) = create_signal(api::get_feed_url());
    let (testing, set_testing) = create_signal(false);
    let (test_result, set_test_result) = create_signal(None::<bool>);

    let test_connection = move |_| {
        set_testing.set(true);
        set_test_result.set(None);

        api::set_api_base(&api_url.get());

        spawn_local(async move {
            match api::check_health().await {
                Ok(_) => set_test_result.set(Some(true)),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Health check failed: {}", e).into(),
                    );
                    set_test_result.set(Some(false));
                }
            }
            set_testing.set(false);
        });
    };

    let save_urls = move |_| {
        api::set_api_base(&api_url.get());
        api::set_feed_url(&feed_url.get());
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Endpoints"</h2>

            <div class="space-y-4">
                // Backend base URL
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Backend API URL"</label>
                    <div class="flex space-x-2">
                        <input
                            type="text"
                            prop:value=move || api_url.get()
                            on:input=move |ev| set_api_url.set(event_target_value(&ev))
                            class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                        <button
                            on:click=test_connection
                            disabled=move || testing.get()
                            class="px-4 py-3 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if testing.get() {
                                view! {
                                    <span class="flex items-center space-x-2">
                                        <InlineLoading />
                                        <span>"Testing..."</span>
                                    </span>
                                }.into_view()
                            } else {
                                view! { <span>"Test"</span> }.into_view()
                            }}
                        </button>
                    </div>
                </div>

                // Feed URL
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Feed WebSocket URL"</label>
                    <input
                        type="text"
                        prop:value=move || feed_url.get()
                        on:input=move |ev| set_feed_url.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <p class="text-xs text-gray-500 mt-1">
                        "Takes effect the next time the dashboard is opened"
                    </p>
                </div>

                <button
                    on:click=save_urls
                    class="px-4 py-3 bg-primary-600 hover:bg-primary-700
                           rounded-lg font-medium transition-colors"
                >
                    "Save"
                </button>

                // Health check result
                <div class="flex items-center space-x-2">
                    <span class="text-sm text-gray-400">"Backend:"</span>
                    {move || {
                        match test_result.get() {
                            Some(true) => view! {
                                <span class="text-green-400">"✓ Reachable"</span>
                            }.into_view(),
                            Some(false) => view! {
                                <span class="text-red-400">"✕ Unreachable"</span>
                            }.into_view(),
                            None => view! {
                                <span class="text-gray-400">"Not tested"</span>
                            }.into_view(),
                        }
                    }}
                </div>

                // Feed status
                <div class="flex items-center space-x-2">
                    <span class="text-sm text-gray-400">"Feed:"</span>
                    {
                        let feed_connected = state.feed_connected;
                        move || {
                            if feed_connected.get() {
                                view! { <span class="text-green-400">"🟢 Connected"</span> }.into_view()
                            } else {
                                view! { <span class="text-red-400">"🔴 Disconnected"</span> }.into_view()
                            }
                        }
                    }
                </div>
            </div>
        </section>
    }
}
