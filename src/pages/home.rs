//! Home Page
//!
//! Landing page with a one-shot backend health check. The response body is
//! shown verbatim; failures are logged and leave the placeholder in place.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::Loading;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let (health, set_health) = create_signal(None::<String>);

    // Fire-and-forget health check on mount
    create_effect(move |_| {
        spawn_local(async move {
            match api::check_health().await {
                Ok(body) => {
                    set_health.set(Some(body));
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Health check failed: {}", e).into(),
                    );
                }
            }
        });
    });

    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center space-y-6">
            <h1 class="text-3xl font-bold">"MPPT Dashboard IoT"</h1>
            <p class="text-gray-400">"Live LoRa telemetry for your solar charge controller"</p>

            // Backend health, verbatim
            <div class="bg-gray-800 rounded-xl p-6 font-mono text-sm text-gray-300">
                {move || {
                    match health.get() {
                        Some(body) => view! { <span>{body}</span> }.into_view(),
                        None => view! {
                            <div class="flex flex-col items-center space-y-2">
                                <Loading />
                                <span>"Loading..."</span>
                            </div>
                        }.into_view(),
                    }
                }}
            </div>

            <A
                href="/dashboard"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Open Dashboard"
            </A>
        </div>
    }
}
