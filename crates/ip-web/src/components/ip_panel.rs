use leptos::prelude::*;

use super::{CopyButton, LocationIcon, Spinner};
use crate::i18n::use_messages;
use crate::lookup::{LookupResult, ViewState};

/// Fetches the caller's IP once on mount and renders whichever of
/// loading / error / result is current
#[component]
pub fn IpPanel() -> impl IntoView {
    let messages = use_messages();

    #[cfg(feature = "csr")]
    let (view_state, set_view_state) = signal(ViewState::default());
    #[cfg(not(feature = "csr"))]
    let (view_state, _) = signal(ViewState::default());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use crate::api::fetch_lookup;
        use crate::config::CONFIG;
        use crate::lookup::LookupEvent;

        let outcome = fetch_lookup(CONFIG.lookup_url).await;
        if let Err(e) = &outcome {
            leptos::logging::error!("IP lookup failed: {}", e);
        }

        // try_update: the panel may be gone by the time the response lands
        set_view_state.try_update(|state| {
            *state = std::mem::take(state).apply(LookupEvent::Finished(outcome), messages);
        });
    });

    view! {
        <main class="flex flex-col items-center justify-center bg-gray-900/50 p-6 rounded-lg min-h-[160px] border border-gray-700 space-y-4">
            {move || match view_state.get() {
                ViewState::Loading => view! { <Spinner label=messages.loading /> }.into_any(),
                ViewState::Error(message) => view! {
                    <p class="text-red-400 text-center font-medium">{message}</p>
                }.into_any(),
                ViewState::Loaded(result) => view! { <IpDetails result=result /> }.into_any(),
            }}
        </main>
    }
}

#[component]
fn IpDetails(result: LookupResult) -> impl IntoView {
    let LookupResult { ip, location } = result;

    view! {
        <div class="flex items-center space-x-4">
            <p class="text-2xl md:text-3xl font-mono tracking-wider text-green-400 select-all">{ip.clone()}</p>
            <CopyButton text=ip />
        </div>
        {location.map(|loc| view! {
            <div class="flex items-center text-gray-300 pt-2 border-t border-gray-700/50 mt-4 w-full justify-center">
                <LocationIcon class="w-5 h-5 mr-2 text-cyan-400" />
                <p class="text-md">
                    <span class="font-semibold">{loc.city}</span>
                    ", "
                    <span class="text-gray-400">{loc.country}</span>
                </p>
            </div>
        })}
    }
}
