use leptos::prelude::*;

use super::{CheckIcon, CopyIcon};
use crate::copy::CopyState;
use crate::i18n::use_messages;

/// A button that copies text to the clipboard and shows a check mark for a
/// couple of seconds afterwards
#[component]
pub fn CopyButton(
    /// The text to copy when clicked
    #[prop(into)]
    text: String,
) -> impl IntoView {
    let messages = use_messages();

    #[cfg(feature = "csr")]
    let (copy_state, set_copy_state) = signal(CopyState::default());
    #[cfg(not(feature = "csr"))]
    let (copy_state, _) = signal(CopyState::default());

    // Only the browser build can reach the clipboard
    #[cfg(feature = "csr")]
    let on_click = {
        use crate::config::CONFIG;
        use crate::copy::{BrowserTimers, RevertTimer, write_text};
        use gloo_timers::callback::Timeout;

        let text = StoredValue::new(text);
        let revert_timer = StoredValue::new_local(RevertTimer::<Timeout>::default());

        // Nothing may fire after unmount
        on_cleanup(move || {
            revert_timer.try_update_value(RevertTimer::clear);
        });

        move |_: leptos::ev::MouseEvent| {
            let Some(ip) = set_copy_state
                .try_update(|state| text.with_value(|t| state.begin(Some(t.as_str()))))
                .flatten()
            else {
                return;
            };

            leptos::task::spawn_local(async move {
                let outcome = write_text(&ip).await;
                if let Err(e) = &outcome {
                    leptos::logging::warn!("Copy to clipboard failed: {}", e);
                }

                let Some(ticket) = set_copy_state.try_update(|state| state.finish(outcome)).flatten() else {
                    return;
                };

                // Replaces (and cancels) any previous revert
                revert_timer.try_update_value(|timer| {
                    timer.arm(&BrowserTimers, CONFIG.copy_reset_delay_ms, move || {
                        set_copy_state.try_update(|state| state.revert(ticket));
                    });
                });
            });
        }
    };
    #[cfg(not(feature = "csr"))]
    let on_click = {
        let _ = text;
        move |_: leptos::ev::MouseEvent| {}
    };

    let copied = move || copy_state.with(CopyState::just_copied);

    view! {
        <button
            type="button"
            on:click=on_click
            class="relative p-2 rounded-full bg-gray-700 hover:bg-cyan-500 text-gray-300 hover:text-white focus:outline-none focus:ring-2 focus:ring-cyan-400 focus:ring-opacity-75 transition-colors duration-200"
            aria-label=move || if copied() { messages.copied } else { messages.copy_ip }
        >
            {move || {
                if copied() {
                    view! { <CheckIcon class="w-6 h-6 text-green-400" /> }.into_any()
                } else {
                    view! { <CopyIcon class="w-6 h-6" /> }.into_any()
                }
            }}
        </button>
    }
}
