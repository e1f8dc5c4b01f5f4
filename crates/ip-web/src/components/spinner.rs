use leptos::prelude::*;

/// Spinning ring shown while the lookup is in flight
#[component]
pub fn Spinner(label: &'static str) -> impl IntoView {
    view! {
        <div class="flex justify-center items-center" role="status" aria-label=label>
            <div class="animate-spin rounded-full h-12 w-12 border-t-2 border-b-2 border-cyan-400"></div>
        </div>
    }
}
