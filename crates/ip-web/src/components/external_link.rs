use leptos::prelude::*;

use crate::config::Link;

/// Link that opens in a new tab without leaking the opener
#[component]
pub fn ExternalLink(link: &'static Link) -> impl IntoView {
    view! {
        <a
            href=link.href
            target="_blank"
            rel="noopener noreferrer"
            class="underline hover:text-cyan-400 transition-colors"
        >
            {link.label}
        </a>
    }
}
