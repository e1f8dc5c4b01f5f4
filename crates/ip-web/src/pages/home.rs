use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::{ExternalLink, IpPanel};
use crate::config::CONFIG;
use crate::i18n::use_messages;

#[component]
pub fn HomePage() -> impl IntoView {
    let messages = use_messages();
    let attribution = &CONFIG.attribution;

    view! {
        <Title text=messages.title />
        <Meta name="description" content=messages.subtitle />

        <div class="min-h-screen bg-gray-900 text-white flex flex-col items-center justify-center p-4 font-sans antialiased">
            <div class="w-full max-w-md mx-auto bg-gray-800 rounded-2xl shadow-2xl shadow-cyan-500/10 p-8 transform transition-all hover:scale-105 duration-300">
                <header class="text-center mb-8">
                    <h1 class="text-3xl md:text-4xl font-bold text-cyan-400 tracking-wide">{messages.title}</h1>
                    <p class="text-gray-400 mt-2">{messages.subtitle}</p>
                </header>

                <IpPanel />

                <footer class="text-center mt-8">
                    <p class="text-xs text-gray-500">
                        {messages.data_by}
                        <ExternalLink link=attribution />
                    </p>
                </footer>
            </div>
        </div>
    }
}
