use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::i18n::Locale;
use crate::pages::HomePage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let messages = Locale::detect().messages();
    provide_context(messages);

    view! {
        <Router>
            <Routes fallback=move || view! { <p>{messages.not_found}</p> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}
