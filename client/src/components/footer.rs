use leptos::prelude::*;

use super::navbar::SITE_LINKS;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <nav class="footer__links">
                {SITE_LINKS
                    .iter()
                    .map(|&(label, href)| view! { <a href=href>{label}</a> })
                    .collect_view()}
            </nav>
            <p class="footer__note">"Built with Leptos and axum."</p>
        </footer>
    }
}
