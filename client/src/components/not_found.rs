//! Fallback view for unknown routes and missing content.
//!
//! Rendered on the server, it also marks the response as 404.

use leptos::prelude::*;

#[component]
pub fn NotFound(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] back_href: Option<String>,
) -> impl IntoView {
    let title = title.unwrap_or_else(|| "Page not found".to_owned());
    let back_href = back_href.unwrap_or_else(|| "/".to_owned());

    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <section class="not-found">
            <h1>{title}</h1>
            <p>"The page you are looking for does not exist or was moved."</p>
            <a class="btn btn--primary" href=back_href>"Go back"</a>
        </section>
    }
}
