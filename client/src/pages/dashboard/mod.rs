//! Authenticated dashboard: overview plus blog and project management.

pub mod blogs;
pub mod outcome;
pub mod projects;

use leptos::prelude::*;

use crate::auth;

/// Overview with links to the content managers.
///
/// Shows an alert when no session is present. The edge gate normally prevents
/// that on full loads; the alert covers a token cleared after the page loaded.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = RwSignal::new(true);
    Effect::new(move |_| session.set(auth::has_session()));

    view! {
        <main class="dashboard">
            <section class="dashboard__hero">
                <h1>"Dashboard"</h1>
                <p>
                    "Manage your blogs and projects in one place. A simple and efficient control center for your portfolio."
                </p>
            </section>
            <Show when=move || !session.get()>
                <div class="alert alert--error" role="alert">
                    <p class="alert__title">"You are not authenticated."</p>
                    <p>"Please log in to manage your portfolio content."</p>
                </div>
            </Show>
            <section class="dashboard__cards">
                <a class="action-card" href="/dashboard/blogs">
                    <h3>"Manage Blogs"</h3>
                    <p>"Create, update, and organize your blog posts with ease."</p>
                </a>
                <a class="action-card" href="/dashboard/projects">
                    <h3>"Manage Projects"</h3>
                    <p>"Showcase and maintain your project portfolio."</p>
                </a>
            </section>
            <section class="cta">
                <h3>"Ready to grow your portfolio?"</h3>
                <a class="btn btn--light" href="/projects">"View Live Portfolio"</a>
            </section>
        </main>
    }
}
