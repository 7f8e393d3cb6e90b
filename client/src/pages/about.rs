use leptos::prelude::*;

const SKILLS: [&str; 6] = ["Rust", "TypeScript", "React", "Next.js", "Node.js", "PostgreSQL"];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <main class="content-page content-page--narrow">
            <section class="content-page__hero">
                <h1>"About Me"</h1>
                <p>"Developer focused on clean code, good UX, and performance."</p>
            </section>
            <section class="prose">
                <h2>"My Journey"</h2>
                <p>
                    "I build web products end to end, from the interface down to the API, and I care most about how they feel to use."
                </p>
            </section>
            <section>
                <h2>"Skills"</h2>
                <ul class="tags">
                    {SKILLS.iter().map(|&skill| view! { <li class="tag">{skill}</li> }).collect_view()}
                </ul>
            </section>
        </main>
    }
}
