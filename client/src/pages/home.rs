//! Landing page.

use leptos::prelude::*;

const SERVICES: [(&str, &str); 4] = [
    ("UI/UX", "Clean, modern interfaces"),
    ("Frontend", "Reactive, accessible web apps"),
    ("Backend", "APIs & integrations"),
    ("Optimization", "Performance & SEO"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home">
            <section class="home__hero">
                <h1>"Build " <span class="accent">"beautiful"</span> ", launch " <span class="accent">"faster"</span> "."</h1>
                <p>"Full-stack developer creating performant, aesthetic, and reliable digital products."</p>
                <div class="home__actions">
                    <a class="btn btn--primary" href="/projects">"View Projects →"</a>
                    <a class="btn btn--ghost" href="/blogs">"Read the Blog"</a>
                </div>
            </section>
            <section class="home__services">
                <h2>"What I Do"</h2>
                <div class="card-grid">
                    {SERVICES
                        .iter()
                        .map(|&(title, desc)| {
                            view! {
                                <div class="card">
                                    <h3 class="card__title">{title}</h3>
                                    <p class="card__text">{desc}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <section class="cta">
                <h3>"Ready to start your project?"</h3>
                <a class="btn btn--light" href="/about">"About Me"</a>
            </section>
        </main>
    }
}
