//! Public project list and detail pages.
//!
//! Content is fetched client-side after hydration. A failed list fetch
//! renders as an empty list; a detail key that resolves neither as slug nor
//! as id renders the not-found view.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::not_found::NotFound;
use crate::net::api;
use crate::net::types::Project;

pub(crate) fn description_or_default(project: &Project) -> &str {
    project
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or("No description available.")
}

/// External link targets that are actually set.
pub(crate) fn external_link(url: Option<&str>) -> Option<String> {
    url.map(|u| u.trim().to_owned()).filter(|u| !u.is_empty())
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let projects = LocalResource::new(|| async {
        api::list_projects().await.unwrap_or_else(|e| {
            log::warn!("project list unavailable: {}", e.message);
            Vec::new()
        })
    });

    view! {
        <main class="content-page">
            <section class="content-page__hero">
                <h1>"My Projects"</h1>
                <p>
                    "A curated selection of my featured works, from frontend experiences to full-stack applications."
                </p>
            </section>
            <Suspense fallback=move || view! { <p class="loading">"Loading projects..."</p> }>
                {move || {
                    projects
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! { <p class="empty">"No projects available yet. Check back soon!"</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="card-grid">
                                        {list
                                            .into_iter()
                                            .map(|project| view! { <ProjectCard project=project/> })
                                            .collect_view()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </main>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let href = project.href();
    let live = external_link(project.live_url.as_deref());
    let thumbnail = project.thumbnail.clone().filter(|t| !t.is_empty());
    let description = description_or_default(&project).to_owned();

    view! {
        <div class="card card--project">
            {match thumbnail {
                Some(src) => {
                    view! {
                        <a href=href.clone() class="card__thumb">
                            <img src=src alt=project.title.clone()/>
                        </a>
                    }
                        .into_any()
                }
                None => view! { <div class="card__thumb card__thumb--empty">"No Image"</div> }.into_any(),
            }}
            <div class="card__body">
                <h3 class="card__title">
                    <a href=href.clone()>{project.title.clone()}</a>
                </h3>
                <p class="card__text">{description}</p>
                <div class="card__actions">
                    <a href=href class="link">"View Details"</a>
                    {live
                        .map(|url| {
                            view! {
                                <a href=url target="_blank" rel="noopener noreferrer" class="link link--accent">
                                    "Live Demo"
                                </a>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let params = use_params_map();
    let project = LocalResource::new(move || {
        let key = params.read().get("slug").unwrap_or_default();
        async move { api::find_project(&key).await }
    });

    view! {
        <Suspense fallback=move || view! { <p class="loading">"Loading project..."</p> }>
            {move || {
                project
                    .get()
                    .map(|found| match found {
                        Some(project) => view! { <ProjectDetail project=project/> }.into_any(),
                        None => {
                            view! { <NotFound title="Project not found" back_href="/projects"/> }.into_any()
                        }
                    })
            }}
        </Suspense>
    }
}

#[component]
fn ProjectDetail(project: Project) -> impl IntoView {
    let github = external_link(project.github_url.as_deref());
    let live = external_link(project.live_url.as_deref());
    let content = project.content.clone().unwrap_or_default();
    let stack = project.tech_stack.clone();

    view! {
        <main class="content-page">
            <header class="content-page__hero">
                <h1>{project.title.clone()}</h1>
                <p>"A closer look at one of my featured works"</p>
                <ul class="tags">
                    {stack.into_iter().map(|tech| view! { <li class="tag">{tech}</li> }).collect_view()}
                </ul>
            </header>
            <article class="prose" inner_html=content></article>
            <section class="content-page__links">
                {github
                    .map(|url| {
                        view! {
                            <a href=url target="_blank" rel="noopener noreferrer" class="btn btn--ghost">
                                "View on GitHub"
                            </a>
                        }
                    })}
                {live
                    .map(|url| {
                        view! {
                            <a href=url target="_blank" rel="noopener noreferrer" class="btn btn--primary">
                                "View Live Demo"
                            </a>
                        }
                    })}
            </section>
        </main>
    }
}
