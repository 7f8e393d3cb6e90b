//! Public blog list and article pages.

#[cfg(test)]
#[path = "blogs_test.rs"]
mod blogs_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::not_found::NotFound;
use crate::net::api;
use crate::net::types::Post;
use crate::util::dates::{long_date, short_date};

/// List-card date, `Mon D, YYYY`.
pub(crate) fn card_date(post: &Post) -> Option<String> {
    post.created_at.as_deref().filter(|d| !d.is_empty()).map(short_date)
}

/// Article header date, `Month D, YYYY`.
pub(crate) fn article_date(post: &Post) -> Option<String> {
    post.created_at.as_deref().filter(|d| !d.is_empty()).map(long_date)
}

#[component]
pub fn BlogsPage() -> impl IntoView {
    let posts = LocalResource::new(|| async {
        api::list_posts().await.unwrap_or_else(|e| {
            log::warn!("post list unavailable: {}", e.message);
            Vec::new()
        })
    });

    view! {
        <main class="content-page">
            <section class="content-page__hero">
                <h1>"Blog"</h1>
                <p>"Notes, guides, and stories from building for the web."</p>
            </section>
            <Suspense fallback=move || view! { <p class="loading">"Loading posts..."</p> }>
                {move || {
                    posts
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! { <p class="empty">"No blog posts yet. Check back soon!"</p> }.into_any()
                            } else {
                                view! {
                                    <div class="card-grid">
                                        {list.into_iter().map(|post| view! { <BlogCard post=post/> }).collect_view()}
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
fn BlogCard(post: Post) -> impl IntoView {
    let href = post.href();
    let date = card_date(&post);
    view! {
        <article class="card card--post">
            {date.map(|d| view! { <p class="card__meta">{d}</p> })}
            <h3 class="card__title">
                <a href=href.clone()>{post.title.clone()}</a>
            </h3>
            {post.excerpt.clone().filter(|e| !e.is_empty()).map(|e| view! { <p class="card__text">{e}</p> })}
            <a href=href class="link">"Read more →"</a>
        </article>
    }
}

#[component]
pub fn BlogDetailPage() -> impl IntoView {
    let params = use_params_map();
    let post = LocalResource::new(move || {
        let key = params.read().get("slug").unwrap_or_default();
        async move { api::find_post(&key).await }
    });

    view! {
        <Suspense fallback=move || view! { <p class="loading">"Loading post..."</p> }>
            {move || {
                post.get()
                    .map(|found| match found {
                        Some(post) => view! { <BlogArticle post=post/> }.into_any(),
                        None => view! { <NotFound title="Post not found" back_href="/blogs"/> }.into_any(),
                    })
            }}
        </Suspense>
    }
}

#[component]
fn BlogArticle(post: Post) -> impl IntoView {
    let date = article_date(&post);
    let excerpt = post.excerpt.clone().filter(|e| !e.is_empty());
    let content = post.content.clone().unwrap_or_default();

    view! {
        <main class="content-page content-page--narrow">
            <header class="content-page__hero">
                <h1>{post.title.clone()}</h1>
                {excerpt.map(|e| view! { <p class="lead">{e}</p> })}
                {date.map(|d| view! { <p class="meta">{d}</p> })}
            </header>
            <article class="prose" inner_html=content></article>
            <section class="cta">
                <h3>"Enjoyed this article?"</h3>
                <a class="btn btn--light" href="/blogs">"More posts"</a>
            </section>
        </main>
    }
}
