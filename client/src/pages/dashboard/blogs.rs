//! Dashboard screens for blog posts: list, create, edit, delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached only with a session on full page loads (the edge gate redirects
//! otherwise). Router navigations without a local token are sent to the login
//! page by `use_session_guard`. Every call goes through `net::api`, which attaches the bearer
//! token; an expired token surfaces as an error toast, not a redirect.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::outcome::{ContentAction, ContentKind, failure_message, report};
use crate::auth::guard::use_session_guard;
use crate::components::editor::Editor;
use crate::components::field::{FieldError, TextAreaField, TextField, field_error};
use crate::forms::FieldErrors;
use crate::forms::content::PostForm;
use crate::net::api;
use crate::net::types::Post;
use crate::state::toast::{ToastState, toast_error};
use crate::util::browser;

const KIND: ContentKind = ContentKind::Blog;

#[component]
pub fn DashboardBlogsPage() -> impl IntoView {
    use_session_guard();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let posts = LocalResource::new(move || async move {
        match api::list_posts().await {
            Ok(list) => list,
            Err(e) => {
                toast_error(toasts, failure_message(KIND, ContentAction::LoadList, &e));
                Vec::new()
            }
        }
    });

    view! {
        <main class="dashboard-list">
            <header class="dashboard-list__header">
                <div>
                    <h1>"Manage Blogs"</h1>
                    <p>"View, edit, and organize your blog posts."</p>
                </div>
                <a class="btn btn--primary" href=KIND.new_href()>"New Blog"</a>
            </header>
            <Suspense fallback=move || view! { <p class="loading">"Loading blogs..."</p> }>
                {move || {
                    posts
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! {
                                    <p class="empty">
                                        "No blogs found. Click "
                                        <a href=KIND.new_href()>"New Blog"</a>
                                        " to add your first one!"
                                    </p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="card-grid">
                                        {list.into_iter().map(|post| view! { <BlogRow post=post/> }).collect_view()}
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
fn BlogRow(post: Post) -> impl IntoView {
    view! {
        <div class="card">
            <h3 class="card__title">{post.title.clone()}</h3>
            <p class="card__meta">"ID: " {post.slug_or_id().to_owned()}</p>
            <div class="card__actions">
                <a class="btn btn--ghost" href=post.href()>"View"</a>
                <a class="btn btn--primary" href=post.edit_href()>"Edit"</a>
            </div>
        </div>
    }
}

#[component]
pub fn NewBlogPage() -> impl IntoView {
    view! { <BlogEditor post_id=Signal::derive(|| None)/> }
}

#[component]
pub fn EditBlogPage() -> impl IntoView {
    let params = use_params_map();
    let post_id = Signal::derive(move || params.read().get("id"));
    view! { <BlogEditor post_id=post_id/> }
}

/// Shared create/edit form. `post_id = None` creates.
#[component]
fn BlogEditor(post_id: Signal<Option<String>>) -> impl IntoView {
    use_session_guard();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let slug = RwSignal::new(String::new());
    let excerpt = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    let fill = move |form: PostForm| {
        title.set(form.title);
        slug.set(form.slug);
        excerpt.set(form.excerpt);
        content.set(form.content);
    };

    Effect::new(move |_| {
        let Some(id) = post_id.get() else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::fetch_post(&id).await {
                Ok(post) => fill(PostForm::from_post(&post)),
                Err(e) => toast_error(toasts, failure_message(KIND, ContentAction::Load, &e)),
            }
        });
    });

    let navigate_submit = navigate.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = PostForm {
            title: title.get_untracked(),
            slug: slug.get_untracked(),
            excerpt: excerpt.get_untracked(),
            content: content.get_untracked(),
        };
        let draft = match form.validate() {
            Ok(draft) => draft,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::new());
        busy.set(true);

        let id = post_id.get_untracked();
        let navigate = navigate_submit.clone();
        leptos::task::spawn_local(async move {
            let (action, result) = match id {
                Some(id) => (ContentAction::Update, api::update_post(&id, &draft).await),
                None => (ContentAction::Create, api::create_post(&draft).await),
            };
            report(KIND, toasts, action, result, &navigate);
            busy.set(false);
        });
    };

    let on_delete = move |_| {
        let Some(id) = post_id.get_untracked() else {
            return;
        };
        if !browser::confirm(&KIND.delete_prompt()) {
            return;
        }
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = api::delete_post(&id).await;
            report(KIND, toasts, ContentAction::Delete, result, &navigate);
            busy.set(false);
        });
    };

    let is_edit = move || post_id.get().is_some();
    let content_error = field_error(errors, "content");

    view! {
        <main class="editor-page">
            <header class="editor-page__header">
                <h1>{move || if is_edit() { "Edit Blog" } else { "Create New Blog" }}</h1>
                <Show when=is_edit>
                    <button type="button" class="btn btn--danger" on:click=on_delete.clone()>
                        "Delete Blog"
                    </button>
                </Show>
            </header>
            <form class="editor-page__form" on:submit=on_submit>
                <TextField label="Title" name="title" value=title errors=errors/>
                <TextField label="Slug" name="slug" value=slug errors=errors placeholder="my-first-post"/>
                <TextAreaField label="Excerpt" name="excerpt" value=excerpt errors=errors/>
                <div class="field">
                    <span class="field__label">"Content"</span>
                    <Editor
                        value=content
                        on_change=Callback::new(move |html: String| content.set(html))
                        placeholder="Write your story..."
                    />
                    <FieldError message=Signal::derive(content_error)/>
                </div>
                <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else if is_edit() { "Update Blog" } else { "Create Blog" }}
                </button>
            </form>
        </main>
    }
}
