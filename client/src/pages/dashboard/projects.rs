//! Dashboard screens for portfolio projects.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::outcome::{ContentAction, ContentKind, failure_message, report};
use crate::auth::guard::use_session_guard;
use crate::components::editor::Editor;
use crate::components::field::{FieldError, TextAreaField, TextField, field_error};
use crate::forms::FieldErrors;
use crate::forms::content::ProjectForm;
use crate::net::api;
use crate::net::types::Project;
use crate::state::toast::{ToastState, toast_error};
use crate::util::browser;

const KIND: ContentKind = ContentKind::Project;

#[component]
pub fn DashboardProjectsPage() -> impl IntoView {
    use_session_guard();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let projects = LocalResource::new(move || async move {
        match api::list_projects().await {
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
                    <h1>"Manage Projects"</h1>
                    <p>"Showcase and maintain your project portfolio."</p>
                </div>
                <a class="btn btn--primary" href=KIND.new_href()>"New Project"</a>
            </header>
            <Suspense fallback=move || view! { <p class="loading">"Loading projects..."</p> }>
                {move || {
                    projects
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! {
                                    <p class="empty">
                                        "No projects found. Click "
                                        <a href=KIND.new_href()>"New Project"</a>
                                        " to add your first one!"
                                    </p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="card-grid">
                                        {list
                                            .into_iter()
                                            .map(|project| view! { <ProjectRow project=project/> })
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
fn ProjectRow(project: Project) -> impl IntoView {
    let featured = project.is_featured;
    view! {
        <div class="card">
            <h3 class="card__title">
                {project.title.clone()}
                <Show when=move || featured>
                    <span class="badge">"Featured"</span>
                </Show>
            </h3>
            <p class="card__meta">"Order: " {project.order}</p>
            <div class="card__actions">
                <a class="btn btn--ghost" href=project.href()>"View"</a>
                <a class="btn btn--primary" href=project.edit_href()>"Edit"</a>
            </div>
        </div>
    }
}

#[component]
pub fn NewProjectPage() -> impl IntoView {
    view! { <ProjectEditor project_id=Signal::derive(|| None)/> }
}

#[component]
pub fn EditProjectPage() -> impl IntoView {
    let params = use_params_map();
    let project_id = Signal::derive(move || params.read().get("id"));
    view! { <ProjectEditor project_id=project_id/> }
}

/// Input signals mirroring [`ProjectForm`].
#[derive(Clone, Copy)]
struct ProjectFields {
    title: RwSignal<String>,
    slug: RwSignal<String>,
    description: RwSignal<String>,
    content: RwSignal<String>,
    thumbnail: RwSignal<String>,
    live_url: RwSignal<String>,
    github_url: RwSignal<String>,
    tech_stack: RwSignal<String>,
    is_featured: RwSignal<bool>,
    order: RwSignal<String>,
}

impl ProjectFields {
    fn new(form: ProjectForm) -> Self {
        Self {
            title: RwSignal::new(form.title),
            slug: RwSignal::new(form.slug),
            description: RwSignal::new(form.description),
            content: RwSignal::new(form.content),
            thumbnail: RwSignal::new(form.thumbnail),
            live_url: RwSignal::new(form.live_url),
            github_url: RwSignal::new(form.github_url),
            tech_stack: RwSignal::new(form.tech_stack),
            is_featured: RwSignal::new(form.is_featured),
            order: RwSignal::new(form.order),
        }
    }

    fn fill(self, form: ProjectForm) {
        self.title.set(form.title);
        self.slug.set(form.slug);
        self.description.set(form.description);
        self.content.set(form.content);
        self.thumbnail.set(form.thumbnail);
        self.live_url.set(form.live_url);
        self.github_url.set(form.github_url);
        self.tech_stack.set(form.tech_stack);
        self.is_featured.set(form.is_featured);
        self.order.set(form.order);
    }

    fn snapshot(self) -> ProjectForm {
        ProjectForm {
            title: self.title.get_untracked(),
            slug: self.slug.get_untracked(),
            description: self.description.get_untracked(),
            content: self.content.get_untracked(),
            thumbnail: self.thumbnail.get_untracked(),
            live_url: self.live_url.get_untracked(),
            github_url: self.github_url.get_untracked(),
            tech_stack: self.tech_stack.get_untracked(),
            is_featured: self.is_featured.get_untracked(),
            order: self.order.get_untracked(),
        }
    }
}

#[component]
fn ProjectEditor(project_id: Signal<Option<String>>) -> impl IntoView {
    use_session_guard();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let fields = ProjectFields::new(ProjectForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    Effect::new(move |_| {
        let Some(id) = project_id.get() else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::fetch_project(&id).await {
                Ok(project) => fields.fill(ProjectForm::from_project(&project)),
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
        let draft = match fields.snapshot().validate() {
            Ok(draft) => draft,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::new());
        busy.set(true);

        let id = project_id.get_untracked();
        let navigate = navigate_submit.clone();
        leptos::task::spawn_local(async move {
            let (action, result) = match id {
                Some(id) => (ContentAction::Update, api::update_project(&id, &draft).await),
                None => (ContentAction::Create, api::create_project(&draft).await),
            };
            report(KIND, toasts, action, result, &navigate);
            busy.set(false);
        });
    };

    let on_delete = move |_| {
        let Some(id) = project_id.get_untracked() else {
            return;
        };
        if !browser::confirm(&KIND.delete_prompt()) {
            return;
        }
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = api::delete_project(&id).await;
            report(KIND, toasts, ContentAction::Delete, result, &navigate);
            busy.set(false);
        });
    };

    let is_edit = move || project_id.get().is_some();
    let content_error = field_error(errors, "content");
    let order_error = field_error(errors, "order");

    view! {
        <main class="editor-page">
            <header class="editor-page__header">
                <h1>{move || if is_edit() { "Edit Project" } else { "Create New Project" }}</h1>
                <Show when=is_edit>
                    <button type="button" class="btn btn--danger" on:click=on_delete.clone()>
                        "Delete Project"
                    </button>
                </Show>
            </header>
            <form class="editor-page__form" on:submit=on_submit>
                <TextField label="Title" name="title" value=fields.title errors=errors/>
                <TextField label="Slug" name="slug" value=fields.slug errors=errors placeholder="my-project"/>
                <TextAreaField label="Description" name="description" value=fields.description errors=errors/>
                <div class="field">
                    <span class="field__label">"Content"</span>
                    <Editor
                        value=fields.content
                        on_change=Callback::new(move |html: String| fields.content.set(html))
                        placeholder="Describe the project..."
                    />
                    <FieldError message=Signal::derive(content_error)/>
                </div>
                <TextField
                    label="Thumbnail URL"
                    name="thumbnail"
                    value=fields.thumbnail
                    errors=errors
                    input_type="url"
                    placeholder="https://..."
                />
                <TextField label="Live URL" name="liveUrl" value=fields.live_url errors=errors input_type="url"/>
                <TextField label="GitHub URL" name="githubUrl" value=fields.github_url errors=errors input_type="url"/>
                <TextField
                    label="Tech stack"
                    name="techStack"
                    value=fields.tech_stack
                    errors=errors
                    placeholder="Rust, Leptos, axum"
                />
                <div class="field-row">
                    <label class="field field--inline">
                        <input
                            type="checkbox"
                            prop:checked=move || fields.is_featured.get()
                            on:change=move |ev| fields.is_featured.set(event_target_checked(&ev))
                        />
                        <span class="field__label">"Featured"</span>
                    </label>
                    <label class="field">
                        <span class="field__label">"Order"</span>
                        <input
                            class="field__input"
                            type="number"
                            min="0"
                            prop:value=move || fields.order.get()
                            on:input=move |ev| fields.order.set(event_target_value(&ev))
                        />
                        <FieldError message=Signal::derive(order_error)/>
                    </label>
                </div>
                <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                    {move || {
                        if busy.get() {
                            "Saving..."
                        } else if is_edit() {
                            "Update Project"
                        } else {
                            "Create Project"
                        }
                    }}
                </button>
            </form>
        </main>
    }
}
