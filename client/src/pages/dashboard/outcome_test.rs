use super::*;

#[test]
fn success_messages_name_the_kind() {
    assert_eq!(success_message(ContentKind::Blog, ContentAction::Create).as_deref(), Some("Blog created"));
    assert_eq!(success_message(ContentKind::Project, ContentAction::Update).as_deref(), Some("Project updated"));
    assert_eq!(success_message(ContentKind::Project, ContentAction::Delete).as_deref(), Some("Project deleted"));
}

#[test]
fn loads_have_no_success_toast() {
    assert_eq!(success_message(ContentKind::Blog, ContentAction::Load), None);
    assert_eq!(success_message(ContentKind::Blog, ContentAction::LoadList), None);
}

#[test]
fn fallbacks_match_operation() {
    assert_eq!(failure_fallback(ContentKind::Blog, ContentAction::LoadList), "Failed to load blogs");
    assert_eq!(failure_fallback(ContentKind::Project, ContentAction::Load), "Failed to load project");
    assert_eq!(failure_fallback(ContentKind::Blog, ContentAction::Delete), "Failed to delete blog");
}

#[test]
fn failure_prefers_api_message() {
    let err = ApiError::from_response(500, Some(serde_json::json!({ "message": "Slug taken" })));
    assert_eq!(failure_message(ContentKind::Blog, ContentAction::Create, &err), "Slug taken");

    let blank = ApiError::local("  ");
    assert_eq!(failure_message(ContentKind::Project, ContentAction::Create, &blank), "Failed to create project");
}

#[test]
fn navigation_targets() {
    assert_eq!(ContentKind::Blog.list_href(), "/dashboard/blogs");
    assert_eq!(ContentKind::Project.new_href(), "/dashboard/projects/new");
    assert_eq!(ContentKind::Blog.delete_prompt(), "Are you sure you want to delete this blog?");
}

#[test]
fn report_success_toasts_and_returns_to_list() {
    let owner = leptos::reactive::owner::Owner::new();
    owner.with(|| {
        let toasts = RwSignal::new(ToastState::default());
        let visited = std::cell::RefCell::new(Vec::new());
        let navigate = |href: &str, _: NavigateOptions| visited.borrow_mut().push(href.to_owned());

        report(ContentKind::Project, toasts, ContentAction::Create, Ok(()), &navigate);

        assert_eq!(visited.borrow().as_slice(), ["/dashboard/projects"]);
        assert_eq!(toasts.get_untracked().toasts[0].message, "Project created");
    });
}

#[test]
fn report_failure_stays_on_page() {
    let owner = leptos::reactive::owner::Owner::new();
    owner.with(|| {
        let toasts = RwSignal::new(ToastState::default());
        let visited = std::cell::RefCell::new(Vec::<String>::new());
        let navigate = |href: &str, _: NavigateOptions| visited.borrow_mut().push(href.to_owned());

        let err = ApiError::from_response(403, None);
        report(ContentKind::Blog, toasts, ContentAction::Delete, Err(err), &navigate);

        assert!(visited.borrow().is_empty());
        let toast = &toasts.get_untracked().toasts[0];
        assert_eq!(toast.kind, crate::state::toast::ToastKind::Error);
        assert_eq!(toast.message, "Request failed with status code 403");
    });
}
