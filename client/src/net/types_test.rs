use super::*;
use serde_json::json;

#[test]
fn post_deserializes_camel_case_fields() {
    let post: Post = serde_json::from_value(json!({
        "id": "p1",
        "title": "Hello",
        "slug": "hello",
        "excerpt": "short",
        "content": "<p>hi</p>",
        "createdAt": "2025-01-15T10:00:00.000Z"
    }))
    .unwrap();
    assert_eq!(post.id, "p1");
    assert_eq!(post.slug.as_deref(), Some("hello"));
    assert_eq!(post.created_at.as_deref(), Some("2025-01-15T10:00:00.000Z"));
}

#[test]
fn post_accepts_numeric_and_mongo_ids() {
    let post: Post = serde_json::from_value(json!({ "id": 42, "title": "x" })).unwrap();
    assert_eq!(post.id, "42");

    let post: Post = serde_json::from_value(json!({ "_id": "abc", "title": "x" })).unwrap();
    assert_eq!(post.id, "abc");
}

#[test]
fn post_rejects_object_id() {
    let result = serde_json::from_value::<Post>(json!({ "id": { "x": 1 } }));
    assert!(result.is_err());
}

#[test]
fn post_href_prefers_slug_then_id() {
    let mut post = Post { id: "7".to_owned(), slug: Some("my-post".to_owned()), ..Post::default() };
    assert_eq!(post.href(), "/blogs/my-post");

    post.slug = Some(String::new());
    assert_eq!(post.href(), "/blogs/7");

    post.slug = None;
    assert_eq!(post.href(), "/blogs/7");
    assert_eq!(post.edit_href(), "/dashboard/blogs/7");
}

#[test]
fn project_defaults_missing_fields() {
    let project: Project = serde_json::from_value(json!({ "id": "x", "title": "T" })).unwrap();
    assert!(project.tech_stack.is_empty());
    assert!(!project.is_featured);
    assert_eq!(project.order, 0);
    assert_eq!(project.live_url, None);
}

#[test]
fn project_deserializes_full_record() {
    let project: Project = serde_json::from_value(json!({
        "id": "x",
        "title": "T",
        "slug": "t",
        "liveUrl": "https://live.test",
        "githubUrl": "https://github.com/a/b",
        "techStack": ["Rust", "Leptos"],
        "isFeatured": true,
        "order": 3
    }))
    .unwrap();
    assert_eq!(project.live_url.as_deref(), Some("https://live.test"));
    assert_eq!(project.github_url.as_deref(), Some("https://github.com/a/b"));
    assert_eq!(project.tech_stack, vec!["Rust", "Leptos"]);
    assert!(project.is_featured);
    assert_eq!(project.order, 3);
    assert_eq!(project.href(), "/projects/t");
    assert_eq!(project.edit_href(), "/dashboard/projects/x");
}

#[test]
fn project_order_accepts_strings_and_null() {
    let project: Project = serde_json::from_value(json!({ "id": "x", "order": "5" })).unwrap();
    assert_eq!(project.order, 5);

    let project: Project = serde_json::from_value(json!({ "id": "x", "order": null })).unwrap();
    assert_eq!(project.order, 0);
}

#[test]
fn post_draft_omits_missing_excerpt() {
    let draft = PostDraft {
        title: "Title".to_owned(),
        slug: "title".to_owned(),
        excerpt: None,
        content: "<p>x</p>".to_owned(),
    };
    let value = serde_json::to_value(&draft).unwrap();
    assert_eq!(value, json!({ "title": "Title", "slug": "title", "content": "<p>x</p>" }));
}

#[test]
fn project_draft_serializes_camel_case() {
    let draft = ProjectDraft {
        live_url: "https://x.test".to_owned(),
        tech_stack: vec!["Rust".to_owned()],
        is_featured: true,
        ..ProjectDraft::default()
    };
    let value = serde_json::to_value(&draft).unwrap();
    assert_eq!(value["liveUrl"], "https://x.test");
    assert_eq!(value["techStack"], json!(["Rust"]));
    assert_eq!(value["isFeatured"], true);
    assert_eq!(value["githubUrl"], "");
}
