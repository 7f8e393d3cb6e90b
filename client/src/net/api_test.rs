use super::*;

#[test]
fn post_paths_format_expected_routes() {
    assert_eq!(post_path("p1"), "/posts/p1");
    assert_eq!(post_slug_path("hello-world"), "/posts/slug/hello-world");
}

#[test]
fn project_paths_format_expected_routes() {
    assert_eq!(project_path("42"), "/projects/42");
    assert_eq!(project_slug_path("site"), "/projects/slug/site");
}

#[test]
fn paths_escape_reserved_characters() {
    assert_eq!(post_path("a/b"), "/posts/a%2Fb");
    assert_eq!(project_slug_path("x y"), "/projects/slug/x%20y");
}
