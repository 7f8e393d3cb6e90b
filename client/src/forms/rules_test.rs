use super::*;

#[test]
fn email_accepts_common_addresses() {
    assert!(is_valid_email("a@b.com"));
    assert!(is_valid_email("first.last+tag@mail.example.org"));
    assert!(is_valid_email("o'neil@sub-domain.io"));
}

#[test]
fn email_rejects_malformed_addresses() {
    for bad in ["", "plain", "@b.com", "a@", "a@b", "a@@b.com", "a@b.c", "a@b.c0m", ".a@b.com", "a.@b.com", "a..b@c.com", "a b@c.com", "a@-b.com"] {
        assert!(!is_valid_email(bad), "expected {bad:?} to be rejected");
    }
}

#[test]
fn slug_allows_letters_digits_hyphen() {
    assert!(is_url_safe_slug("my-post-2"));
    assert!(is_url_safe_slug("MyPost"));
    assert!(!is_url_safe_slug("my post"));
    assert!(!is_url_safe_slug("my_post"));
    assert!(!is_url_safe_slug("post/1"));
    assert!(!is_url_safe_slug(""));
}

#[test]
fn url_requires_absolute_form() {
    assert!(is_valid_url("https://example.com"));
    assert!(is_valid_url("http://localhost:3000/x"));
    assert!(!is_valid_url("example.com"));
    assert!(!is_valid_url("/relative"));
}

#[test]
fn optional_url_accepts_empty() {
    assert!(is_optional_url(""));
    assert!(is_optional_url("https://github.com/a/b"));
    assert!(!is_optional_url("not a url"));
}

#[test]
fn tech_stack_round_trips_through_form_text() {
    let stack = parse_tech_stack(" Rust, Leptos,, axum ,");
    assert_eq!(stack, vec!["Rust", "Leptos", "axum"]);
    assert_eq!(join_tech_stack(&stack), "Rust, Leptos, axum");
    assert!(parse_tech_stack("").is_empty());
}

#[test]
fn char_len_counts_characters() {
    assert_eq!(char_len("héé"), 3);
}
