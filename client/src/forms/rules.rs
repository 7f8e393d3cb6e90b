//! Field-level rules shared by the forms.

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

/// Practical email check: one `@`, dotted domain, alphabetic TLD.
pub fn is_valid_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if domain.contains('@') || local.is_empty() {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    let local_ok = local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '\'' | '+' | '-'));
    if !local_ok {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let labels_ok = labels.iter().all(|label| {
        label.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    let tld_ok = labels
        .last()
        .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()));
    labels_ok && tld_ok
}

/// Letters, digits, and hyphens only.
pub fn is_url_safe_slug(raw: &str) -> bool {
    !raw.is_empty() && raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Absolute URL parseable by the `url` crate.
pub fn is_valid_url(raw: &str) -> bool {
    url::Url::parse(raw).is_ok()
}

/// Empty, or a valid absolute URL.
pub fn is_optional_url(raw: &str) -> bool {
    raw.is_empty() || is_valid_url(raw)
}

/// Split `"Rust, Leptos,,  axum"` into trimmed, non-empty entries.
pub fn parse_tech_stack(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Inverse of [`parse_tech_stack`] for pre-filling the edit form.
pub fn join_tech_stack(stack: &[String]) -> String {
    stack.join(", ")
}

/// Character count, not byte length.
pub fn char_len(raw: &str) -> usize {
    raw.chars().count()
}
