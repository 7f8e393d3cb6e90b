//! Blog post and project editor forms.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use super::FieldErrors;
use super::rules::{char_len, is_optional_url, is_url_safe_slug, join_tech_stack, parse_tech_stack};
use crate::net::types::{Post, PostDraft, Project, ProjectDraft};

const TITLE_MESSAGE: &str = "Title must be at least 3 characters";
const SLUG_LEN_MESSAGE: &str = "Slug must be at least 3 characters";
const SLUG_CHARS_MESSAGE: &str = "Slug must be URL-safe (letters, numbers, hyphen)";
const CONTENT_MESSAGE: &str = "Content is required";
const URL_MESSAGE: &str = "Must be a valid URL";

fn check_title_and_slug(errors: &mut FieldErrors, title: &str, slug: &str) {
    errors.check(char_len(title) < 3, "title", TITLE_MESSAGE);
    errors.check(char_len(slug) < 3, "slug", SLUG_LEN_MESSAGE);
    errors.check(!is_url_safe_slug(slug), "slug", SLUG_CHARS_MESSAGE);
}

/// Editor markup counts as empty when it has no text and no media.
fn is_blank_markup(html: &str) -> bool {
    let trimmed = html.trim();
    trimmed.is_empty() || matches!(trimmed, "<br>" | "<p><br></p>" | "<div><br></div>")
}

// =============================================================================
// POST
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    /// HTML emitted by the editor.
    pub content: String,
}

impl PostForm {
    /// Pre-fill from an existing post.
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            slug: post.slug.clone().unwrap_or_default(),
            excerpt: post.excerpt.clone().unwrap_or_default(),
            content: post.content.clone().unwrap_or_default(),
        }
    }

    /// # Errors
    ///
    /// Returns per-field messages for title, slug, and content.
    pub fn validate(&self) -> Result<PostDraft, FieldErrors> {
        let title = self.title.trim();
        let slug = self.slug.trim();
        let mut errors = FieldErrors::new();
        check_title_and_slug(&mut errors, title, slug);
        errors.check(is_blank_markup(&self.content), "content", CONTENT_MESSAGE);
        errors.into_result(PostDraft {
            title: title.to_owned(),
            slug: slug.to_owned(),
            excerpt: Some(self.excerpt.trim().to_owned()).filter(|e| !e.is_empty()),
            content: self.content.clone(),
        })
    }
}

// =============================================================================
// PROJECT
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectForm {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content: String,
    pub thumbnail: String,
    pub live_url: String,
    pub github_url: String,
    /// Comma-separated.
    pub tech_stack: String,
    pub is_featured: bool,
    /// Raw number input.
    pub order: String,
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            slug: String::new(),
            description: String::new(),
            content: String::new(),
            thumbnail: String::new(),
            live_url: String::new(),
            github_url: String::new(),
            tech_stack: String::new(),
            is_featured: false,
            order: "0".to_owned(),
        }
    }
}

impl ProjectForm {
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            slug: project.slug.clone().unwrap_or_default(),
            description: project.description.clone().unwrap_or_default(),
            content: project.content.clone().unwrap_or_default(),
            thumbnail: project.thumbnail.clone().unwrap_or_default(),
            live_url: project.live_url.clone().unwrap_or_default(),
            github_url: project.github_url.clone().unwrap_or_default(),
            tech_stack: join_tech_stack(&project.tech_stack),
            is_featured: project.is_featured,
            order: project.order.to_string(),
        }
    }

    /// # Errors
    ///
    /// Returns per-field messages for text fields, URLs, and order.
    pub fn validate(&self) -> Result<ProjectDraft, FieldErrors> {
        let title = self.title.trim();
        let slug = self.slug.trim();
        let thumbnail = self.thumbnail.trim();
        let live_url = self.live_url.trim();
        let github_url = self.github_url.trim();

        let mut errors = FieldErrors::new();
        check_title_and_slug(&mut errors, title, slug);
        errors.check(self.description.trim().is_empty(), "description", "Description is required");
        errors.check(is_blank_markup(&self.content), "content", CONTENT_MESSAGE);
        errors.check(!is_optional_url(thumbnail), "thumbnail", URL_MESSAGE);
        errors.check(!is_optional_url(live_url), "liveUrl", URL_MESSAGE);
        errors.check(!is_optional_url(github_url), "githubUrl", URL_MESSAGE);

        let order = match parse_order(&self.order) {
            Ok(order) => order,
            Err(message) => {
                errors.add("order", message);
                0
            }
        };

        errors.into_result(ProjectDraft {
            title: title.to_owned(),
            slug: slug.to_owned(),
            description: self.description.trim().to_owned(),
            content: self.content.clone(),
            thumbnail: thumbnail.to_owned(),
            live_url: live_url.to_owned(),
            github_url: github_url.to_owned(),
            tech_stack: parse_tech_stack(&self.tech_stack),
            is_featured: self.is_featured,
            order,
        })
    }
}

/// Blank means 0; otherwise a non-negative integer.
fn parse_order(raw: &str) -> Result<i64, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    let order: i64 = raw.parse().map_err(|_| "Order must be a whole number")?;
    if order < 0 {
        return Err("Order must be 0 or greater");
    }
    Ok(order)
}
