//! Content API operations: auth, posts, projects.
//!
//! Thin wrappers over [`super::http`]; every function returns the normalized
//! [`ApiError`] on failure.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::http::{self, ApiError, Method};
use super::types::{LoginRequest, Post, PostDraft, Project, ProjectDraft, RegisterRequest};

pub(crate) fn post_path(id: &str) -> String {
    format!("/posts/{}", urlencoding::encode(id))
}

pub(crate) fn post_slug_path(slug: &str) -> String {
    format!("/posts/slug/{}", urlencoding::encode(slug))
}

pub(crate) fn project_path(id: &str) -> String {
    format!("/projects/{}", urlencoding::encode(id))
}

pub(crate) fn project_slug_path(slug: &str) -> String {
    format!("/projects/slug/{}", urlencoding::encode(slug))
}

// =============================================================================
// AUTH
// =============================================================================

/// `POST /auth/login`. Returns the raw body, which should carry `token`.
///
/// # Errors
///
/// Returns the normalized [`ApiError`] on any failure.
pub async fn login(credentials: &LoginRequest) -> Result<Value, ApiError> {
    http::send_json(Method::Post, "/auth/login", credentials).await
}

/// `POST /auth/register`.
///
/// # Errors
///
/// Returns the normalized [`ApiError`] on any failure.
pub async fn register(account: &RegisterRequest) -> Result<(), ApiError> {
    http::send_json(Method::Post, "/auth/register", account).await.map(drop)
}

// =============================================================================
// POSTS
// =============================================================================

/// `GET /posts`.
///
/// # Errors
///
/// Returns the normalized [`ApiError`] on any failure.
pub async fn list_posts() -> Result<Vec<Post>, ApiError> {
    let body = http::request(Method::Get, "/posts", None).await?;
    if body.is_null() {
        return Ok(Vec::new());
    }
    http::decode(body)
}

/// `GET /posts/{id}`.
///
/// # Errors
///
/// Returns the normalized [`ApiError`] on any failure.
pub async fn fetch_post(id: &str) -> Result<Post, ApiError> {
    http::get_json(&post_path(id)).await
}

/// Public lookup: `GET /posts/slug/{key}`, then `GET /posts/{key}`.
/// Returns `None` when neither resolves.
pub async fn find_post(slug_or_id: &str) -> Option<Post> {
    match http::get_json::<Post>(&post_slug_path(slug_or_id)).await {
        Ok(post) => Some(post),
        Err(_) => fetch_post(slug_or_id).await.ok(),
    }
}

/// `POST /posts`.
///
/// # Errors
///
/// Returns the normalized [`ApiError`] on any failure.
pub async fn create_post(draft: &PostDraft) -> Result<(), ApiError> {
    http::send_json(Method::Post, "/posts", draft).await.map(drop)
}

/// `PUT /posts/{id}`.
///
/// # Errors
///
/// Returns the normalized [`ApiError`] on any failure.
pub async fn update_post(id: &str, draft: &PostDraft) -> Result<(), ApiError> {
    http::send_json(Method::Put, &post_path(id), draft).await.map(drop)
}

/// `DELETE /posts/{id}`.
///
/// # Errors
///
/// Returns the normalized [`ApiError`] on any failure.
pub async fn delete_post(id: &str) -> Result<(), ApiError> {
    http::request(Method::Delete, &post_path(id), None).await.map(drop)
}

// =============================================================================
// PROJECTS
// =============================================================================

/// `GET /projects`.
///
/// # Errors
///
/// Returns the normalized [`ApiError`] on any failure.
pub async fn list_projects() -> Result<Vec<Project>, ApiError> {
    let body = http::request(Method::Get, "/projects", None).await?;
    if body.is_null() {
        return Ok(Vec::new());
    }
    http::decode(body)
}

/// `GET /projects/{id}`.
///
/// # Errors
///
/// Returns the normalized [`ApiError`] on any failure.
pub async fn fetch_project(id: &str) -> Result<Project, ApiError> {
    http::get_json(&project_path(id)).await
}

/// Public lookup by slug, falling back to id.
pub async fn find_project(slug_or_id: &str) -> Option<Project> {
    match http::get_json::<Project>(&project_slug_path(slug_or_id)).await {
        Ok(project) => Some(project),
        Err(_) => fetch_project(slug_or_id).await.ok(),
    }
}

/// `POST /projects`.
///
/// # Errors
///
/// Returns the normalized [`ApiError`] on any failure.
pub async fn create_project(draft: &ProjectDraft) -> Result<(), ApiError> {
    http::send_json(Method::Post, "/projects", draft).await.map(drop)
}

/// `PUT /projects/{id}`.
///
/// # Errors
///
/// Returns the normalized [`ApiError`] on any failure.
pub async fn update_project(id: &str, draft: &ProjectDraft) -> Result<(), ApiError> {
    http::send_json(Method::Put, &project_path(id), draft).await.map(drop)
}

/// `DELETE /projects/{id}`.
///
/// # Errors
///
/// Returns the normalized [`ApiError`] on any failure.
pub async fn delete_project(id: &str) -> Result<(), ApiError> {
    http::request(Method::Delete, &project_path(id), None).await.map(drop)
}
