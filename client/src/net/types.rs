//! Wire types for the content API.
//!
//! DESIGN
//! ======
//! The backend speaks camelCase JSON and is loose about optional fields and
//! id representation, so deserialization defaults generously and accepts
//! numeric ids.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A blog post as returned by `/posts`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    /// HTML produced by the rich-text editor.
    #[serde(default)]
    pub content: Option<String>,
    /// ISO-8601 creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Post {
    /// Slug when set, otherwise the id.
    pub fn slug_or_id(&self) -> &str {
        slug_or_id(self.slug.as_deref(), &self.id)
    }

    /// Public detail page.
    pub fn href(&self) -> String {
        format!("/blogs/{}", self.slug_or_id())
    }

    /// Dashboard edit page.
    pub fn edit_href(&self) -> String {
        format!("/dashboard/blogs/{}", self.id)
    }
}

/// A portfolio project as returned by `/projects`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, deserialize_with = "deserialize_order")]
    pub order: i64,
}

impl Project {
    pub fn slug_or_id(&self) -> &str {
        slug_or_id(self.slug.as_deref(), &self.id)
    }

    pub fn href(&self) -> String {
        format!("/projects/{}", self.slug_or_id())
    }

    pub fn edit_href(&self) -> String {
        format!("/dashboard/projects/{}", self.id)
    }
}

fn slug_or_id<'a>(slug: Option<&'a str>, id: &'a str) -> &'a str {
    slug.filter(|s| !s.is_empty()).unwrap_or(id)
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /posts` and `PUT /posts/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub title: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    pub content: String,
}

/// Body of `POST /projects` and `PUT /projects/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content: String,
    pub thumbnail: String,
    pub live_url: String,
    pub github_url: String,
    pub tech_stack: Vec<String>,
    pub is_featured: bool,
    pub order: i64,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn deserialize_order<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .ok_or_else(|| D::Error::custom("order out of range")),
        serde_json::Value::String(s) => Ok(s.trim().parse().unwrap_or(0)),
        other => Err(D::Error::custom(format!("expected numeric order, got {other}"))),
    }
}
