//! Domain DTOs for the posts API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! the integration tests catch schema drift between the two crates.
//!
//! Post fields are read optimistically. Whatever scalar the server sends is
//! kept as-is and shown in its text form, and a missing field shows as empty
//! text. The envelope nesting, on the other hand, is strict: a body without
//! `data.data.posts` does not deserialize.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A display-only value taken verbatim from the response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValue(pub Value);

impl FieldValue {
    pub fn is_missing(&self) -> bool {
        self.0.is_null()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::Null => Ok(()),
            Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue(Value::String(s.to_string()))
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue(Value::from(n))
    }
}

/// A single post as returned by `GET /v1/posts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub post_id: FieldValue,
    #[serde(default)]
    pub content: FieldValue,
    #[serde(default)]
    pub created_at: FieldValue,
}

/// Outer wrapper: `{ "message": ..., "data": <page> }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseEnvelope {
    pub data: PageEnvelope,
}

/// Pagination wrapper: `{ "current_page": ..., "data": <post list> }`.
#[derive(Debug, Clone, Deserialize)]
pub struct PageEnvelope {
    pub data: PostList,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostList {
    pub posts: Vec<Post>,
}

impl ResponseEnvelope {
    pub fn into_posts(self) -> Vec<Post> {
        self.data.data.posts
    }
}
