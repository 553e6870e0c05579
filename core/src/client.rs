//! Stateless HTTP request builder and response parser for the posts API.
//!
//! # Design
//! `PostsClient` holds only a `base_url` and carries no mutable state between
//! calls. The list operation is split into `build_list_posts`, which produces
//! an `HttpRequest`, and `parse_list_posts`, which consumes an
//! `HttpResponse`. The host executes the round-trip in between.
//!
//! The status code is not checked up front: any body that carries the posts
//! envelope is accepted. It only shows up in the error when the body fails
//! to parse.

use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Post, ResponseEnvelope};

pub const POSTS_PATH: &str = "/v1/posts";

/// Synchronous, stateless client for the posts API.
#[derive(Debug, Clone)]
pub struct PostsClient {
    base_url: String,
}

impl PostsClient {
    /// The base URL is used exactly as resolved; only a trailing slash is
    /// dropped so the path joins cleanly.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_posts(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{POSTS_PATH}", self.base_url),
            headers: Vec::new(),
        }
    }

    pub fn parse_list_posts(&self, response: HttpResponse) -> Result<Vec<Post>, ApiError> {
        match serde_json::from_str::<ResponseEnvelope>(&response.body) {
            Ok(envelope) => {
                let posts = envelope.into_posts();
                debug!(count = posts.len(), status = response.status, "parsed posts envelope");
                Ok(posts)
            }
            Err(_) if !(200..300).contains(&response.status) => Err(ApiError::HttpError {
                status: response.status,
                body: response.body,
            }),
            Err(e) => Err(ApiError::DeserializationError(e.to_string())),
        }
    }
}
