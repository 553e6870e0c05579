//! The posts list view.
//!
//! # Design
//! The view owns a single state cell, [`PostsState`]. On its first mount it
//! emits one `GET /v1/posts` request; later mounts of the same instance emit
//! nothing. The completion either replaces the post collection wholesale or
//! goes through the [`FetchFailurePolicy`], which never touches the
//! collection. Until a completion arrives the view renders its empty state.

use maud::{html, Markup};
use tracing::debug;

use crate::client::PostsClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::policy::FetchFailurePolicy;
use crate::types::Post;

/// Everything the posts view renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostsState {
    pub posts: Vec<Post>,
    /// Only ever set under [`FetchFailurePolicy::Surface`].
    pub error: Option<String>,
}

#[derive(Debug, Default)]
pub struct PostsView {
    state: PostsState,
    request_url: Option<String>,
}

impl PostsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the request to run, the first time only.
    pub fn on_mount(&mut self, client: &PostsClient) -> Option<HttpRequest> {
        if self.request_url.is_some() {
            return None;
        }
        let request = client.build_list_posts();
        debug!(url = %request.url, "posts view mounted, fetching");
        self.request_url = Some(request.url.clone());
        Some(request)
    }

    /// Apply the completion of the request returned by [`Self::on_mount`].
    pub fn on_fetch_complete(
        &mut self,
        client: &PostsClient,
        policy: FetchFailurePolicy,
        result: Result<HttpResponse, ApiError>,
    ) {
        match result.and_then(|response| client.parse_list_posts(response)) {
            Ok(posts) => {
                self.state = PostsState { posts, error: None };
            }
            Err(err) => {
                let url = self.request_url.as_deref().unwrap_or_default();
                if let Some(message) = policy.handle(url, &err) {
                    self.state.error = Some(message);
                }
            }
        }
    }

    pub fn state(&self) -> &PostsState {
        &self.state
    }

    pub fn posts(&self) -> &[Post] {
        &self.state.posts
    }

    pub fn render(&self) -> Markup {
        html! {
            div.posts {
                div.row."mb-3" {
                    div."col-md-12"."text-md-center" {
                        h2."text-poppins"."font-weight-bold" { "Posts" }
                    }
                }
                @if let Some(error) = &self.state.error {
                    div.alert."alert-danger" role="alert" { (error) }
                }
                div.row."justify-content-center" {
                    @for post in &self.state.posts {
                        (render_card(post))
                    }
                }
            }
        }
    }
}

fn render_card(post: &Post) -> Markup {
    html! {
        div."col-md-8" {
            div.card."card-outline"."translate-up"."mb-3" {
                div."card-body" {
                    h5."card-title" { "#" strong."text-primary" { (post.post_id.to_string()) } }
                    h6."body-1"."text-muted" { (post.content.to_string()) }
                }
                div."card-footer"."text-right" {
                    h6."subtitle-1"."text-muted" { (post.created_at.to_string()) }
                }
            }
        }
    }
}
