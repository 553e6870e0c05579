//! In-memory stand-in for the posts API.
//!
//! Serves the same envelopes as the production service so the front-end can
//! run and be tested without a database: `GET /v1/posts` (paginated),
//! `POST /v1/posts` and `GET /health`.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use uuid::Uuid;

pub const DEFAULT_LIMIT: usize = 10;
pub const DEFAULT_PAGE: usize = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub post_id: String,
    pub content: String,
    pub created_at: String,
}

impl Post {
    pub fn new(content: &str) -> Self {
        Self {
            post_id: Uuid::new_v4().to_string(),
            content: content.to_string(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatePost {
    #[serde(default)]
    pub content: String,
}

/// `{ "message": ..., "data": ... }`; an empty message is omitted.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    pub data: T,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Page {
    pub current_page: usize,
    pub total_rows: usize,
    pub total_pages: usize,
    pub data: PostList,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PostList {
    pub posts: Vec<Post>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status_code: u16,
    pub error: String,
}

/// Raw pagination parameters. Anything that is not a positive integer falls
/// back to the default.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<String>,
    pub page: Option<String>,
}

impl PageQuery {
    fn positive_or(value: Option<&str>, default: usize) -> usize {
        value
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(default)
    }

    pub fn limit(&self) -> usize {
        Self::positive_or(self.limit.as_deref(), DEFAULT_LIMIT)
    }

    pub fn page(&self) -> usize {
        Self::positive_or(self.page.as_deref(), DEFAULT_PAGE)
    }
}

/// Posts in creation order, oldest first.
pub type Db = Arc<RwLock<Vec<Post>>>;

pub fn app() -> Router {
    app_with_posts(Vec::new())
}

pub fn app_with_posts(posts: Vec<Post>) -> Router {
    let db: Db = Arc::new(RwLock::new(posts));
    Router::new()
        .route("/v1/posts", get(list_posts).post(create_post))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}

pub async fn serve(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

fn error(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ErrorBody {
        status_code: status.as_u16(),
        error: message.into(),
    };
    (status, Json(body)).into_response()
}

async fn list_posts(State(db): State<Db>, Query(query): Query<PageQuery>) -> Json<Envelope<Page>> {
    let posts = db.read().await;
    let limit = query.limit();
    let page = query.page();
    let total_rows = posts.len();
    let total_pages = total_rows.div_ceil(limit);
    let slice = posts
        .iter()
        .skip((page - 1).saturating_mul(limit))
        .take(limit)
        .cloned()
        .collect();

    Json(Envelope {
        message: "posts retrieved".to_string(),
        data: Page {
            current_page: page,
            total_rows,
            total_pages,
            data: PostList { posts: slice },
        },
    })
}

async fn create_post(State(db): State<Db>, input: Result<Json<CreatePost>, JsonRejection>) -> Response {
    let Json(input) = match input {
        Ok(input) => input,
        Err(rejection) => return error(StatusCode::INTERNAL_SERVER_ERROR, rejection.body_text()),
    };
    if input.content.trim().is_empty() {
        return error(StatusCode::BAD_REQUEST, "content is required");
    }

    let post = Post::new(&input.content);
    info!(post_id = %post.post_id, "post created");
    db.write().await.push(post.clone());
    let body = Envelope {
        message: "new post created".to_string(),
        data: post,
    };
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "up" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_serializes_to_json() {
        let post = Post {
            post_id: "p1".to_string(),
            content: "Test".to_string(),
            created_at: "2021-01-01T00:00:00Z".to_string(),
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["post_id"], "p1");
        assert_eq!(json["content"], "Test");
        assert_eq!(json["created_at"], "2021-01-01T00:00:00Z");
    }

    #[test]
    fn new_post_gets_uuid_and_utc_timestamp() {
        let post = Post::new("hello");
        assert!(Uuid::parse_str(&post.post_id).is_ok());
        assert!(post.created_at.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&post.created_at).is_ok());
    }

    #[test]
    fn page_envelope_is_double_nested() {
        let envelope = Envelope {
            message: "posts retrieved".to_string(),
            data: Page {
                current_page: 1,
                total_rows: 0,
                total_pages: 0,
                data: PostList { posts: Vec::new() },
            },
        };
        let json = serde_json::to_value(&envelope).unwrap();
        assert!(json["data"]["data"]["posts"].as_array().unwrap().is_empty());
    }

    #[test]
    fn empty_message_is_omitted() {
        let envelope = Envelope {
            message: String::new(),
            data: 1,
        };
        let json = serde_json::to_value(&envelope).unwrap();
        assert!(json.get("message").is_none());
    }

    #[test]
    fn page_query_defaults() {
        let query = PageQuery::default();
        assert_eq!(query.limit(), DEFAULT_LIMIT);
        assert_eq!(query.page(), DEFAULT_PAGE);
    }

    #[test]
    fn page_query_falls_back_on_garbage() {
        let query = PageQuery {
            limit: Some("ten".to_string()),
            page: Some("0".to_string()),
        };
        assert_eq!(query.limit(), DEFAULT_LIMIT);
        assert_eq!(query.page(), DEFAULT_PAGE);
    }

    #[test]
    fn page_query_accepts_positive_values() {
        let query = PageQuery {
            limit: Some("2".to_string()),
            page: Some("3".to_string()),
        };
        assert_eq!(query.limit(), 2);
        assert_eq!(query.page(), 3);
    }

    #[test]
    fn create_post_content_defaults_to_empty() {
        let input: CreatePost = serde_json::from_str("{}").unwrap();
        assert!(input.content.is_empty());
    }
}
