use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with_posts, Envelope, ErrorBody, Page, Post};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_value(response: axum::response::Response) -> serde_json::Value {
    let bytes: bytes::Bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn seeded(n: usize) -> Vec<Post> {
    (0..n)
        .map(|i| Post {
            post_id: format!("p{i}"),
            content: format!("post number {i}"),
            created_at: format!("2021-01-{:02}T00:00:00Z", i + 1),
        })
        .collect()
}

// --- list ---

#[tokio::test]
async fn list_posts_empty_keeps_envelope_shape() {
    let resp = app().oneshot(get("/v1/posts")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_value(resp).await;
    assert_eq!(body["message"], "posts retrieved");
    assert_eq!(body["data"]["total_rows"], 0);
    assert_eq!(body["data"]["total_pages"], 0);
    assert!(body["data"]["data"]["posts"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn list_posts_returns_insertion_order() {
    let resp = app_with_posts(seeded(3)).oneshot(get("/v1/posts")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let env: Envelope<Page> = body_json(resp).await;
    let ids: Vec<_> = env.data.data.posts.iter().map(|p| p.post_id.as_str()).collect();
    assert_eq!(ids, ["p0", "p1", "p2"]);
    assert_eq!(env.data.current_page, 1);
}

#[tokio::test]
async fn list_posts_defaults_to_ten_per_page() {
    let resp = app_with_posts(seeded(12)).oneshot(get("/v1/posts")).await.unwrap();

    let env: Envelope<Page> = body_json(resp).await;
    assert_eq!(env.data.data.posts.len(), 10);
    assert_eq!(env.data.total_rows, 12);
    assert_eq!(env.data.total_pages, 2);
}

#[tokio::test]
async fn list_posts_paginates() {
    let resp = app_with_posts(seeded(5))
        .oneshot(get("/v1/posts?limit=2&page=3"))
        .await
        .unwrap();

    let env: Envelope<Page> = body_json(resp).await;
    assert_eq!(env.data.current_page, 3);
    assert_eq!(env.data.total_pages, 3);
    let ids: Vec<_> = env.data.data.posts.iter().map(|p| p.post_id.as_str()).collect();
    assert_eq!(ids, ["p4"]);
}

#[tokio::test]
async fn list_posts_page_past_end_is_empty() {
    let resp = app_with_posts(seeded(2))
        .oneshot(get("/v1/posts?page=9"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let env: Envelope<Page> = body_json(resp).await;
    assert!(env.data.data.posts.is_empty());
}

#[tokio::test]
async fn list_posts_ignores_bad_pagination_values() {
    let resp = app_with_posts(seeded(3))
        .oneshot(get("/v1/posts?limit=abc&page=-1"))
        .await
        .unwrap();

    let env: Envelope<Page> = body_json(resp).await;
    assert_eq!(env.data.data.posts.len(), 3);
    assert_eq!(env.data.current_page, 1);
}

// --- create ---

#[tokio::test]
async fn create_post_returns_201() {
    let resp = app()
        .oneshot(json_request("POST", "/v1/posts", r#"{"content":"hello"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let env: Envelope<Post> = body_json(resp).await;
    assert_eq!(env.message, "new post created");
    assert_eq!(env.data.content, "hello");
    assert!(uuid::Uuid::parse_str(&env.data.post_id).is_ok());
}

#[tokio::test]
async fn create_post_without_content_returns_400() {
    let resp = app()
        .oneshot(json_request("POST", "/v1/posts", r#"{"content":"  "}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let err: ErrorBody = body_json(resp).await;
    assert_eq!(err.status_code, 400);
    assert_eq!(err.error, "content is required");
}

#[tokio::test]
async fn create_post_malformed_json_returns_500() {
    let resp = app()
        .oneshot(json_request("POST", "/v1/posts", "{not json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let err: ErrorBody = body_json(resp).await;
    assert_eq!(err.status_code, 500);
    assert!(!err.error.is_empty());
}

// --- health ---

#[tokio::test]
async fn health_reports_up() {
    let resp = app().oneshot(get("/health")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_value(resp).await;
    assert_eq!(body["status"], "up");
}

#[tokio::test]
async fn unknown_path_returns_404() {
    let resp = app().oneshot(get("/v2/posts")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- create then list ---

#[tokio::test]
async fn created_posts_are_listed_oldest_first() {
    use tower::Service;

    let mut app = app().into_service();

    for content in ["first", "second"] {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(json_request(
                "POST",
                "/v1/posts",
                &format!(r#"{{"content":"{content}"}}"#),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/v1/posts"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let env: Envelope<Page> = body_json(resp).await;
    let contents: Vec<_> = env.data.data.posts.iter().map(|p| p.content.as_str()).collect();
    assert_eq!(contents, ["first", "second"]);
}
