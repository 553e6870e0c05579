//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. Views emit
//! `HttpRequest` values as effects and receive `HttpResponse` values back as
//! completions; the host is responsible for the actual network round-trip.
//! Nothing in the core blocks on I/O, so a pending request never stalls
//! rendering.

/// HTTP method for a request. The front-end only ever reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `PostsClient::build_*` methods and handed to the host inside an
/// `Effect::Fetch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the host after executing an `HttpRequest`, then passed
/// back to the view that asked for it.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            headers: Vec::new(),
            body: body.into(),
        }
    }
}
