//! Headless view core for the posts front-end.
//!
//! # Overview
//! Owns everything the front-end does except I/O: route matching, view
//! state, API base URL resolution, request building, response parsing and
//! HTML rendering. Network round-trips are described as [`Effect`]s and
//! executed by the host (host-does-IO pattern), so the core is fully
//! deterministic and testable.
//!
//! # Design
//! - [`App`] is the navigation shell. It mounts one view per route and always
//!   renders the header.
//! - The posts view fetches once per mount and owns a single state cell.
//! - Fetch failures go through a named [`FetchFailurePolicy`]; the default is
//!   to log and show nothing.
//! - The error trigger panics and leaves the unwind to whatever
//!   [`monitor`] the host installed.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod monitor;
pub mod policy;
pub mod router;
pub mod types;
pub mod views;

pub use app::{App, Effect, FetchTicket, MountId};
pub use client::PostsClient;
pub use config::{RuntimeConfig, RuntimeEnv};
pub use error::{ApiError, ConfigError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use monitor::{install_panic_monitor, ErrorReport, Monitor, TracingMonitor};
pub use policy::FetchFailurePolicy;
pub use router::{match_route, Route};
pub use types::{FieldValue, Post};
