//! What a failed posts fetch is allowed to change.

use tracing::warn;

use crate::error::ApiError;

/// Policy applied by the posts view when its fetch fails.
///
/// Whatever the policy, the post collection is never touched on failure and
/// the fetch is never retried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchFailurePolicy {
    /// Log a diagnostic and nothing else. The page keeps showing whatever it
    /// showed before (an empty list on the first failure).
    #[default]
    Silent,
    /// Log, and also hand the message to the view so it can render a notice.
    Surface,
}

impl FetchFailurePolicy {
    /// Log `error` and return the message the view should keep, if any.
    pub fn handle(&self, url: &str, error: &ApiError) -> Option<String> {
        warn!(url, %error, "posts fetch failed");
        match self {
            FetchFailurePolicy::Silent => None,
            FetchFailurePolicy::Surface => Some(error.to_string()),
        }
    }
}
