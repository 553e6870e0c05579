//! Render functions for the shell and its three views.
//!
//! Views are plain structs that own their state and render it to `maud`
//! markup. Text interpolated into markup is HTML-escaped by maud; nothing
//! else is done to it.

pub mod header;
pub mod home;
pub mod posts;
pub mod sentry;

use maud::{html, Markup, DOCTYPE};

pub use home::HomeView;
pub use posts::{PostsState, PostsView};
pub use sentry::{ErrorTriggerView, ERROR_TRIGGER_MESSAGE};

/// Wrap an application root in a complete HTML page.
pub fn document(title: &str, root: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
            }
            body {
                div id="root" { (root) }
            }
        }
    }
}
