//! The navigation shell: route matching, view mounting and effect dispatch.
//!
//! # Design
//! `App` mounts at most one view at a time, chosen by [`match_route`], and
//! always renders the header. Mounting may produce [`Effect`]s, which the host
//! executes and answers with [`App::complete_fetch`]. Every mount gets a fresh
//! [`MountId`] and each fetch carries a [`FetchTicket`] naming the mount that
//! asked for it.
//!
//! Fetches are not cancelled on unmount. The host still runs the request and
//! delivers the completion; the shell logs a warning that an update arrived
//! for an unmounted view and drops it.

use maud::{html, Markup};
use tracing::{debug, warn};

use crate::client::PostsClient;
use crate::config::RuntimeConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::policy::FetchFailurePolicy;
use crate::router::{match_route, Route};
use crate::types::Post;
use crate::views::{header, ErrorTriggerView, HomeView, PostsView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountId(u64);

/// Identifies which mount a completion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    mount: MountId,
}

impl FetchTicket {
    pub fn mount(&self) -> MountId {
        self.mount
    }
}

/// Work the host must perform on the app's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch {
        ticket: FetchTicket,
        request: HttpRequest,
    },
}

#[derive(Debug)]
enum View {
    Home(HomeView),
    Posts(PostsView),
    Sentry(ErrorTriggerView),
}

impl View {
    fn for_route(route: Route) -> Self {
        match route {
            Route::Home => View::Home(HomeView),
            Route::Posts => View::Posts(PostsView::new()),
            Route::Sentry => View::Sentry(ErrorTriggerView),
        }
    }

    fn render(&self) -> Markup {
        match self {
            View::Home(view) => view.render(),
            View::Posts(view) => view.render(),
            View::Sentry(view) => view.render(),
        }
    }
}

#[derive(Debug)]
struct Mounted {
    id: MountId,
    route: Route,
    view: View,
}

#[derive(Debug)]
pub struct App {
    client: PostsClient,
    policy: FetchFailurePolicy,
    location: String,
    mounted: Option<Mounted>,
    next_mount: u64,
}

impl App {
    pub fn new(config: &RuntimeConfig) -> Self {
        Self {
            client: PostsClient::new(&config.api_url),
            policy: FetchFailurePolicy::default(),
            location: String::new(),
            mounted: None,
            next_mount: 0,
        }
    }

    pub fn with_policy(mut self, policy: FetchFailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Switch to `location`, mounting the matching view.
    ///
    /// Navigating to the route that is already mounted keeps the current view
    /// and its state; nothing is refetched.
    pub fn navigate(&mut self, location: &str) -> Vec<Effect> {
        self.location = location.to_string();
        let route = match_route(location);

        if let (Some(route), Some(mounted)) = (route, &self.mounted) {
            if mounted.route == route {
                debug!(%route, location, "route unchanged, keeping mounted view");
                return Vec::new();
            }
        }

        if let Some(previous) = self.mounted.take() {
            debug!(route = %previous.route, mount = previous.id.0, "unmounting view");
        }

        let Some(route) = route else {
            debug!(location, "no route matches");
            return Vec::new();
        };

        let id = MountId(self.next_mount);
        self.next_mount += 1;
        let mut view = View::for_route(route);
        debug!(%route, mount = id.0, "mounting view");

        let mut effects = Vec::new();
        if let View::Posts(posts) = &mut view {
            if let Some(request) = posts.on_mount(&self.client) {
                effects.push(Effect::Fetch {
                    ticket: FetchTicket { mount: id },
                    request,
                });
            }
        }

        self.mounted = Some(Mounted { id, route, view });
        effects
    }

    /// Deliver the outcome of an [`Effect::Fetch`].
    pub fn complete_fetch(&mut self, ticket: FetchTicket, result: Result<HttpResponse, ApiError>) {
        let current = self.mounted.as_mut().filter(|m| m.id == ticket.mount);
        match current.map(|m| &mut m.view) {
            Some(View::Posts(posts)) => {
                posts.on_fetch_complete(&self.client, self.policy, result);
            }
            _ => {
                warn!(
                    mount = ticket.mount.0,
                    "state update on an unmounted view, dropping fetch completion"
                );
            }
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn current_route(&self) -> Option<Route> {
        self.mounted.as_ref().map(|m| m.route)
    }

    pub fn current_mount(&self) -> Option<MountId> {
        self.mounted.as_ref().map(|m| m.id)
    }

    /// Posts held by the mounted posts view, if that is what is mounted.
    pub fn posts(&self) -> Option<&[Post]> {
        match &self.mounted {
            Some(Mounted {
                view: View::Posts(posts),
                ..
            }) => Some(posts.posts()),
            _ => None,
        }
    }

    /// Click the error trigger if the mounted view has one.
    ///
    /// Returns `false` when there is nothing to click. Otherwise it does not
    /// return: the trigger panics and the unwind is left to the caller.
    pub fn click_error_trigger(&self) -> bool {
        match &self.mounted {
            Some(Mounted {
                view: View::Sentry(trigger),
                ..
            }) => trigger.on_click(),
            _ => {
                debug!(location = %self.location, "no error trigger mounted");
                false
            }
        }
    }

    pub fn render(&self) -> Markup {
        html! {
            div.main {
                (header::render(self.current_route()))
                div.container."mt-3" {
                    @if let Some(mounted) = &self.mounted {
                        (mounted.view.render())
                    }
                }
            }
        }
    }
}
