//! Host for the posts front-end core.
//!
//! # Overview
//! Plays the part of the browser: resolves the runtime configuration once,
//! opens a route, runs the fetch effects the core asks for and returns the
//! rendered page. All view behaviour lives in `posts-core`; this crate only
//! does I/O.

pub mod logging;
pub mod transport;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use posts_core::views::document;
use posts_core::{App, Effect, FetchFailurePolicy, RuntimeConfig, RuntimeEnv};
use tracing::{debug, info};

pub use logging::LogFormat;
pub use transport::{Transport, UreqTransport};

/// Runtime config object looked up in the working directory when no path is
/// given.
pub const DEFAULT_ENV_CONFIG: &str = "env-config.json";

pub const PAGE_TITLE: &str = "Posts";

#[derive(Debug, Parser)]
#[command(name = "posts-shell", version, about = "Render the posts front-end at a route")]
pub struct Cli {
    /// Route to open: /, /posts or /sentry
    #[arg(default_value = "/")]
    pub route: String,

    /// JSON object injected as the runtime config (may set REACT_APP_API_URL)
    #[arg(long, env = "POSTS_ENV_CONFIG")]
    pub env_config: Option<PathBuf>,

    /// Click the error trigger after rendering
    #[arg(long)]
    pub click: bool,

    /// Show fetch failures on the page instead of only logging them
    #[arg(long)]
    pub surface_errors: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Load the runtime config object.
///
/// An explicitly named file must exist and parse. The fallback file is
/// optional; when it is absent there is simply no runtime object.
pub fn load_runtime_env(explicit: Option<&Path>, fallback: &Path) -> Result<Option<RuntimeEnv>> {
    let path = match explicit {
        Some(path) => path,
        None if fallback.exists() => fallback,
        None => {
            debug!(path = %fallback.display(), "no runtime config object");
            return Ok(None);
        }
    };

    let env = RuntimeEnv::load(path)
        .with_context(|| format!("loading runtime config from {}", path.display()))?;
    debug!(path = %path.display(), "loaded runtime config object");
    Ok(Some(env))
}

/// A running front-end: the core app plus the transport that serves it.
pub struct Shell<T: Transport> {
    app: App,
    transport: T,
}

impl Shell<UreqTransport> {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let runtime = load_runtime_env(cli.env_config.as_deref(), Path::new(DEFAULT_ENV_CONFIG))?;
        let config = RuntimeConfig::resolve(runtime.as_ref());
        info!(api_url = %config.api_url, "starting front-end");

        let policy = if cli.surface_errors {
            FetchFailurePolicy::Surface
        } else {
            FetchFailurePolicy::Silent
        };
        Ok(Self::new(App::new(&config).with_policy(policy), UreqTransport::new()))
    }
}

impl<T: Transport> Shell<T> {
    pub fn new(app: App, transport: T) -> Self {
        Self { app, transport }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Navigate to `location`, settle every effect and return the page HTML.
    pub fn open(&mut self, location: &str) -> String {
        let effects = self.app.navigate(location);
        self.settle(effects);
        self.render()
    }

    pub fn render(&self) -> String {
        document(PAGE_TITLE, self.app.render()).into_string()
    }

    /// Click the error trigger on the current page. Panics if there is one.
    pub fn click(&self) -> bool {
        self.app.click_error_trigger()
    }

    fn settle(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Fetch { ticket, request } => {
                    let result = self.transport.execute(&request);
                    self.app.complete_fetch(ticket, result);
                }
            }
        }
    }
}
