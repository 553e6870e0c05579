//! Error monitoring hook.
//!
//! Unhandled errors in the view tree are panics. [`install_panic_monitor`]
//! registers a process-wide panic hook that reports each panic to a
//! [`Monitor`] and then hands it to the previously installed hook. Nothing is
//! caught here; the panic keeps unwinding after it has been reported.

use std::any::Any;
use std::fmt;
use std::panic;

use tracing::error;

/// What the monitor learns about one unhandled error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    pub message: String,
    /// `file:line:column` of the panic site, when known.
    pub location: Option<String>,
}

impl ErrorReport {
    pub fn from_payload(payload: &(dyn Any + Send), location: Option<String>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Box<dyn Any>".to_string()
        };
        Self { message, location }
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{} at {location}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// An error-tracking sink.
pub trait Monitor: Send + Sync + 'static {
    fn capture(&self, report: &ErrorReport);
}

/// Reports through `tracing` at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingMonitor;

impl Monitor for TracingMonitor {
    fn capture(&self, report: &ErrorReport) {
        error!(
            message = %report.message,
            location = report.location.as_deref().unwrap_or("unknown"),
            "unhandled error captured"
        );
    }
}

/// Route every panic in the process through `monitor`.
pub fn install_panic_monitor<M: Monitor>(monitor: M) {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()));
        monitor.capture(&ErrorReport::from_payload(info.payload(), location));
        previous(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_from_static_str_payload() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        let report = ErrorReport::from_payload(payload.as_ref(), None);
        assert_eq!(report.message, "boom");
        assert_eq!(report.to_string(), "boom");
    }

    #[test]
    fn report_from_string_payload() {
        let payload: Box<dyn Any + Send> = Box::new(String::from("formatted boom"));
        let report = ErrorReport::from_payload(payload.as_ref(), Some("src/x.rs:1:2".to_string()));
        assert_eq!(report.message, "formatted boom");
        assert_eq!(report.to_string(), "formatted boom at src/x.rs:1:2");
    }

    #[test]
    fn report_from_opaque_payload() {
        let payload: Box<dyn Any + Send> = Box::new(42_u32);
        assert_eq!(ErrorReport::from_payload(payload.as_ref(), None).message, "Box<dyn Any>");
    }
}
