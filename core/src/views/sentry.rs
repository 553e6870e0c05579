//! A view whose only job is to blow up on click.
//!
//! The click handler panics unconditionally and nothing between it and the
//! process-wide panic hook catches the unwind, so an installed
//! [`crate::monitor`] sees the error exactly as it would see a real bug.

use maud::{html, Markup};

pub const ERROR_TRIGGER_MESSAGE: &str = "Hi there sentry!";

#[derive(Debug, Clone, Default)]
pub struct ErrorTriggerView;

impl ErrorTriggerView {
    pub fn render(&self) -> Markup {
        html! {
            div.sentry {
                div.row."justify-content-center"."mb-3" {
                    div."col-md-4"."mt-5" {
                        div.card."card-outline"."bg-secondary"."translate-up".ripple."ripple-dark"
                            style="cursor: pointer" data-action="raise-error" {
                            div."card-body"."text-center" {
                                h5."font-weight-bold" { "Break the world" }
                            }
                        }
                    }
                }
            }
        }
    }

    pub fn on_click(&self) -> ! {
        raise_error()
    }
}

pub fn raise_error() -> ! {
    panic!("{}", ERROR_TRIGGER_MESSAGE)
}
