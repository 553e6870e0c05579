//! Persistent navigation header.

use maud::{html, Markup};

use crate::router::Route;

const LINKS: [(Route, &str); 3] = [
    (Route::Home, "Home"),
    (Route::Posts, "Posts"),
    (Route::Sentry, "Sentry"),
];

/// The header is rendered on every page, including paths no route matches.
pub fn render(active: Option<Route>) -> Markup {
    html! {
        header {
            nav.navbar."navbar-expand-lg"."navbar-dark"."bg-primary" {
                a."navbar-brand"."text-poppins" href="/" { "Posts" }
                ul."navbar-nav" {
                    @for (route, label) in LINKS {
                        li."nav-item" {
                            @if active == Some(route) {
                                a."nav-link".active href=(route.path()) aria-current="page" { (label) }
                            } @else {
                                a."nav-link" href=(route.path()) { (label) }
                            }
                        }
                    }
                }
            }
        }
    }
}
