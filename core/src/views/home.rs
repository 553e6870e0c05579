use maud::{html, Markup};

/// Static landing view for `/`.
#[derive(Debug, Clone, Default)]
pub struct HomeView;

impl HomeView {
    pub fn render(&self) -> Markup {
        html! {
            div.home {
                div.row."mb-3" {
                    div."col-md-12"."text-md-center" {
                        h2."text-poppins"."font-weight-bold" { "Welcome" }
                        p."text-muted" { "Browse the latest posts or break the world." }
                    }
                }
            }
        }
    }
}
