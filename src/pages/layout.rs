use maud::{DOCTYPE, Markup, html};

use crate::GENERATOR;
use crate::routes;

/// Shared HTML shell around every page.
pub fn layout(title: &str, description: &str, main: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="generator" content=(GENERATOR);
                meta name="description" content=(description);
                title { (title) " - The Gazette" }
            }
            body {
                header.site-header {
                    nav {
                        a.site-title href=(routes::INDEX_ROUTE) { "The Gazette" }
                    }
                }
                main {
                    (main)
                }
                footer.site-footer {
                    p { "© 2026 The Gazette" }
                }
            }
        }
    }
}
