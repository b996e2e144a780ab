use maud::{Markup, html};

use crate::pages::layout;
use crate::routes;

/// Generic not-found page, served for any identifier that does not
/// resolve.
pub fn not_found_page() -> Markup {
    layout(
        "404 - Not Found",
        "The article you are looking for could not be found.",
        html! {
            div.not-found {
                h1 { "404 - Not Found" }
                p { "The article you are looking for could not be found." }
                a href=(routes::INDEX_ROUTE) { "Back to News" }
            }
        },
    )
}
