//! Fallback page for unmatched paths.

use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section { class: "page page--not-found",
            h1 { class: "page__title", "Page not found" }
            p { "Nothing lives at " code { "{path}" } "." }
            Link { to: Route::Dashboard {}, "Back to the dashboard" }
        }
    }
}
