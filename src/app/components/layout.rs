//! Shell layout wrapping every routed page.

use dioxus::prelude::*;

use super::{DynamicBody, Menubar};
use crate::app::Route;

/// Footer text naming the release and the commit it was built from.
fn build_label(version: &str, git_sha: &str) -> String {
    format!("Keaz v{version} ({git_sha})")
}

/// Menubar on top, routed page inside the shared content container.
#[component]
pub fn Shell() -> Element {
    let build = build_label(env!("KEAZ_VERSION"), env!("KEAZ_GIT_SHA"));

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "Keaz" }
        document::Link {
            rel: "stylesheet",
            href: asset!("/public/dashboard.css")
        }
        document::Link {
            rel: "icon",
            r#type: "image/svg+xml",
            href: asset!("/public/images/logo.svg")
        }

        div { class: "shell",
            Menubar {}
            DynamicBody {
                Outlet::<Route> {}
            }
            footer { class: "shell__footer",
                small { "{build}" }
            }
        }
    }
}
