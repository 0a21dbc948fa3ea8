//! Dioxus web application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the client-rendered Dioxus application.

use dioxus::prelude::*;

pub mod components;
pub mod location;
pub mod pages;
pub mod shell_context;
pub mod viewport;

use components::Shell;
use pages::{Contacts, Dashboard, Inbox, NotFound, Reviews, WhatsApp};
use shell_context::use_shell_provider;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Initialize shell context at app root (user, unread badge, breakpoints)
    use_shell_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
///
/// Pages that read query parameters capture the whole query string so it
/// survives client-side navigation.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Dashboard {},
        #[route("/inbox")]
        Inbox {},
        #[route("/whatsapp")]
        WhatsApp {},
        #[route("/contacts?:..query")]
        Contacts { query: String },
        #[route("/reviews?:..query")]
        Reviews { query: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
