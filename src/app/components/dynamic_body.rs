//! Content container shared across page transitions.

use dioxus::prelude::*;

use super::class_names;

/// Transition identity shared by every page body.
pub const TRANSITION_NAME: &str = "dynamic-body";

/// Rounded, bordered container wrapping the routed page.
#[component]
pub fn DynamicBody(
    /// Extra classes for the container
    #[props(default, into)]
    class: String,
    children: Element,
) -> Element {
    let class = class_names(&["dynamic-body", &class]);

    rsx! {
        main {
            class: "{class}",
            style: "view-transition-name: {TRANSITION_NAME}",
            {children}
        }
    }
}
