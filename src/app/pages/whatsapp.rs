//! WhatsApp channel page.

use dioxus::prelude::*;

use crate::app::components::{ToggleButton, ToggleVariant};

#[component]
pub fn WhatsApp() -> Element {
    let mut requested = use_signal(|| false);

    rsx! {
        section { class: "page page--whatsapp",
            h1 { class: "page__title", "WhatsApp" }
            p { "Connect a WhatsApp Business number to answer customers from Keaz." }
            ToggleButton {
                variant: ToggleVariant::Default,
                disabled: requested(),
                onpress: move |_| {
                    tracing::info!("WhatsApp connection requested");
                    requested.set(true);
                },
                if requested() { "Connection requested" } else { "Connect WhatsApp" }
            }
        }
    }
}
