//! Top navigation bar with a hover override of the selected entry.

use dioxus::prelude::*;

use super::{NavElement, ToggleButton, ToggleSize, ToggleVariant};
use crate::app::location::use_page_location;
use crate::app::shell_context::use_shell;
use crate::app::Route;
use crate::config::UserProfile;
use crate::nav::{baseline_path, MenuSelection, NAV_ROUTES};

const LOGO: Asset = asset!("/public/images/logo.svg");
const AVATAR: Asset = asset!("/public/images/avatar.svg");

#[component]
pub fn Menubar() -> Element {
    let location = use_page_location();
    let shell = use_shell();
    let mut selection = use_signal(MenuSelection::default);

    let baseline = baseline_path(NAV_ROUTES, location.path());
    let unread = shell.unread_count();
    let user = shell.user();

    rsx! {
        header { class: "menubar",
            Link { class: "menubar__logo", to: Route::Dashboard {},
                img { src: LOGO, alt: "Keaz" }
            }
            nav {
                class: "menubar__nav",
                onmouseleave: move |_| selection.write().leave(),
                for route in NAV_ROUTES.iter() {
                    NavElement {
                        key: "{route.path}",
                        route: route.clone(),
                        selected: selection.read().is_visually_selected(baseline, route.path),
                        badge: if route.shows_unread { unread } else { None },
                        on_hover: move |path: String| selection.write().hover(path),
                    }
                }
            }
            UserMenu { user }
        }
    }
}

/// Signed-in user summary and the avatar popover trigger.
#[component]
fn UserMenu(user: UserProfile) -> Element {
    let mut open = use_signal(|| false);
    let avatar = user.image_url.clone().unwrap_or_else(|| AVATAR.to_string());
    let full_name = user.full_name();

    rsx! {
        div { class: "user-menu",
            div { class: "user-menu__summary",
                span { class: "user-menu__name", "{full_name}" }
                span { class: "user-menu__meta", "{user.contact_count} contacts" }
            }
            ToggleButton {
                variant: ToggleVariant::Tertiary,
                size: ToggleSize::Square,
                class: "user-menu__trigger",
                selected: open(),
                visual_override: Some(open()),
                on_change: move |next: bool| open.set(next),
                img { class: "user-menu__avatar", src: "{avatar}", alt: "{full_name}" }
            }
            if open() {
                div { class: "user-menu__popover", role: "dialog",
                    p { class: "user-menu__popover-name", "{full_name}" }
                    ToggleButton {
                        variant: ToggleVariant::Tertiary,
                        to: "/contacts".to_string(),
                        onpress: move |_| open.set(false),
                        "View contacts"
                    }
                }
            }
        }
    }
}
