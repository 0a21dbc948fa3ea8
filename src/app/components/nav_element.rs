//! One entry of the top navigation bar.

use dioxus::prelude::*;

use super::{class_names, HiddenScope, ToggleButton, ToggleVariant};
use crate::app::shell_context::use_shell;
use crate::app::viewport::use_screen_width;
use crate::nav::{badge_count, NavigationRoute};

const HOME_ICON: Asset = asset!("/public/images/home.svg");
const INBOX_ICON: Asset = asset!("/public/images/inbox.svg");
const WHATSAPP_ICON: Asset = asset!("/public/images/whatsapp.svg");
const CONTACTS_ICON: Asset = asset!("/public/images/contacts.svg");
const REVIEWS_ICON: Asset = asset!("/public/images/reviews.svg");

fn icon_asset(name: &str) -> Option<Asset> {
    match name {
        "home" => Some(HOME_ICON),
        "inbox" => Some(INBOX_ICON),
        "whatsapp" => Some(WHATSAPP_ICON),
        "contacts" => Some(CONTACTS_ICON),
        "reviews" => Some(REVIEWS_ICON),
        _ => None,
    }
}

/// Navigation entry. Hidden on narrow screens unless it is the selected one.
#[component]
pub fn NavElement(
    route: NavigationRoute,
    /// Visually selected (URL match or hover override)
    selected: bool,
    /// Unread count; the badge shows only when positive
    #[props(default)]
    badge: Option<u32>,
    /// Receives `route.path` when the pointer enters the entry
    on_hover: EventHandler<String>,
) -> Element {
    let breakpoints = use_shell().breakpoints();
    let screen = use_screen_width(None);

    let visible = breakpoints.entry_visible(screen.width, selected);
    let expanded = breakpoints.label_expanded(screen.width, selected);
    let label_class = class_names(&[
        "nav-element__label",
        if expanded { "" } else { "nav-element__label--collapsed" },
    ]);
    let icon = route.icon.and_then(icon_asset);
    let badge = badge_count(badge);
    let path = route.path;

    rsx! {
        HiddenScope { hidden: !visible,
            ToggleButton {
                variant: ToggleVariant::Segmented,
                class: "nav-element",
                to: path.to_string(),
                compare_to_first_path: true,
                visual_override: Some(selected),
                onmouseenter: move |_| on_hover.call(path.to_string()),
                if let Some(icon) = icon {
                    img { class: "nav-element__icon", src: icon, alt: "" }
                }
                span { class: "{label_class}", "{route.title}" }
                if let Some(count) = badge {
                    span { class: "nav-element__badge", "{count}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::NAV_ROUTES;

    #[test]
    fn test_every_nav_icon_resolves() {
        for route in NAV_ROUTES {
            let icon = route.icon.and_then(icon_asset);
            assert!(icon.is_some(), "missing icon for {}", route.path);
        }
        assert!(icon_asset("unknown").is_none());
    }
}
