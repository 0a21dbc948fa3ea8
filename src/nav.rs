//! Navigation routes and menu selection.

/// One entry in the top navigation bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationRoute {
    pub path: &'static str,
    pub title: &'static str,
    /// Icon name, resolved to an asset by the UI.
    pub icon: Option<&'static str>,
    /// Whether the unread badge is shown on this entry.
    pub shows_unread: bool,
}

pub const NAV_ROUTES: &[NavigationRoute] = &[
    NavigationRoute {
        path: "/",
        title: "Dashboard",
        icon: Some("home"),
        shows_unread: false,
    },
    NavigationRoute {
        path: "/inbox",
        title: "Inbox",
        icon: Some("inbox"),
        shows_unread: true,
    },
    NavigationRoute {
        path: "/whatsapp",
        title: "WhatsApp",
        icon: Some("whatsapp"),
        shows_unread: false,
    },
    NavigationRoute {
        path: "/contacts",
        title: "Contacts",
        icon: Some("contacts"),
        shows_unread: false,
    },
    NavigationRoute {
        path: "/reviews",
        title: "Google Reviews",
        icon: Some("reviews"),
        shows_unread: false,
    },
];

/// Path the menubar falls back to when no route matches.
pub const FALLBACK_PATH: &str = "/";

/// Whether `prefix` is a path prefix of `path` on segment boundaries.
fn is_path_prefix(prefix: &str, path: &str) -> bool {
    if prefix == "/" {
        return true;
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/') || prefix.ends_with('/'),
        None => false,
    }
}

/// Route matching `current_path`; the most specific prefix wins.
pub fn baseline_route<'a>(
    routes: &'a [NavigationRoute],
    current_path: &str,
) -> Option<&'a NavigationRoute> {
    routes
        .iter()
        .filter(|route| is_path_prefix(route.path, current_path))
        .max_by_key(|route| route.path.len())
}

/// Path of the URL-derived selected entry.
pub fn baseline_path<'a>(routes: &'a [NavigationRoute], current_path: &str) -> &'a str {
    baseline_route(routes, current_path)
        .map(|route| route.path)
        .unwrap_or(FALLBACK_PATH)
}

/// Viewport widths at which navigation entries collapse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavBreakpoints {
    /// Unselected entries are hidden at or below this width.
    pub collapse: f64,
    /// Unselected entries show their label only above this width.
    pub label: f64,
}

impl Default for NavBreakpoints {
    fn default() -> Self {
        Self {
            collapse: 800.0,
            label: 1200.0,
        }
    }
}

impl NavBreakpoints {
    pub fn entry_visible(&self, width: f64, selected: bool) -> bool {
        width > self.collapse || selected
    }

    pub fn label_expanded(&self, width: f64, selected: bool) -> bool {
        selected || width > self.label
    }
}

/// Badge value, shown only for positive counts.
pub fn badge_count(unread: Option<u32>) -> Option<u32> {
    unread.filter(|count| *count > 0)
}

/// Hover override on top of the URL-derived selection.
///
/// The override is cosmetic: it decides which entry is drawn as selected and
/// never feeds back into routing selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuSelection {
    hovered: Option<String>,
}

impl MenuSelection {
    pub fn hover(&mut self, path: impl Into<String>) {
        self.hovered = Some(path.into());
    }

    /// Pointer left the navigation group.
    pub fn leave(&mut self) {
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn effective<'a>(&'a self, baseline: &'a str) -> &'a str {
        self.hovered.as_deref().unwrap_or(baseline)
    }

    pub fn is_visually_selected(&self, baseline: &str, path: &str) -> bool {
        self.effective(baseline) == path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_prefers_most_specific_route() {
        assert_eq!(baseline_path(NAV_ROUTES, "/"), "/");
        assert_eq!(baseline_path(NAV_ROUTES, "/inbox"), "/inbox");
        assert_eq!(baseline_path(NAV_ROUTES, "/inbox/42"), "/inbox");
        assert_eq!(baseline_path(NAV_ROUTES, "/contacts"), "/contacts");
    }

    #[test]
    fn test_baseline_respects_segment_boundaries() {
        assert_eq!(baseline_path(NAV_ROUTES, "/inboxes"), "/");
        assert_eq!(baseline_path(NAV_ROUTES, "/nowhere"), "/");
    }

    #[test]
    fn test_baseline_without_root_route_falls_back() {
        let routes = &NAV_ROUTES[1..];
        assert!(baseline_route(routes, "/settings").is_none());
        assert_eq!(baseline_path(routes, "/settings"), FALLBACK_PATH);
    }

    #[test]
    fn test_entry_visibility() {
        let breakpoints = NavBreakpoints::default();
        assert!(breakpoints.entry_visible(801.0, false));
        assert!(!breakpoints.entry_visible(800.0, false));
        assert!(breakpoints.entry_visible(0.0, true));
    }

    #[test]
    fn test_label_expansion() {
        let breakpoints = NavBreakpoints::default();
        assert!(breakpoints.label_expanded(320.0, true));
        assert!(!breakpoints.label_expanded(1200.0, false));
        assert!(breakpoints.label_expanded(1201.0, false));
    }

    #[test]
    fn test_badge_count() {
        assert_eq!(badge_count(None), None);
        assert_eq!(badge_count(Some(0)), None);
        assert_eq!(badge_count(Some(3)), Some(3));
    }

    #[test]
    fn test_hover_override_and_leave() {
        let mut selection = MenuSelection::default();
        assert_eq!(selection.effective("/inbox"), "/inbox");

        selection.hover("/contacts");
        assert_eq!(selection.effective("/inbox"), "/contacts");
        assert!(selection.is_visually_selected("/inbox", "/contacts"));
        assert!(!selection.is_visually_selected("/inbox", "/inbox"));

        selection.leave();
        assert_eq!(selection.hovered(), None);
        assert_eq!(selection.effective("/inbox"), "/inbox");
    }
}
