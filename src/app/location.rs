//! Current page location derived from the router.
//!
//! Only some routes capture the query string, so the browser's own
//! `location.search` fills in for the ones that don't.

use dioxus::prelude::*;

use super::Route;
use crate::selection::PageLocation;

/// Current path and query string. Re-renders the caller on navigation.
pub fn use_page_location() -> PageLocation {
    let route = use_route::<Route>();
    location_from(&route, browser_search().as_deref())
}

/// Location for `route`, taking the query from `search` when the route
/// does not carry one.
fn location_from(route: &Route, search: Option<&str>) -> PageLocation {
    let location = PageLocation::parse_lossy(&route.to_string());
    match search {
        Some(search) => location.or_search(search),
        None => location,
    }
}

#[cfg(target_arch = "wasm32")]
fn browser_search() -> Option<String> {
    web_sys::window()?.location().search().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_search() -> Option<String> {
    None
}
