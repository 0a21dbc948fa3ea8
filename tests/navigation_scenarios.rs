//! End-to-end navigation scenarios over the public selection, navigation and
//! viewport APIs, without a renderer.

use std::cell::RefCell;
use std::rc::Rc;

use keaz_dashboard::interaction::{InteractionEvent, InteractionTracker, StyleFlag};
use keaz_dashboard::nav::{baseline_path, MenuSelection, NavBreakpoints, NAV_ROUTES};
use keaz_dashboard::selection::{ElementKind, PageLocation, ToggleSelectionInput};
use keaz_dashboard::viewport::{
    ObserverGuard, ResizeCallback, ResizeSource, SizeStore, SizeWatch, ViewportSize, ViewportState,
};

fn at(href: &str) -> PageLocation {
    PageLocation::parse(href).unwrap()
}

/// Visual selection of every navigation entry, as the menubar draws it.
fn drawn_selection(location: &PageLocation, menu: &MenuSelection) -> Vec<(&'static str, bool)> {
    let baseline = baseline_path(NAV_ROUTES, location.path());
    NAV_ROUTES
        .iter()
        .map(|route| (route.path, menu.is_visually_selected(baseline, route.path)))
        .collect()
}

/// Entries a menubar renders at `width`.
fn rendered_entries(location: &PageLocation, width: f64) -> Vec<&'static str> {
    let breakpoints = NavBreakpoints::default();
    let menu = MenuSelection::default();
    drawn_selection(location, &menu)
        .into_iter()
        .filter(|(_, selected)| breakpoints.entry_visible(width, *selected))
        .map(|(path, _)| path)
        .collect()
}

#[test]
fn inbox_url_selects_inbox_entry_at_any_width() {
    let location = at("/inbox");
    assert_eq!(baseline_path(NAV_ROUTES, location.path()), "/inbox");

    assert_eq!(rendered_entries(&location, 320.0), vec!["/inbox"]);
    assert_eq!(rendered_entries(&location, 800.0), vec!["/inbox"]);
    assert_eq!(rendered_entries(&location, 801.0).len(), NAV_ROUTES.len());
}

#[test]
fn hover_moves_visual_selection_and_leave_restores_it() {
    let location = at("/inbox");
    let mut menu = MenuSelection::default();

    menu.hover("/contacts");
    let selected: Vec<_> = drawn_selection(&location, &menu)
        .into_iter()
        .filter(|(_, s)| *s)
        .map(|(p, _)| p)
        .collect();
    assert_eq!(selected, vec!["/contacts"]);

    // Routing selection is untouched by the hover
    let inbox = ToggleSelectionInput::link("/inbox").compare_to_first_path();
    assert!(inbox.resolve(&location).selected);

    menu.leave();
    let selected: Vec<_> = drawn_selection(&location, &menu)
        .into_iter()
        .filter(|(_, s)| *s)
        .map(|(p, _)| p)
        .collect();
    assert_eq!(selected, vec!["/inbox"]);
}

#[test]
fn keep_search_link_carries_query_and_stays_selected() {
    let location = at("/contacts?tab=2");
    let resolved = ToggleSelectionInput::link("/contacts")
        .keep_search()
        .resolve(&location);

    assert_eq!(
        resolved.kind,
        ElementKind::Link {
            href: "/contacts?tab=2".to_string()
        }
    );
    assert!(resolved.selected);
}

#[test]
fn exact_and_first_segment_modes_differ_on_nested_paths() {
    let location = at("/inbox/42");
    assert!(!ToggleSelectionInput::link("/inbox").resolve(&location).selected);
    assert!(
        ToggleSelectionInput::link("/inbox")
            .compare_to_first_path()
            .resolve(&location)
            .selected
    );
}

#[test]
fn explicit_flag_wins_and_empty_target_is_a_button() {
    let location = at("/reviews?stars=4");

    let filter = ToggleSelectionInput::link("/reviews?stars=5").with_selected(false);
    assert!(!filter.resolve(&location).selected);

    let empty = ToggleSelectionInput::link("").with_selected(true);
    let resolved = empty.resolve(&location);
    assert_eq!(resolved.kind, ElementKind::Button);
    assert!(resolved.selected);
}

#[test]
fn hovered_entry_is_drawn_selected_through_visual_override() {
    let location = at("/inbox");
    let mut menu = MenuSelection::default();
    menu.hover("/");
    let baseline = baseline_path(NAV_ROUTES, location.path());

    let resolved = ToggleSelectionInput::link("/")
        .compare_to_first_path()
        .resolve(&location);
    let mut tracker = InteractionTracker::default();
    tracker.apply(InteractionEvent::PointerEnter { buttons_held: false }, false);

    let state = tracker
        .snapshot(false, resolved.selected)
        .with_visual_override(Some(menu.is_visually_selected(baseline, "/")));
    assert_eq!(
        state.active_attributes(),
        vec![StyleFlag::Hovered.attribute(), StyleFlag::Selected.attribute()]
    );
}

struct Body {
    callback: Rc<RefCell<Option<ResizeCallback>>>,
}

impl ResizeSource for Body {
    type Subscription = ();

    fn observe(&self, on_resize: ResizeCallback) -> Option<()> {
        *self.callback.borrow_mut() = Some(on_resize);
        Some(())
    }

    fn unobserve(&self, _: ()) {
        self.callback.borrow_mut().take();
    }
}

#[derive(Clone, Default)]
struct Store {
    state: Rc<RefCell<ViewportState>>,
    writes: Rc<RefCell<usize>>,
}

impl SizeStore for Store {
    fn current(&self) -> ViewportState {
        *self.state.borrow()
    }

    fn store(&mut self, next: ViewportState) {
        *self.state.borrow_mut() = next;
        *self.writes.borrow_mut() += 1;
    }
}

#[test]
fn resize_observer_feeds_navigation_breakpoints() {
    let callback = Rc::new(RefCell::new(None));
    let store = Store::default();
    let watch = SizeWatch::width(Some(NavBreakpoints::default().collapse));

    let mut sink = store.clone();
    let guard = ObserverGuard::attach(
        Body {
            callback: callback.clone(),
        },
        move |size| {
            watch.record(&mut sink, size);
        },
    );
    assert!(guard.is_attached());

    let emit = |width: f64| {
        if let Some(cb) = callback.borrow_mut().as_mut() {
            cb(ViewportSize::new(width, 600.0));
        }
    };

    emit(1024.0);
    emit(1024.0);
    assert_eq!(*store.writes.borrow(), 1);
    assert!(store.current().is_above_breakpoint);

    emit(640.0);
    assert_eq!(*store.writes.borrow(), 2);
    assert!(!store.current().is_above_breakpoint);

    drop(guard);
    emit(1400.0);
    assert_eq!(*store.writes.borrow(), 2);
    assert_eq!(store.current().size.width, 640.0);
}
