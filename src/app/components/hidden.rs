//! Subtree-wide hide switch for toggle buttons.
//!
//! Buttons below a [`HiddenScope`] with `hidden: true` render nothing while
//! keeping their hook state, so showing them again restores it. The nearest
//! scope wins.

use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct HiddenContext(ReadSignal<bool>);

/// Provide the hide switch to every toggle button in `children`.
#[component]
pub fn HiddenScope(hidden: ReadSignal<bool>, children: Element) -> Element {
    use_context_provider(|| HiddenContext(hidden));

    rsx! {
        {children}
    }
}

/// Whether the caller sits inside a hidden scope. Subscribes to changes.
pub fn use_hidden() -> bool {
    try_use_context::<HiddenContext>().is_some_and(|HiddenContext(hidden)| hidden())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Seen(Rc<Cell<Option<bool>>>);

    impl PartialEq for Seen {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.0, &other.0)
        }
    }

    #[component]
    fn Reader(seen: Seen) -> Element {
        seen.0.set(Some(use_hidden()));
        rsx! {}
    }

    fn render(app: fn(Seen) -> Element) -> Option<bool> {
        let seen = Seen::default();
        let mut dom = VirtualDom::new_with_props(app, seen.clone());
        dom.rebuild_in_place();
        seen.0.get()
    }

    #[test]
    fn test_visible_without_scope() {
        fn app(seen: Seen) -> Element {
            rsx! { Reader { seen } }
        }
        assert_eq!(render(app), Some(false));
    }

    #[test]
    fn test_hidden_scope_hides_descendants() {
        fn app(seen: Seen) -> Element {
            rsx! {
                HiddenScope { hidden: true,
                    div { Reader { seen } }
                }
            }
        }
        assert_eq!(render(app), Some(true));
    }

    #[test]
    fn test_nearest_scope_wins() {
        fn app(seen: Seen) -> Element {
            rsx! {
                HiddenScope { hidden: true,
                    HiddenScope { hidden: false,
                        Reader { seen }
                    }
                }
            }
        }
        assert_eq!(render(app), Some(false));
    }
}
