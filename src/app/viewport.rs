//! Screen size hooks backed by a `ResizeObserver` on the document body.
//!
//! Each hook instance owns one observer. It is attached after mount and
//! detached when the component unmounts.

use dioxus::prelude::*;

use crate::viewport::{SizeStore, SizeWatch, ViewportState};

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

impl SizeStore for Signal<ViewportState> {
    fn current(&self) -> ViewportState {
        *self.peek()
    }

    fn store(&mut self, next: ViewportState) {
        self.set(next);
    }
}

/// Width of the document body, optionally compared to a breakpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenWidth {
    pub width: f64,
    pub is_above_breakpoint: bool,
}

/// Observe the body width. `breakpoint` enables `is_above_breakpoint`.
pub fn use_screen_width(breakpoint: Option<f64>) -> ScreenWidth {
    let state = use_observed_size(SizeWatch::width(breakpoint));
    let current = state();
    ScreenWidth {
        width: current.size.width,
        is_above_breakpoint: current.is_above_breakpoint,
    }
}

/// Observe the body height.
pub fn use_screen_height() -> f64 {
    let state = use_observed_size(SizeWatch::height());
    state().size.height
}

fn use_observed_size(watch: SizeWatch) -> Signal<ViewportState> {
    let state = use_signal(ViewportState::default);

    // Client-side only: attach a ResizeObserver to the body
    #[cfg(target_arch = "wasm32")]
    {
        use crate::viewport::ObserverGuard;

        // Guard persists across renders and detaches the observer on unmount
        let guard: Rc<RefCell<Option<ObserverGuard<body::BodySource>>>> =
            use_hook(|| Rc::new(RefCell::new(None)));

        let attach = guard.clone();
        use_effect(move || {
            if attach.borrow().is_some() {
                return;
            }
            let mut store = state;
            *attach.borrow_mut() = Some(ObserverGuard::attach(body::BodySource, move |size| {
                watch.record(&mut store, size);
            }));
        });

        use_drop(move || {
            guard.borrow_mut().take();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = watch;

    state
}

#[cfg(target_arch = "wasm32")]
mod body {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlElement, ResizeObserver, ResizeObserverEntry};

    use crate::viewport::{ResizeCallback, ResizeSource, ViewportSize};

    /// The document body as a resize source.
    pub struct BodySource;

    /// Live observer; the closure must outlive it.
    pub struct BodySubscription {
        observer: ResizeObserver,
        element: HtmlElement,
        _callback: Closure<dyn FnMut(js_sys::Array, ResizeObserver)>,
    }

    impl ResizeSource for BodySource {
        type Subscription = BodySubscription;

        fn observe(&self, mut on_resize: ResizeCallback) -> Option<BodySubscription> {
            let element = web_sys::window()?.document()?.body()?;

            let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: ResizeObserver| {
                let Some(entry) = entries
                    .get(0)
                    .dyn_into::<ResizeObserverEntry>()
                    .ok()
                else {
                    return;
                };
                let rect = entry.content_rect();
                on_resize(ViewportSize::new(rect.width(), rect.height()));
            }) as Box<dyn FnMut(js_sys::Array, ResizeObserver)>);

            let observer = match ResizeObserver::new(callback.as_ref().unchecked_ref()) {
                Ok(observer) => observer,
                Err(e) => {
                    tracing::warn!("Failed to create ResizeObserver: {:?}", e);
                    return None;
                }
            };
            observer.observe(&element);
            tracing::debug!("ResizeObserver attached to body");

            Some(BodySubscription {
                observer,
                element,
                _callback: callback,
            })
        }

        fn unobserve(&self, subscription: BodySubscription) {
            subscription.observer.unobserve(&subscription.element);
            subscription.observer.disconnect();
            tracing::debug!("ResizeObserver detached from body");
        }
    }
}
