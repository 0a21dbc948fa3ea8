//! Viewport size observation.
//!
//! A [`ResizeSource`] reports content-box measurements of one element. An
//! [`ObserverGuard`] owns the subscription for exactly as long as the guard is
//! alive, and [`SizeWatch`] decides whether a measurement is worth storing.

/// Content-box size of the observed element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Stored viewport state for one observer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportState {
    pub size: ViewportSize,
    pub is_above_breakpoint: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

/// Somewhere viewport state lives (a reactive signal in the UI).
pub trait SizeStore {
    fn current(&self) -> ViewportState;
    fn store(&mut self, next: ViewportState);
}

/// Which dimension an observer tracks, plus an optional width breakpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeWatch {
    pub axis: Axis,
    pub breakpoint: Option<f64>,
}

impl SizeWatch {
    pub fn width(breakpoint: Option<f64>) -> Self {
        Self {
            axis: Axis::Width,
            breakpoint,
        }
    }

    pub fn height() -> Self {
        Self {
            axis: Axis::Height,
            breakpoint: None,
        }
    }

    /// State after `measured`, or `None` when the tracked dimension is unchanged.
    pub fn next_state(&self, current: ViewportState, measured: ViewportSize) -> Option<ViewportState> {
        let mut next = current;
        match self.axis {
            Axis::Width => {
                if current.size.width == measured.width {
                    return None;
                }
                next.size.width = measured.width;
                if let Some(breakpoint) = self.breakpoint {
                    next.is_above_breakpoint = measured.width >= breakpoint;
                }
            }
            Axis::Height => {
                if current.size.height == measured.height {
                    return None;
                }
                next.size.height = measured.height;
            }
        }
        Some(next)
    }

    /// Store `measured` if it changes the tracked dimension. Returns whether a
    /// write happened.
    pub fn record<S: SizeStore>(&self, store: &mut S, measured: ViewportSize) -> bool {
        match self.next_state(store.current(), measured) {
            Some(next) => {
                store.store(next);
                true
            }
            None => false,
        }
    }
}

/// Callback invoked with each new measurement.
pub type ResizeCallback = Box<dyn FnMut(ViewportSize)>;

/// An element that can be observed for size changes.
pub trait ResizeSource {
    type Subscription;

    /// Start observing. Returns `None` when there is nothing to observe.
    fn observe(&self, on_resize: ResizeCallback) -> Option<Self::Subscription>;

    fn unobserve(&self, subscription: Self::Subscription);
}

/// Keeps a resize subscription alive; detaches it on drop.
pub struct ObserverGuard<S: ResizeSource> {
    source: S,
    subscription: Option<S::Subscription>,
}

impl<S: ResizeSource> ObserverGuard<S> {
    pub fn attach(source: S, on_resize: impl FnMut(ViewportSize) + 'static) -> Self {
        let subscription = source.observe(Box::new(on_resize));
        if subscription.is_none() {
            tracing::debug!("Resize target absent, observation skipped");
        }
        Self {
            source,
            subscription,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }
}

impl<S: ResizeSource> Drop for ObserverGuard<S> {
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.source.unobserve(subscription);
        }
    }
}
