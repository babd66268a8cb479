use alloc::rc::{Rc, Weak};
use core::cell::RefCell;
use core::fmt;

use scroll_window::{OptionsError, ScrollWindow, ScrollWindowOptions, ViewportGeometry};

use crate::{ScrollRegion, SubscriptionId, TriggerListener};

/// A callback fired with every newly published window.
pub type OnWindowChange = Rc<dyn Fn(ScrollWindow)>;

/// Bridges a region's scroll triggers to window recomputation.
///
/// The tracker holds the latest [`ScrollWindow`] as published state. Adapters drive it with:
/// - [`ScrollTracker::attach`] when the region mounts (or is swapped for another one)
/// - [`ScrollTracker::detach`] on teardown; dropping the tracker detaches as well
/// - [`ScrollTracker::set_options`] / [`ScrollTracker::set_item_count`] when the list changes
///
/// While attached, every trigger from the region recomputes the window. A new window is
/// published only when it differs from the previous one, so sub-pixel jitter and cross-axis
/// scrolling produce no downstream work.
pub struct ScrollTracker<R: ScrollRegion> {
    state: Rc<RefCell<TrackerState<R>>>,
}

struct TrackerState<R> {
    region: Option<Rc<R>>,
    subscription: Option<SubscriptionId>,
    // Bumped on every attach; listeners from earlier attaches are ignored.
    generation: u64,
    // Set on attach until the first successful computation.
    fresh: bool,
    pending: bool,
    // Set while the host's `geometry()` runs; triggers delivered meanwhile are dropped.
    reading: bool,
    options: ScrollWindowOptions,
    item_count: usize,
    window: ScrollWindow,
    geometry: Option<ViewportGeometry>,
    on_window_change: Option<OnWindowChange>,
}

impl<R: ScrollRegion + 'static> ScrollTracker<R> {
    /// Creates a detached tracker.
    pub fn new(options: ScrollWindowOptions, item_count: usize) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self {
            state: Rc::new(RefCell::new(TrackerState {
                region: None,
                subscription: None,
                generation: 0,
                fresh: false,
                pending: false,
                reading: false,
                options,
                item_count,
                window: ScrollWindow::EMPTY,
                geometry: None,
                on_window_change: None,
            })),
        })
    }

    pub fn with_on_window_change(mut self, f: impl Fn(ScrollWindow) + 'static) -> Self {
        self.set_on_window_change(Some(f));
        self
    }

    pub fn set_on_window_change(&mut self, f: Option<impl Fn(ScrollWindow) + 'static>) {
        self.state.borrow_mut().on_window_change = f.map(|f| Rc::new(f) as _);
    }

    /// Subscribes to `region` and computes the initial window right away.
    ///
    /// Attaching while already attached detaches from the previous region first. If the region
    /// has no geometry yet, the subscription is kept and the first trigger that finds geometry
    /// performs the initial computation.
    pub fn attach(&mut self, region: R) {
        self.detach();

        let generation = {
            let mut state = self.state.borrow_mut();
            state.generation = state.generation.wrapping_add(1);
            state.generation
        };
        let weak = Rc::downgrade(&self.state);
        let listener: TriggerListener = Rc::new(move || {
            if let Some(state) = Weak::upgrade(&weak) {
                recompute(&state, Some(generation));
            }
        });
        let id = region.subscribe(listener);

        {
            let mut state = self.state.borrow_mut();
            state.region = Some(Rc::new(region));
            state.subscription = Some(id);
            state.fresh = true;
            state.pending = false;
        }
        swdebug!(generation, "ScrollTracker::attach");
        recompute(&self.state, None);
    }

    /// Recomputes from the attached region's current geometry.
    ///
    /// Returns `true` if a new window was published. Without an attached region this does
    /// nothing.
    pub fn on_trigger(&self) -> bool {
        recompute(&self.state, None)
    }

    /// Replaces the options and recomputes.
    pub fn set_options(&mut self, options: ScrollWindowOptions) -> Result<(), OptionsError> {
        options.validate()?;
        self.state.borrow_mut().options = options;
        recompute(&self.state, None);
        Ok(())
    }

    /// Updates the item count (e.g. after the list was replaced) and recomputes.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.state.borrow_mut().item_count = item_count;
        recompute(&self.state, None);
    }

    pub fn window(&self) -> ScrollWindow {
        self.state.borrow().window
    }

    /// The geometry read by the last successful computation.
    pub fn geometry(&self) -> Option<ViewportGeometry> {
        self.state.borrow().geometry
    }

    pub fn options(&self) -> ScrollWindowOptions {
        self.state.borrow().options
    }

    pub fn item_count(&self) -> usize {
        self.state.borrow().item_count
    }

    pub fn is_attached(&self) -> bool {
        self.state.borrow().subscription.is_some()
    }

    /// Returns `true` while attached to a region that has not provided geometry yet.
    pub fn is_pending(&self) -> bool {
        self.state.borrow().pending
    }
}

impl<R: ScrollRegion> ScrollTracker<R> {
    /// Releases the subscription. Calling this again (or on a detached tracker) is a no-op.
    ///
    /// The last published window is kept.
    pub fn detach(&mut self) {
        let (region, subscription) = {
            let mut state = self.state.borrow_mut();
            state.pending = false;
            state.fresh = false;
            (state.region.take(), state.subscription.take())
        };
        if let (Some(region), Some(id)) = (region, subscription) {
            swdebug!(subscription = id.0, "ScrollTracker::detach");
            region.unsubscribe(id);
        }
    }
}

fn recompute<R: ScrollRegion>(state: &Rc<RefCell<TrackerState<R>>>, from: Option<u64>) -> bool {
    let region = {
        let mut state = state.borrow_mut();
        if from.is_some_and(|generation| generation != state.generation) {
            swtrace!("ignoring trigger from a previous attach");
            return false;
        }
        if state.reading {
            // The host flushed a trigger from inside `geometry()`; the outer read covers it.
            swtrace!("ignoring trigger delivered while reading geometry");
            return false;
        }
        let Some(region) = state.region.clone() else {
            return false;
        };
        state.reading = true;
        region
    };

    // Host code runs without any tracker borrow held.
    let geometry = region.geometry();

    let (window, on_change) = {
        let mut state = state.borrow_mut();
        state.reading = false;
        if !state
            .region
            .as_ref()
            .is_some_and(|current| Rc::ptr_eq(current, &region))
        {
            return false;
        }
        let Some(geometry) = geometry else {
            if !state.pending {
                swdebug!("region has no geometry yet, deferring");
            }
            state.pending = true;
            return false;
        };

        let next = state.options.window_for(geometry, state.item_count);
        let force = state.fresh;
        state.geometry = Some(geometry);
        state.pending = false;
        state.fresh = false;
        if next == state.window && !force {
            return false;
        }
        state.window = next;
        (next, state.on_window_change.clone())
    };

    swtrace!(
        first_index = window.first_index,
        last_index = window.last_index,
        "publish window"
    );
    // Called without holding the borrow so observers may query the tracker.
    if let Some(on_change) = on_change {
        on_change(window);
    }
    true
}

impl<R: ScrollRegion> Drop for ScrollTracker<R> {
    fn drop(&mut self) {
        self.detach();
    }
}

impl<R: ScrollRegion> fmt::Debug for ScrollTracker<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ScrollTracker")
            .field("attached", &state.subscription.is_some())
            .field("pending", &state.pending)
            .field("options", &state.options)
            .field("item_count", &state.item_count)
            .field("window", &state.window)
            .field("geometry", &state.geometry)
            .finish_non_exhaustive()
    }
}
