use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use scroll_window::ViewportGeometry;

/// A callback registered on a region's scroll-trigger stream.
pub type TriggerListener = Rc<dyn Fn()>;

/// Identifies one registration on a [`ScrollRegion`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

/// A stable handle to a host scrollable region.
///
/// Adapters implement this over whatever their UI calls a scroll container (a DOM element, a
/// TUI pane, a GPU scroll view). The tracker only ever:
/// - reads [`ScrollRegion::geometry`] when it recomputes,
/// - registers one listener per attach and removes it again on detach.
pub trait ScrollRegion {
    /// Current geometry, or `None` while the region is not available (not mounted, not laid
    /// out yet).
    ///
    /// Implementations may fire triggers from here (e.g. flushing queued scroll events on a
    /// layout read); the tracker drops those, since the geometry returned covers them.
    fn geometry(&self) -> Option<ViewportGeometry>;

    /// Registers `listener` to be called on every scroll trigger.
    fn subscribe(&self, listener: TriggerListener) -> SubscriptionId;

    /// Removes a registration. Unknown ids are ignored.
    fn unsubscribe(&self, id: SubscriptionId);
}

/// An in-memory [`ScrollRegion`] for tests, simulations and headless hosts.
///
/// Clones share the same region. Geometry updates through [`ManualRegion::set_scroll_top`] and
/// [`ManualRegion::set_geometry`] fire the trigger stream the way a real scroll or layout event
/// would.
#[derive(Clone, Default)]
pub struct ManualRegion {
    inner: Rc<RefCell<ManualRegionInner>>,
}

#[derive(Default)]
struct ManualRegionInner {
    geometry: Option<ViewportGeometry>,
    listeners: Vec<(SubscriptionId, TriggerListener)>,
    next_id: u64,
}

impl ManualRegion {
    /// Creates a region that has not been laid out yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a region with known geometry.
    pub fn with_geometry(geometry: ViewportGeometry) -> Self {
        let region = Self::default();
        region.inner.borrow_mut().geometry = Some(geometry);
        region
    }

    pub fn current_geometry(&self) -> Option<ViewportGeometry> {
        self.inner.borrow().geometry
    }

    /// Replaces the geometry (a layout/resize) and fires the trigger stream.
    pub fn set_geometry(&self, geometry: ViewportGeometry) {
        self.inner.borrow_mut().geometry = Some(geometry);
        self.fire();
    }

    /// Scrolls to `scroll_top` and fires the trigger stream.
    ///
    /// Does nothing but fire if the region has no geometry yet.
    pub fn set_scroll_top(&self, scroll_top: f64) {
        {
            let mut inner = self.inner.borrow_mut();
            if let Some(geometry) = inner.geometry.as_mut() {
                geometry.scroll_top = scroll_top;
            }
        }
        self.fire();
    }

    /// Marks the region as unavailable without notifying anyone.
    pub fn clear_geometry(&self) {
        self.inner.borrow_mut().geometry = None;
    }

    /// Delivers one scroll trigger to every listener, in registration order.
    pub fn fire(&self) {
        // Listeners may (un)subscribe while being called.
        let listeners: Vec<TriggerListener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl ScrollRegion for ManualRegion {
    fn geometry(&self) -> Option<ViewportGeometry> {
        self.current_geometry()
    }

    fn subscribe(&self, listener: TriggerListener) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id = inner.next_id.wrapping_add(1);
        inner.listeners.push((id, listener));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .borrow_mut()
            .listeners
            .retain(|(existing, _)| *existing != id);
    }
}

impl fmt::Debug for ManualRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ManualRegion")
            .field("geometry", &inner.geometry)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}
