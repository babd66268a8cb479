use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use scroll_window::{OptionsError, ScrollWindow, ScrollWindowOptions};

use crate::{
    ElementAttrs, Projector, RenderPlan, ScrollRegion, ScrollTracker, decorate,
    default_container_style,
};

/// The host event that should be routed to the region's trigger stream.
pub const SCROLL_EVENT: &str = "scroll";

/// Generates wrapper attributes for an item, given its index in the rendered slice.
pub type GetChildProps<T> = Rc<dyn Fn(&T, usize) -> ElementAttrs>;

/// A windowed list: items, options, a [`ScrollTracker`] and a [`Projector`] wired together.
///
/// Typical frame loop for an adapter:
/// - `attach(region)` once the scroll container exists
/// - route host scroll events to the region's trigger stream (or call `on_trigger`)
/// - call `render()` and paint the returned [`RenderPlan`]
///
/// `render()` is where the projector runs, so `on_children_rendered` fires from there, with the
/// slice being rendered.
pub struct VirtualScrollContainer<T, R: ScrollRegion> {
    items: Vec<T>,
    tracker: ScrollTracker<R>,
    projector: Projector<T>,
    get_child_props: Option<GetChildProps<T>>,
    container_props: Option<ElementAttrs>,
}

impl<T, R: ScrollRegion + 'static> VirtualScrollContainer<T, R> {
    pub fn new(items: Vec<T>, options: ScrollWindowOptions) -> Result<Self, OptionsError> {
        let tracker = ScrollTracker::new(options, items.len())?;
        Ok(Self {
            items,
            tracker,
            projector: Projector::new(),
            get_child_props: None,
            container_props: None,
        })
    }

    pub fn with_get_child_props(
        mut self,
        f: impl Fn(&T, usize) -> ElementAttrs + 'static,
    ) -> Self {
        self.get_child_props = Some(Rc::new(f));
        self
    }

    pub fn with_on_children_rendered(mut self, f: impl FnMut(&[T]) + 'static) -> Self {
        self.projector.set_on_children_rendered(Some(f));
        self
    }

    /// Extra attributes for the outer scrollable element, merged over
    /// [`default_container_style`].
    pub fn with_container_props(mut self, props: ElementAttrs) -> Self {
        self.container_props = Some(props);
        self
    }

    pub fn with_on_window_change(mut self, f: impl Fn(ScrollWindow) + 'static) -> Self {
        self.tracker.set_on_window_change(Some(f));
        self
    }

    pub fn attach(&mut self, region: R) {
        self.tracker.attach(region);
    }

    pub fn detach(&mut self) {
        self.tracker.detach();
    }

    /// See [`ScrollTracker::on_trigger`].
    pub fn on_trigger(&self) -> bool {
        self.tracker.on_trigger()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Replaces the item list and recomputes the window for the new length.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.projector.invalidate();
        self.tracker.set_item_count(self.items.len());
    }

    pub fn set_options(&mut self, options: ScrollWindowOptions) -> Result<(), OptionsError> {
        self.tracker.set_options(options)
    }

    pub fn set_container_props(&mut self, props: Option<ElementAttrs>) {
        self.container_props = props;
    }

    pub fn window(&self) -> ScrollWindow {
        self.tracker.window()
    }

    pub fn tracker(&self) -> &ScrollTracker<R> {
        &self.tracker
    }

    /// Total height of the fully rendered list.
    pub fn spacer_height(&self) -> f64 {
        self.tracker.options().total_height(self.items.len())
    }

    /// Attributes for the outer scrollable element.
    pub fn container_attrs(&self) -> ElementAttrs {
        let base = default_container_style();
        match &self.container_props {
            Some(props) => props.merge_over(&base),
            None => base,
        }
    }

    /// Projects the current window onto the items, notifying the observer on change.
    pub fn rendered_children(&mut self) -> &[T] {
        let window = self.tracker.window();
        self.projector.project(&self.items, &window)
    }

    /// Builds the paint description for the current window.
    pub fn render(&mut self) -> RenderPlan<'_, T> {
        let window = self.tracker.window();
        let container = self.container_attrs();
        let spacer_height = self.spacer_height();
        let slice = self.projector.project(&self.items, &window);
        let items = decorate(slice, &window, self.get_child_props.as_deref());
        RenderPlan {
            container,
            spacer_height,
            window,
            items,
        }
    }
}

impl<T, R: ScrollRegion> fmt::Debug for VirtualScrollContainer<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualScrollContainer")
            .field("items", &self.items.len())
            .field("tracker", &self.tracker)
            .field("projector", &self.projector)
            .field("container_props", &self.container_props)
            .finish_non_exhaustive()
    }
}
