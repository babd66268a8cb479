use alloc::boxed::Box;
use core::fmt;
use core::ops::Range;

use scroll_window::ScrollWindow;

/// Observer invoked with the newly rendered slice whenever it changes.
pub type OnChildrenRendered<T> = Box<dyn FnMut(&[T])>;

/// Returns `items[first_index..last_index]`, clamped to the list.
pub fn project<'a, T>(items: &'a [T], window: &ScrollWindow) -> &'a [T] {
    &items[clamped_range(window, items.len())]
}

fn clamped_range(window: &ScrollWindow, len: usize) -> Range<usize> {
    if window.first_index > window.last_index {
        swwarn!(
            first_index = window.first_index,
            last_index = window.last_index,
            "Projector: inverted window"
        );
        debug_assert!(
            window.first_index <= window.last_index,
            "Projector: inverted window (first={}, last={})",
            window.first_index,
            window.last_index
        );
    }
    let end = window.last_index.min(len);
    let start = window.first_index.min(end);
    start..end
}

/// Projects windows onto an item list and reports slice changes.
///
/// Slices are compared by index range only: the item contents are never inspected. When the
/// list itself is replaced, call [`Projector::invalidate`] so the next projection reports it.
pub struct Projector<T> {
    last: Option<Range<usize>>,
    on_children_rendered: Option<OnChildrenRendered<T>>,
}

impl<T> Default for Projector<T> {
    fn default() -> Self {
        Self {
            last: None,
            on_children_rendered: None,
        }
    }
}

impl<T> Projector<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_on_children_rendered(mut self, f: impl FnMut(&[T]) + 'static) -> Self {
        self.on_children_rendered = Some(Box::new(f));
        self
    }

    pub fn set_on_children_rendered(&mut self, f: Option<impl FnMut(&[T]) + 'static>) {
        self.on_children_rendered = f.map(|f| Box::new(f) as _);
    }

    /// Slices `items` for `window`, notifying the observer if the range changed since the last
    /// projection.
    ///
    /// The observer always receives the slice computed in this call.
    pub fn project<'a>(&mut self, items: &'a [T], window: &ScrollWindow) -> &'a [T] {
        let range = clamped_range(window, items.len());
        let slice = &items[range.clone()];
        if self.last.as_ref() != Some(&range) {
            swtrace!(start = range.start, end = range.end, "children rendered");
            self.last = Some(range);
            if let Some(observer) = self.on_children_rendered.as_mut() {
                observer(slice);
            }
        }
        slice
    }

    /// Forgets the last projected range, so the next projection notifies.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn last_range(&self) -> Option<Range<usize>> {
        self.last.clone()
    }
}

impl<T> fmt::Debug for Projector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Projector")
            .field("last", &self.last)
            .field("has_observer", &self.on_children_rendered.is_some())
            .finish()
    }
}
