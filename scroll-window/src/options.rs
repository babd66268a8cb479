use crate::{OptionsError, ScrollWindow, ViewportGeometry, compute_window};

/// Default number of viewport-heights used to size the render buffer.
pub const DEFAULT_CONTAINER_BUFFER_SIZE: f64 = 1.5;

/// Configuration for windowed rendering.
///
/// Every field is re-read on each computation, so updating options and recomputing is all an
/// adapter has to do when the configuration changes.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`; a missing
/// `container_buffer_size` falls back to [`DEFAULT_CONTAINER_BUFFER_SIZE`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollWindowOptions {
    /// Height of every item in pixels, including padding and margin.
    ///
    /// Items that do not adhere to this height make the rendered block drift out of place while
    /// scrolling.
    pub item_height: f64,

    /// How many viewport-heights worth of items to render.
    ///
    /// `1` renders exactly what fits in the viewport, `2` adds a viewport of items before and
    /// another after it. Values below `1` behave as `1`. Larger values hide pop-in during fast scrolling
    /// at the cost of rendering more items.
    #[cfg_attr(feature = "serde", serde(default = "default_container_buffer_size"))]
    pub container_buffer_size: f64,
}

#[cfg(feature = "serde")]
fn default_container_buffer_size() -> f64 {
    DEFAULT_CONTAINER_BUFFER_SIZE
}

impl ScrollWindowOptions {
    /// Creates options for items of `item_height` pixels with the default buffer size.
    pub fn new(item_height: f64) -> Result<Self, OptionsError> {
        let options = Self {
            item_height,
            container_buffer_size: DEFAULT_CONTAINER_BUFFER_SIZE,
        };
        options.validate()?;
        swdebug!(item_height, "ScrollWindowOptions::new");
        Ok(options)
    }

    pub fn with_item_height(mut self, item_height: f64) -> Self {
        self.item_height = item_height;
        self
    }

    pub fn with_container_buffer_size(mut self, container_buffer_size: f64) -> Self {
        self.container_buffer_size = container_buffer_size;
        self
    }

    /// Checks the values an adapter is about to hand to the calculator.
    ///
    /// Buffer sizes below `1` are accepted (they are clamped when used); only non-finite values
    /// are rejected.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.item_height.is_finite() || self.item_height <= 0.0 {
            swwarn!(item_height = self.item_height, "rejecting item height");
            return Err(OptionsError::InvalidItemHeight(self.item_height));
        }
        if !self.container_buffer_size.is_finite() {
            swwarn!(
                container_buffer_size = self.container_buffer_size,
                "rejecting buffer size"
            );
            return Err(OptionsError::InvalidBufferSize(self.container_buffer_size));
        }
        Ok(())
    }

    /// The buffer size actually used by the calculator (never below `1`).
    pub fn effective_buffer_size(&self) -> f64 {
        if self.container_buffer_size.is_finite() {
            self.container_buffer_size.max(1.0)
        } else {
            1.0
        }
    }

    /// Total height of a fully rendered list of `item_count` items.
    ///
    /// Renderers size the inner spacer with this so the scrollbar reflects the whole list.
    pub fn total_height(&self, item_count: usize) -> f64 {
        if !self.item_height.is_finite() || self.item_height <= 0.0 {
            return 0.0;
        }
        item_count as f64 * self.item_height
    }

    /// Computes the window for a geometry snapshot.
    pub fn window_for(&self, geometry: ViewportGeometry, item_count: usize) -> ScrollWindow {
        compute_window(
            geometry.scroll_top,
            geometry.client_height,
            item_count,
            self.item_height,
            self.container_buffer_size,
        )
    }
}
