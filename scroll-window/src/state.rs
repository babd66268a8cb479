/// A snapshot of the scrollable region's geometry, read on every recomputation.
///
/// The host owns the real values; this type is never cached as authoritative state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportGeometry {
    /// Distance scrolled from the top of the content, in pixels.
    pub scroll_top: f64,
    /// Visible height of the region, in pixels.
    pub client_height: f64,
}

impl ViewportGeometry {
    pub fn new(scroll_top: f64, client_height: f64) -> Self {
        Self {
            scroll_top,
            client_height,
        }
    }

    /// Returns `true` once the region has a usable (positive, finite) height.
    pub fn is_laid_out(&self) -> bool {
        self.client_height.is_finite() && self.client_height > 0.0
    }

    pub fn with_scroll_top(self, scroll_top: f64) -> Self {
        Self { scroll_top, ..self }
    }
}
