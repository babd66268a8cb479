use core::ops::Range;

/// The contiguous slice of a list that has to be rendered, plus the translation that puts it in
/// place.
///
/// A window is a plain value: it is recomputed from scratch on every scroll trigger and compared
/// by value. It upholds `0 <= first_index <= last_index <= item_count` and
/// `element_offset_height == first_index * item_height` for the inputs it was computed from.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollWindow {
    pub first_index: usize,
    pub last_index: usize, // exclusive
    /// Pixel distance to translate the rendered block by.
    pub element_offset_height: f64,
}

impl ScrollWindow {
    /// A window that renders nothing.
    pub const EMPTY: Self = Self {
        first_index: 0,
        last_index: 0,
        element_offset_height: 0.0,
    };

    pub fn len(&self) -> usize {
        self.last_index.saturating_sub(self.first_index)
    }

    pub fn is_empty(&self) -> bool {
        self.first_index >= self.last_index
    }

    pub fn range(&self) -> Range<usize> {
        self.first_index..self.last_index
    }

    pub fn contains(&self, index: usize) -> bool {
        self.range().contains(&index)
    }
}
