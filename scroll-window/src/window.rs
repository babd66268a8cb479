use crate::{ScrollWindow, ScrollWindowOptions, ViewportGeometry};

/// Computes which slice of a uniform-height list to render.
///
/// The buffer is expressed in viewport-heights: the window starts
/// `(buffer_size - 1) * client_height` pixels before the scroll offset and spans twice that many
/// pixels on top of the visible range, so a buffer of `1.5` keeps half a viewport of items on
/// each side.
///
/// This never panics. Out-of-range input is clamped:
/// - `item_count == 0`, a non-positive `client_height` (not laid out yet) or a non-positive
///   `item_height` yield [`ScrollWindow::EMPTY`].
/// - `buffer_size < 1` (or NaN) behaves as `1`.
/// - Negative or non-finite scroll offsets are treated as `0`.
pub fn compute_window(
    scroll_top: f64,
    client_height: f64,
    item_count: usize,
    item_height: f64,
    buffer_size: f64,
) -> ScrollWindow {
    if item_count == 0 {
        return ScrollWindow::EMPTY;
    }
    if !item_height.is_finite() || item_height <= 0.0 {
        swwarn!(item_height, "compute_window: item height must be positive");
        return ScrollWindow::EMPTY;
    }
    let client_height = non_negative(client_height);
    if client_height == 0.0 {
        return ScrollWindow::EMPTY;
    }
    let scroll_top = non_negative(scroll_top);

    let scroll_top_offset = buffer_offset_factor(buffer_size) * client_height;
    let effective_scroll_top = (scroll_top - scroll_top_offset).max(0.0);
    let first_index = floor_to_usize(effective_scroll_top / item_height).min(item_count);

    let buffer_index_span = (2.0 * scroll_top_offset) / item_height;
    let visible_index_span = ceil_to_usize(client_height / item_height);
    let last_index =
        floor_to_usize(first_index as f64 + buffer_index_span + visible_index_span as f64)
            .clamp(first_index, item_count);

    let window = ScrollWindow {
        first_index,
        last_index,
        element_offset_height: first_index as f64 * item_height,
    };
    swtrace!(
        scroll_top,
        client_height,
        first_index = window.first_index,
        last_index = window.last_index,
        "compute_window"
    );
    window
}

/// Computes the window for a geometry snapshot and a set of options.
pub fn compute_window_for(
    geometry: ViewportGeometry,
    item_count: usize,
    options: &ScrollWindowOptions,
) -> ScrollWindow {
    options.window_for(geometry, item_count)
}

fn buffer_offset_factor(buffer_size: f64) -> f64 {
    if !buffer_size.is_finite() {
        return 0.0;
    }
    (buffer_size - 1.0).max(0.0)
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

// `core` has no `floor`/`ceil` for floats; for non-negative input a saturating cast truncates,
// which is the floor.
fn floor_to_usize(value: f64) -> usize {
    value as usize
}

fn ceil_to_usize(value: f64) -> usize {
    let truncated = value as usize;
    if (truncated as f64) < value {
        truncated.saturating_add(1)
    } else {
        truncated
    }
}
