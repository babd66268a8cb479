//! Windowing math for rendering only the visible slice of a long, uniform-height list.
//!
//! For scroll tracking, slice projection and render plans, see the `scroll-window-adapter`
//! crate.
//!
//! Given a scroll offset, a viewport height, an item height and a buffer factor, this crate
//! computes which contiguous index range `[first_index, last_index)` of the full list has to be
//! rendered, plus the pixel offset that keeps the rendered block aligned with its true position
//! in a fully rendered list.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport geometry (`scroll_top`, `client_height`)
//! - the item count and a uniform item height
//! - a place to paint the resulting slice at [`ScrollWindow::element_offset_height`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod options;
mod state;
mod types;
mod window;


pub use error::OptionsError;
pub use options::{DEFAULT_CONTAINER_BUFFER_SIZE, ScrollWindowOptions};
pub use state::ViewportGeometry;
pub use types::ScrollWindow;
pub use window::{compute_window, compute_window_for};
