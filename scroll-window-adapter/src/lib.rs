//! Adapter utilities for the `scroll-window` crate.
//!
//! `scroll-window` is pure math: it turns geometry into a [`ScrollWindow`]. This crate provides
//! the framework-neutral plumbing an embedding UI needs around it:
//!
//! - [`ScrollRegion`]: the host seam (geometry on demand plus a scroll-trigger stream)
//! - [`ScrollTracker`]: a scoped subscription that recomputes and publishes the window
//! - [`Projector`]: slices the item list and tells observers when the slice changes
//! - [`RenderPlan`]: container attributes, spacer height and translated items to paint
//! - [`VirtualScrollContainer`]: all of the above wired together
//!
//! Everything here is single-threaded; scroll triggers are handled synchronously in delivery
//! order. This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
//!
//! [`ScrollWindow`]: scroll_window::ScrollWindow
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod container;
mod projector;
mod region;
mod render;
mod tracker;


pub use container::{GetChildProps, SCROLL_EVENT, VirtualScrollContainer};
pub use projector::{OnChildrenRendered, Projector, project};
pub use region::{ManualRegion, ScrollRegion, SubscriptionId, TriggerListener};
pub use render::{
    ElementAttrs, RenderPlan, RenderedItem, decorate, default_container_style, translate_y,
};
pub use tracker::{OnWindowChange, ScrollTracker};
