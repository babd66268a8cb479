use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use scroll_window::ScrollWindow;

/// Framework-neutral element attributes: plain attributes plus inline style properties.
///
/// Keys are kept sorted so render output is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementAttrs {
    pub attrs: BTreeMap<String, String>,
    pub style: BTreeMap<String, String>,
}

impl ElementAttrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(key.into(), value.into());
        self
    }

    pub fn set_style(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.style.insert(key.into(), value.into());
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn style(&self, key: &str) -> Option<&str> {
        self.style.get(key).map(String::as_str)
    }

    /// Layers `self` over `base`: keys present in `self` win, both for attributes and styles.
    pub fn merge_over(&self, base: &ElementAttrs) -> ElementAttrs {
        let mut merged = base.clone();
        merged
            .attrs
            .extend(self.attrs.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
            .style
            .extend(self.style.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }
}

/// The outer scrollable block: fills its parent and scrolls vertically.
pub fn default_container_style() -> ElementAttrs {
    ElementAttrs::new()
        .with_style("overflow-y", "scroll")
        .with_style("height", "100%")
        .with_style("width", "100%")
}

/// The transform that places the rendered block at `offset` pixels from the top.
pub fn translate_y(offset: f64) -> String {
    format!("translateY({offset}px)")
}

/// One item of the rendered slice, ready to paint.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedItem<'a, T> {
    /// Index in the full list.
    pub index: usize,
    /// Index in the rendered slice (what `get_child_props` receives).
    pub slice_index: usize,
    /// Wrapper attributes, including the `transform` style.
    pub attrs: ElementAttrs,
    pub item: &'a T,
}

/// Everything a renderer needs to paint one frame of the list.
///
/// Paint the container with [`RenderPlan::container`], put a spacer of
/// [`RenderPlan::spacer_height`] inside it so the scrollbar covers the whole list, and paint
/// [`RenderPlan::items`] inside the spacer.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderPlan<'a, T> {
    pub container: ElementAttrs,
    pub spacer_height: f64,
    pub window: ScrollWindow,
    pub items: Vec<RenderedItem<'a, T>>,
}

impl<T> RenderPlan<'_, T> {
    /// Attributes for the spacer element.
    pub fn spacer_attrs(&self) -> ElementAttrs {
        ElementAttrs::new().with_style("height", format!("{}px", self.spacer_height))
    }
}

/// Wraps every item of `slice` with its attributes and the window's translation.
///
/// `get_child_props` receives each item with its index in the slice. Whatever it returns, the
/// `transform` style is overwritten so every rendered item sits at
/// [`ScrollWindow::element_offset_height`].
pub fn decorate<'a, T>(
    slice: &'a [T],
    window: &ScrollWindow,
    get_child_props: Option<&dyn Fn(&T, usize) -> ElementAttrs>,
) -> Vec<RenderedItem<'a, T>> {
    let transform = translate_y(window.element_offset_height);
    slice
        .iter()
        .enumerate()
        .map(|(slice_index, item)| {
            let mut attrs = match get_child_props {
                Some(f) => f(item, slice_index),
                None => ElementAttrs::new(),
            };
            attrs.set_style("transform", transform.clone());
            RenderedItem {
                index: window.first_index + slice_index,
                slice_index,
                attrs,
                item,
            }
        })
        .collect()
}
