//! Host UI tree abstraction.
//!
//! The resolver never reaches into a global document. The host passes its
//! tree in through `UiTree`, implemented differently by each environment:
//! - WASM: `web_sys::Document` + `Window::get_computed_style`
//! - tests / headless hosts: `MemoryTree`

use crate::style::ComputedSize;

/// Content-box size of a container, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentBox {
    pub width: f64,
    pub height: f64,
}

impl ContentBox {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Backing pixel-buffer size of a drawable surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BufferSize {
    pub width: u32,
    pub height: u32,
}

impl BufferSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A document-like tree of canvas-bearing elements.
///
/// `Element` is a handle borrowed from the host; the tree keeps ownership
/// of the element itself.
pub trait UiTree {
    type Element;

    /// Find a canvas-bearing element by identifier.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Computed layout `width` / `height` of an element.
    fn computed_size(&self, element: &Self::Element) -> ComputedSize;

    /// Content box of the element's parent container, if it has one.
    fn parent_content_box(&self, element: &Self::Element) -> Option<ContentBox>;

    /// Overwrite the element's backing pixel-buffer size.
    fn set_buffer_size(&mut self, element: &Self::Element, size: BufferSize);
}
