//! Browser host tree over `web_sys::Document`.

use cfit_core::{BufferSize, ComputedSize, ContentBox, UiTree, parse_length};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, Window};

/// The live document of a browser window.
pub struct DomTree {
    window: Window,
    document: Document,
}

impl DomTree {
    pub fn from_window(window: Window) -> Option<Self> {
        let document = window.document()?;
        Some(Self { window, document })
    }

    /// The global `window` / `document` pair, if running in a browser page.
    pub fn current() -> Option<Self> {
        web_sys::window().and_then(Self::from_window)
    }

    pub fn device_pixel_ratio(&self) -> f64 {
        self.window.device_pixel_ratio()
    }

    /// A computed-style property, or "" when the host cannot report one.
    fn property(&self, element: &Element, name: &str) -> String {
        self.window
            .get_computed_style(element)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value(name).ok())
            .unwrap_or_default()
    }

    /// Sum of two padding properties; unparseable padding counts as 0.
    fn padding(&self, element: &Element, a: &str, b: &str) -> f64 {
        let side = |name| parse_length(&self.property(element, name)).unwrap_or(0.0);
        side(a) + side(b)
    }
}

impl UiTree for DomTree {
    type Element = HtmlCanvasElement;

    /// Non-canvas elements with a matching id count as absent.
    fn element_by_id(&self, id: &str) -> Option<HtmlCanvasElement> {
        self.document
            .get_element_by_id(id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()
    }

    fn computed_size(&self, element: &HtmlCanvasElement) -> ComputedSize {
        ComputedSize::new(
            self.property(element, "width"),
            self.property(element, "height"),
        )
    }

    fn parent_content_box(&self, element: &HtmlCanvasElement) -> Option<ContentBox> {
        let parent = element.parent_element()?;
        let width = content_from_client(
            parent.client_width(),
            self.padding(&parent, "padding-left", "padding-right"),
        );
        let height = content_from_client(
            parent.client_height(),
            self.padding(&parent, "padding-top", "padding-bottom"),
        );
        Some(ContentBox::new(width, height))
    }

    fn set_buffer_size(&mut self, element: &HtmlCanvasElement, size: BufferSize) {
        element.set_width(size.width);
        element.set_height(size.height);
    }
}

/// Content size along one axis from `clientWidth`/`clientHeight`, which
/// include padding but not borders or scrollbars. Never negative.
fn content_from_client(client: i32, padding: f64) -> f64 {
    (f64::from(client) - padding).max(0.0)
}
