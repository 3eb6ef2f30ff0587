//! WASM bridge for canvas-fit: sizes `<canvas>` pixel buffers from layout.
//!
//! Compiled via `wasm-pack build --target web`. JavaScript calls
//! `resolveCanvas("stage")` after layout changes (load, resize) to keep the
//! backing buffer in step with the element's rendered box.

mod dom;

use cfit_core::{CanvasSizeResolver, ResolveOptions};
use dom::DomTree;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// Size the buffer of canvas `#id` to its box size with default options.
///
/// Returns `undefined` when no canvas has that id. Throws a string on
/// computed sizes that are neither `inherit` nor a pixel length.
#[wasm_bindgen(js_name = resolveCanvas)]
pub fn resolve_canvas(id: &str) -> Result<Option<HtmlCanvasElement>, JsValue> {
    resolve_with_options(id, ResolveOptions::default())
}

/// Like `resolveCanvas`, configured by JSON options
/// (`{"invalid":"reject"|"clampToZero"|"inherit","scale":number}`).
#[wasm_bindgen(js_name = resolveCanvasWith)]
pub fn resolve_canvas_with(
    id: &str,
    options_json: &str,
) -> Result<Option<HtmlCanvasElement>, JsValue> {
    let options = options_from_json(options_json).map_err(|e| JsValue::from_str(&e))?;
    resolve_with_options(id, options)
}

/// Like `resolveCanvas`, scaling the buffer by `window.devicePixelRatio`.
#[wasm_bindgen(js_name = resolveCanvasHiDpi)]
pub fn resolve_canvas_hidpi(id: &str) -> Result<Option<HtmlCanvasElement>, JsValue> {
    let mut tree = current_tree()?;
    let options = ResolveOptions {
        scale: tree.device_pixel_ratio(),
        ..ResolveOptions::default()
    };
    resolve_in(&mut tree, id, options)
}

/// Validate resolver options. Returns JSON: `{"ok":true}` or `{"ok":false,"error":"..."}`.
#[wasm_bindgen(js_name = validateOptions)]
pub fn validate_options(options_json: &str) -> String {
    let result = match options_from_json(options_json) {
        Ok(_) => serde_json::json!({ "ok": true }),
        Err(e) => serde_json::json!({ "ok": false, "error": e }),
    };
    result.to_string()
}

/// Route `log` records to the browser console at `level` (`"warn"` when unparseable).
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: &str) {
    console_error_panic_hook_setup();
    // A second call keeps the first logger.
    let _ = console_log::init_with_level(log_level(level));
}

/// Parse a log level name, case-insensitively. Unknown names mean `Warn`.
fn log_level(level: &str) -> log::Level {
    level.trim().parse().unwrap_or(log::Level::Warn)
}

fn resolve_with_options(
    id: &str,
    options: ResolveOptions,
) -> Result<Option<HtmlCanvasElement>, JsValue> {
    let mut tree = current_tree()?;
    resolve_in(&mut tree, id, options)
}

fn resolve_in(
    tree: &mut DomTree,
    id: &str,
    options: ResolveOptions,
) -> Result<Option<HtmlCanvasElement>, JsValue> {
    let resolver = CanvasSizeResolver::new(options).map_err(to_js)?;
    resolver.resolve(tree, id).map_err(to_js)
}

fn current_tree() -> Result<DomTree, JsValue> {
    DomTree::current().ok_or_else(|| JsValue::from_str("no window document available"))
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Parse and validate options JSON. Empty input means defaults.
fn options_from_json(json: &str) -> Result<ResolveOptions, String> {
    if json.trim().is_empty() {
        return Ok(ResolveOptions::default());
    }
    let options: ResolveOptions =
        serde_json::from_str(json).map_err(|e| format!("Options parse error: {e}"))?;
    CanvasSizeResolver::new(options).map_err(|e| e.to_string())?;
    Ok(options)
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("canvas-fit WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
