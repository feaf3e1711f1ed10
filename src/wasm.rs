//! WASM bindings for rendering in the browser.
//!
//! This module exposes the text transform and page assembly to JavaScript via
//! wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::element::{Element, Tag};
use crate::markdown;
use crate::page::Page;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Convert markdown-style text to an HTML fragment.
#[wasm_bindgen]
pub fn render_markdown(text: &str) -> Result<String, JsValue> {
    markdown::transform(text).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Render a complete page whose section holds the transformed `text`.
#[wasm_bindgen]
pub fn render_page(title: &str, text: &str) -> Result<String, JsValue> {
    let fragment = render_markdown(text)?;
    let mut page = Page::new(title);
    page.section.inject_raw(fragment);
    Ok(page.render())
}

/// Render a single element with escaped text, e.g. `("p", "hello")`.
#[wasm_bindgen]
pub fn render_element(tag: &str, text: &str) -> Result<String, JsValue> {
    let tag: Tag = tag.parse().map_err(|e: crate::Error| JsValue::from_str(&e.to_string()))?;
    Ok(Element::new(tag).with_text(text).render())
}
