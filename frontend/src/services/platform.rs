//! Thin wrappers over the browser APIs the site needs. Everything here fails
//! soft: callers get an `Option` or a `Result` and decide what to fall back to.

use js_sys::{Array, Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlElement, Storage};

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn storage_get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

pub fn storage_set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            gloo_console::warn!("Could not persist", key);
        }
    }
}

/// First entry of `navigator.language`, e.g. `he-IL`.
pub fn browser_language() -> Option<String> {
    web_sys::window()?.navigator().language()
}

/// IANA zone from `Intl.DateTimeFormat().resolvedOptions().timeZone`.
pub fn browser_timezone() -> Result<String, JsValue> {
    let format = js_sys::Intl::DateTimeFormat::new(&Array::new(), &Object::new());
    let resolved = format.resolved_options();
    Reflect::get(&resolved, &JsValue::from_str("timeZone"))?
        .as_string()
        .ok_or_else(|| JsValue::from_str("timeZone is not a string"))
}

/// Country for the phone inputs, guessed from the system timezone.
pub fn inferred_country() -> &'static str {
    common::timezone::infer_country(browser_timezone)
}

/// Mirrors the language onto `<html lang dir>` and `<body dir>`.
pub fn apply_document_language(lang: &str, dir: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(root) = document.document_element() {
        root.set_attribute("lang", lang).ok();
        root.set_attribute("dir", dir).ok();
    }
    if let Some(body) = document.body() {
        body.set_attribute("dir", dir).ok();
    }
}

pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

/// `location.href` of the page the visitor is on.
pub fn current_page_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Keeps a scrollable element pinned to its last line.
pub fn scroll_to_bottom(element: &HtmlElement) {
    element.set_scroll_top(element.scroll_height());
}

/// `navigator.clipboard.writeText(text)`.
pub async fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let clipboard = Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))?;
    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))?
        .dyn_into::<Function>()?;
    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into::<Promise>()?;
    JsFuture::from(promise).await?;
    Ok(())
}
