//! Browser bindings for WASM.
//!
//! This module connects the platform-independent core to the browser:
//! `localStorage`, `performance.now()`, media queries, document attributes
//! and the form endpoint.

use adaptify_core::{
    AppearanceMode, Clock, Error, Origin, PreferenceStore, Rect, Result, Timestamp, Viewport,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MediaQueryListEvent, MouseEvent, Storage, UrlSearchParams};

/// Media query for the dark colour-scheme preference.
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Media query for the reduced-motion preference.
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Preference store over `window.localStorage`.
///
/// Private browsing modes may expose no storage or throw on access; both
/// surface as [`Error::Storage`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(key: &str) -> Result<Storage> {
        web_sys::window()
            .ok_or_else(|| Error::storage(key, "no window"))?
            .local_storage()
            .map_err(|e| Error::storage(key, js_message(&e)))?
            .ok_or_else(|| Error::storage(key, "localStorage unavailable"))
    }
}

impl PreferenceStore for BrowserStorage {
    fn try_read(&self, key: &str) -> Result<Option<String>> {
        Self::storage(key)?
            .get_item(key)
            .map_err(|e| Error::storage(key, js_message(&e)))
    }

    fn try_write(&self, key: &str, value: &str) -> Result<()> {
        Self::storage(key)?
            .set_item(key, value)
            .map_err(|e| Error::storage(key, js_message(&e)))
    }
}

/// Monotonic clock over `performance.now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceClock;

impl Clock for PerformanceClock {
    fn now(&self) -> Timestamp {
        let millis = web_sys::window()
            .and_then(|w| w.performance())
            .map_or_else(js_sys::Date::now, |p| p.now());
        Timestamp::from_millis(millis.max(0.0) as u64)
    }
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn matches_media(query: &str) -> Option<bool> {
    web_sys::window()?
        .match_media(query)
        .ok()
        .flatten()
        .map(|list| list.matches())
}

/// The environment's dark-mode signal, `None` when media queries are
/// unavailable.
pub fn prefers_dark() -> Option<bool> {
    matches_media(DARK_QUERY)
}

/// Whether the visitor asked for reduced motion.
pub fn prefers_reduced_motion() -> bool {
    matches_media(REDUCED_MOTION_QUERY).unwrap_or(false)
}

/// Call `on_change` whenever the colour-scheme preference flips.
///
/// The listener lives as long as the page.
pub fn watch_color_scheme<F>(on_change: F)
where
    F: Fn(bool) + 'static,
{
    let Some(list) = web_sys::window().and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
    else {
        return;
    };
    let closure = Closure::<dyn Fn(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
        on_change(event.matches());
    });
    if list
        .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
        .is_ok()
    {
        closure.forget();
    } else {
        tracing::warn!("Could not watch colour-scheme changes");
    }
}

/// Size of the visible viewport, or the default size outside a browser.
pub fn viewport() -> Viewport {
    let Some(window) = web_sys::window() else {
        return Viewport::default();
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64());
    let height = window.inner_height().ok().and_then(|v| v.as_f64());
    match (width, height) {
        (Some(width), Some(height)) => Viewport::new(width, height),
        _ => Viewport::default(),
    }
}

/// Centre of the element that handled `event`, when it has usable geometry.
pub fn event_origin(event: &MouseEvent) -> Option<Origin> {
    let element = event.current_target()?.dyn_into::<Element>().ok()?;
    let bounds = element.get_bounding_client_rect();
    let rect = Rect::new(bounds.left(), bounds.top(), bounds.width(), bounds.height());
    rect.is_measurable().then(|| rect.center())
}

/// Reflect `mode` on the document root and in `meta[name=theme-color]`.
pub fn apply_mode(mode: AppearanceMode) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(root) = document.document_element() {
        let classes = root.class_list();
        let _ = classes.remove_1(mode.toggled().css_class());
        let _ = classes.add_1(mode.css_class());
    }
    if let Ok(Some(meta)) = document.query_selector("meta[name=theme-color]") {
        let _ = meta.set_attribute("content", mode.theme_color());
    }
}

/// Add or remove a class on the document root.
pub fn set_root_class(class: &str, on: bool) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let classes = root.class_list();
        let _ = if on {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
    }
}

/// Set the `lang` attribute on the document root.
pub fn set_document_lang(code: &str) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("lang", code);
    }
}

/// Set the document title.
pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

/// Lock or release page scrolling, used while a modal is open.
pub fn set_scroll_locked(locked: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "" });
    }
}

/// The browser's preferred language tag, e.g. `de-DE`.
pub fn navigator_language() -> Option<String> {
    web_sys::window()?.navigator().language()
}

/// A value in `[0, 1)` from the browser's RNG.
pub fn random() -> f64 {
    js_sys::Math::random()
}

/// Failure to deliver the contact form.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The request body could not be built.
    #[error("Failed to encode form: {0}")]
    Encode(String),
    /// The request never got an answer.
    #[error("Network error: {0}")]
    Network(String),
    /// The endpoint answered with a non-success status.
    #[error("Form endpoint returned status {0}")]
    Status(u16),
}

/// URL-encode `fields` in order.
pub fn encode_form(fields: &[(&str, &str)]) -> std::result::Result<String, SubmitError> {
    let params = UrlSearchParams::new().map_err(|e| SubmitError::Encode(js_message(&e)))?;
    for (name, value) in fields {
        params.append(name, value);
    }
    Ok(params.to_string().into())
}

/// POST `fields` URL-encoded to `endpoint`.
pub async fn submit_form(
    endpoint: &str,
    fields: &[(&str, &str)],
) -> std::result::Result<(), SubmitError> {
    let body = encode_form(fields)?;
    let response = gloo_net::http::Request::post(endpoint)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| SubmitError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(SubmitError::Status(response.status()));
    }
    Ok(())
}
