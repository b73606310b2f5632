//! Thin helpers over web_sys lookups and listeners.
//! Every lookup reports a missing element as `PortfolioError::MissingElement`
//! so callers can skip just the feature that needed it.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

use crate::error::{PortfolioError, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(PortfolioError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(PortfolioError::NoDocument)
}

pub fn body(doc: &Document) -> Result<HtmlElement> {
    doc.body().ok_or_else(|| PortfolioError::missing("body"))
}

pub fn by_id<T: JsCast>(doc: &Document, id: &str) -> Result<T> {
    doc.get_element_by_id(id)
        .ok_or_else(|| PortfolioError::missing(&format!("#{id}")))?
        .dyn_into::<T>()
        .map_err(|_| PortfolioError::missing(&format!("#{id}")))
}

pub fn query<T: JsCast>(root: &Document, selector: &str) -> Result<T> {
    root.query_selector(selector)?
        .ok_or_else(|| PortfolioError::missing(selector))?
        .dyn_into::<T>()
        .map_err(|_| PortfolioError::missing(selector))
}

/// All matches of `selector` that are `T`, in document order.
pub fn query_all<T: JsCast>(root: &Document, selector: &str) -> Result<Vec<T>> {
    let list = root.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<T>().ok()) {
            out.push(el);
        }
    }
    Ok(out)
}

pub fn create<T: JsCast>(doc: &Document, tag: &str) -> Result<T> {
    doc.create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| PortfolioError::Js(format!("<{tag}> has an unexpected element type")))
}

pub fn set_style(el: &HtmlElement, prop: &str, value: &str) {
    el.style().set_property(prop, value).ok();
}

pub fn add_class(el: &Element, class: &str) {
    el.class_list().add_1(class).ok();
}

pub fn remove_class(el: &Element, class: &str) {
    el.class_list().remove_1(class).ok();
}

pub fn toggle_class(el: &Element, class: &str) {
    el.class_list().toggle(class).ok();
}

/// Attach a page-lifetime listener (the closure is leaked on purpose).
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
    E: wasm_bindgen::convert::FromWasmAbi,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// One-shot `setTimeout`; the closure frees itself after running.
pub fn set_timeout<F: FnOnce() + 'static>(delay_ms: i32, f: F) -> Result<i32> {
    let cb = Closure::once_into_js(f);
    let handle = window()?.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms)?;
    Ok(handle)
}
