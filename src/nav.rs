//! Scroll-driven page state: active nav link, fade-in reveal, parallax floaters,
//! plus the mobile menu and smooth in-page anchors.

use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::config::PortfolioConfig;
use crate::dom;
use crate::error::Result;

pub const REVEAL_SELECTOR: &str = ".project-card, .skill-tag, .about-bio, .contact-message";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const FLOATING_SELECTOR: &str = ".floating-element";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds<'a> {
    pub id: &'a str,
    pub top: f64,
}

/// Forward scan; the last section with `scroll_y >= top - offset` wins.
pub fn active_section<'a>(sections: &[SectionBounds<'a>], scroll_y: f64, offset: f64) -> Option<&'a str> {
    let mut current = None;
    for s in sections {
        if scroll_y >= s.top - offset {
            current = Some(s.id);
        }
    }
    current
}

/// Whether a nav link `href` points at section `id`.
pub fn link_targets(href: &str, id: &str) -> bool {
    href.strip_prefix('#') == Some(id)
}

/// CSS transform for the `index`-th floating element at scroll offset `scrolled`.
pub fn parallax_transform(index: usize, scrolled: f64) -> String {
    let speed = 0.5 + index as f64 * 0.1;
    let y = 0.0 - scrolled * speed;
    format!("translateY({y}px) rotate({}deg)", scrolled * 0.1)
}

// --- DOM wiring --------------------------------------------------------------

fn scroll_y() -> f64 {
    web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Mark the nav link of the current section `active` and clear the rest.
pub fn highlight_nav(doc: &Document, offset: f64) -> Result<()> {
    let sections: Vec<HtmlElement> = dom::query_all(doc, SECTION_SELECTOR)?;
    let ids: Vec<String> = sections.iter().map(|s| s.id()).collect();
    let bounds: Vec<SectionBounds<'_>> = sections
        .iter()
        .zip(&ids)
        .map(|(s, id)| SectionBounds { id: id.as_str(), top: s.offset_top() as f64 })
        .collect();
    let current = active_section(&bounds, scroll_y(), offset);

    for link in dom::query_all::<Element>(doc, NAV_LINK_SELECTOR)? {
        dom::remove_class(&link, "active");
        let href = link.get_attribute("href").unwrap_or_default();
        if current.is_some_and(|id| link_targets(&href, id)) {
            dom::add_class(&link, "active");
        }
    }
    Ok(())
}

fn apply_parallax(doc: &Document) -> Result<()> {
    let scrolled = scroll_y();
    for (i, el) in dom::query_all::<HtmlElement>(doc, FLOATING_SELECTOR)?.iter().enumerate() {
        dom::set_style(el, "transform", &parallax_transform(i, scrolled));
    }
    Ok(())
}

/// One scroll listener driving nav highlighting and parallax.
pub fn install_scroll_handlers(doc: &Document, cfg: &PortfolioConfig) -> Result<()> {
    let offset = cfg.nav_offset_px;
    let doc_cb = doc.clone();
    let win = dom::window()?;
    dom::listen(&win, "scroll", move |_evt: Event| {
        if let Err(err) = highlight_nav(&doc_cb, offset) {
            log::debug!("nav highlight skipped: {err}");
        }
        if let Err(err) = apply_parallax(&doc_cb) {
            log::debug!("parallax skipped: {err}");
        }
    })?;
    highlight_nav(doc, offset)
}

/// Tag reveal targets with `fade-in` and add `visible` once they intersect.
/// `visible` is never removed. Without IntersectionObserver everything is shown at once.
pub fn install_reveal(doc: &Document, cfg: &PortfolioConfig) -> Result<()> {
    let targets: Vec<Element> = dom::query_all(doc, REVEAL_SELECTOR)?;
    for el in &targets {
        dom::add_class(el, "fade-in");
    }

    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else { continue };
            if entry.is_intersecting() {
                dom::add_class(&entry.target(), "visible");
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(cfg.reveal_threshold));
    options.set_root_margin(&cfg.reveal_root_margin);
    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(_) => {
            log::info!("IntersectionObserver unavailable; revealing {} elements", targets.len());
            for el in &targets {
                dom::add_class(el, "visible");
            }
            return Ok(());
        }
    };
    callback.forget();
    for el in &targets {
        observer.observe(el);
    }
    Ok(())
}

/// Hamburger toggles the mobile menu; any nav link click closes it.
pub fn install_mobile_menu(doc: &Document) -> Result<()> {
    let hamburger: Element = dom::query(doc, ".hamburger")?;
    let menu: Element = dom::query(doc, ".nav-menu")?;
    let pair = Rc::new((hamburger, menu));

    let toggle = pair.clone();
    dom::listen(&pair.0, "click", move |_evt: MouseEvent| {
        dom::toggle_class(&toggle.0, "active");
        dom::toggle_class(&toggle.1, "active");
    })?;

    for link in dom::query_all::<Element>(doc, NAV_LINK_SELECTOR)? {
        let close = pair.clone();
        dom::listen(&link, "click", move |_evt: MouseEvent| {
            dom::remove_class(&close.0, "active");
            dom::remove_class(&close.1, "active");
        })?;
    }
    Ok(())
}

/// `a[href^="#"]` anchors scroll smoothly to their target instead of jumping.
pub fn install_smooth_scroll(doc: &Document) -> Result<()> {
    for anchor in dom::query_all::<Element>(doc, "a[href^=\"#\"]")? {
        let doc_cb = doc.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();
        dom::listen(&anchor, "click", move |evt: MouseEvent| {
            evt.prevent_default();
            // A bare "#" is not a valid selector.
            if let Ok(Some(target)) = doc_cb.query_selector(&href) {
                let opts = ScrollIntoViewOptions::new();
                opts.set_behavior(ScrollBehavior::Smooth);
                opts.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        })?;
    }
    Ok(())
}
