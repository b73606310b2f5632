//! Small cosmetic touches: card hover lift, skill-tag pulse, the injected
//! keyframes and the page fade-in on load.

use web_sys::{Document, Event, HtmlElement, MouseEvent};

use crate::dom;
use crate::error::Result;

pub const INJECTED_CSS: &str = "
    @keyframes pulse {
        0% { transform: scale(1); }
        50% { transform: scale(1.1); }
        100% { transform: scale(1); }
    }

    .nav-link.active {
        color: var(--text-primary) !important;
        text-shadow: 0 0 10px var(--glow-color) !important;
    }

    .nav-link.active::after {
        width: 100% !important;
    }

    .theme-switching {
        animation: themeSwitch 0.3s ease-in-out;
    }

    @keyframes themeSwitch {
        0% { transform: scale(1) rotate(0deg); }
        50% { transform: scale(1.2) rotate(180deg); }
        100% { transform: scale(1) rotate(360deg); }
    }
";

pub const CARD_HOVER: &str = "translateY(-15px) scale(1.02)";
pub const CARD_REST: &str = "translateY(0) scale(1)";
pub const SKILL_PULSE: &str = "pulse 0.6s ease-in-out";

pub fn inject_styles(doc: &Document) -> Result<()> {
    let style = doc.create_element("style")?;
    style.set_text_content(Some(INJECTED_CSS));
    match doc.head() {
        Some(head) => head.append_child(&style)?,
        None => dom::body(doc)?.append_child(&style)?,
    };
    Ok(())
}

pub fn install_card_hover(doc: &Document) -> Result<()> {
    for card in dom::query_all::<HtmlElement>(doc, ".project-card")? {
        let lift = card.clone();
        dom::listen(&card, "mouseenter", move |_evt: MouseEvent| dom::set_style(&lift, "transform", CARD_HOVER))?;
        let rest = card.clone();
        dom::listen(&card, "mouseleave", move |_evt: MouseEvent| dom::set_style(&rest, "transform", CARD_REST))?;
    }
    Ok(())
}

pub fn install_skill_pulse(doc: &Document) -> Result<()> {
    for tag in dom::query_all::<HtmlElement>(doc, ".skill-tag")? {
        let start = tag.clone();
        dom::listen(&tag, "mouseenter", move |_evt: MouseEvent| dom::set_style(&start, "animation", SKILL_PULSE))?;
        let end = tag.clone();
        dom::listen(&tag, "animationend", move |_evt: Event| dom::set_style(&end, "animation", ""))?;
    }
    Ok(())
}

/// Fade the whole page in once `load` fires.
pub fn install_page_fade_in(doc: &Document) -> Result<()> {
    let body = dom::body(doc)?;
    let win = dom::window()?;
    dom::listen(&win, "load", move |_evt: Event| {
        dom::set_style(&body, "opacity", "0");
        dom::set_style(&body, "transition", "opacity 1s ease-in-out");
        let body = body.clone();
        if dom::set_timeout(100, move || dom::set_style(&body, "opacity", "1")).is_err() {
            log::warn!("page fade-in not scheduled");
        }
    })?;
    Ok(())
}
