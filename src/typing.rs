//! Hero title typing effect.

use web_sys::{Document, Element};

use crate::dom;
use crate::error::Result;

pub const HERO_TITLE_SELECTOR: &str = ".hero-title .typing-text";

/// Reveals `text` one character at a time.
#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(), shown: 0 }
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.chars.len()
    }

    pub fn visible(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    /// Reveal one more character and return the visible prefix; `None` once complete.
    pub fn step(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        self.shown += 1;
        Some(self.visible())
    }
}

/// Blank the hero title, then retype it after `start_delay_ms` at `speed_ms` per character.
pub fn install(doc: &Document, start_delay_ms: i32, speed_ms: i32) -> Result<()> {
    let el: Element = dom::query(doc, HERO_TITLE_SELECTOR)?;
    let original = el.text_content().unwrap_or_default();
    el.set_text_content(Some(""));
    let writer = Typewriter::new(&original);
    dom::set_timeout(start_delay_ms, move || type_next(el, writer, speed_ms))?;
    Ok(())
}

fn type_next(el: Element, mut writer: Typewriter, speed_ms: i32) {
    let Some(prefix) = writer.step() else { return };
    el.set_text_content(Some(&prefix));
    if let Err(err) = dom::set_timeout(speed_ms, move || type_next(el, writer, speed_ms)) {
        log::warn!("typing effect stopped: {err}");
    }
}
