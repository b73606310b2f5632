//! Project info modal.
//!
//! `Modal` is the pure Closed/Open state machine plus panel rendering and is what
//! the tests drive. `ModalController` binds it to `#projectModal` /
//! `#modalContent`: it writes the rendered panel, toggles visibility and body
//! scroll, and owns the close-control listener of the current render.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, MouseEvent, Node};

use crate::catalog::{ProjectCatalog, ProjectRecord};
use crate::dom;
use crate::error::Result;

pub const MODAL_ID: &str = "projectModal";
pub const CONTENT_ID: &str = "modalContent";
pub const CLOSE_SELECTOR: &str = ".close";

// --- State machine -----------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open { project_id: &'static str },
}

/// What asked the modal to close.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseControl,
    Backdrop,
    Escape,
}

pub struct Modal {
    catalog: ProjectCatalog,
    state: ModalState,
}

impl Modal {
    pub fn new(catalog: ProjectCatalog) -> Self {
        Self { catalog, state: ModalState::Closed }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    /// Page scrolling is suppressed exactly while the modal is open.
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    /// Open on `id`. Unknown ids leave the state untouched and return `None`.
    pub fn show(&mut self, id: &str) -> Option<ProjectPanel> {
        let Some(record) = self.catalog.get(id) else {
            log::debug!("showProjectInfo: unknown project id `{id}`");
            return None;
        };
        self.state = ModalState::Open { project_id: record.id };
        Some(ProjectPanel::new(record))
    }

    /// Returns true when this call transitioned Open -> Closed.
    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        if !self.is_open() {
            return false;
        }
        log::trace!("modal closed via {trigger:?}");
        self.state = ModalState::Closed;
        true
    }

    pub fn handle_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.close(CloseTrigger::Escape)
    }
}

// --- Rendering ---------------------------------------------------------------

/// Rendered view of one record: overview on the left, stack and write-up on the right.
/// Fields are inserted verbatim; the catalog is trusted static data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectPanel {
    record: &'static ProjectRecord,
}

impl ProjectPanel {
    pub fn new(record: &'static ProjectRecord) -> Self {
        Self { record }
    }

    pub fn title(&self) -> &'static str {
        self.record.title
    }

    pub fn features(&self) -> &'static [&'static str] {
        self.record.features
    }

    pub fn tech_tags(&self) -> &'static [&'static str] {
        self.record.tech_stack
    }

    pub fn to_html(&self) -> String {
        let r = self.record;
        let mut html = String::with_capacity(1024);
        let _ = write!(
            html,
            "<div class=\"modal-header\"><h2 class=\"modal-title\">{}</h2><button class=\"close\">&times;</button></div>",
            r.title
        );
        html.push_str("<div class=\"modal-body\">");

        html.push_str("<div class=\"modal-left\">");
        let _ = write!(
            html,
            "<div class=\"modal-section\"><h3>Project Overview</h3><p class=\"modal-description\">{}</p></div>",
            r.description
        );
        html.push_str("<div class=\"modal-section\"><h3>Key Features</h3><ul>");
        for feature in r.features {
            let _ = write!(html, "<li>{feature}</li>");
        }
        html.push_str("</ul></div></div>");

        html.push_str("<div class=\"modal-right\">");
        html.push_str("<div class=\"modal-section\"><h3>Technology Stack</h3><div class=\"tech-stack\">");
        for tech in r.tech_stack {
            let _ = write!(html, "<span class=\"tech-tag\">{tech}</span>");
        }
        html.push_str("</div></div>");
        let _ = write!(
            html,
            "<div class=\"modal-section\"><h3>Challenges &amp; Solutions</h3><p><strong>Challenges:</strong></p><p>{}</p><br><p><strong>Solutions:</strong></p><p>{}</p></div>",
            r.challenges, r.solutions
        );
        html.push_str("</div></div>");
        html
    }
}

// --- DOM binding -------------------------------------------------------------

type ClickListener = Closure<dyn FnMut(MouseEvent)>;

pub struct ModalController {
    modal: RefCell<Modal>,
    root: HtmlElement,
    content: Element,
    body: HtmlElement,
    // Close control of the current render, with its listener. The static
    // markup control is bound separately for the page lifetime.
    close_binding: RefCell<Option<(Element, ClickListener)>>,
}

impl ModalController {
    /// Look up the modal regions and attach the backdrop / Escape / static close listeners.
    pub fn install(doc: &Document, catalog: ProjectCatalog) -> Result<Rc<Self>> {
        let root: HtmlElement = dom::by_id(doc, MODAL_ID)?;
        let content: Element = dom::by_id(doc, CONTENT_ID)?;
        let body = dom::body(doc)?;
        let ctl = Rc::new(Self {
            modal: RefCell::new(Modal::new(catalog)),
            root,
            content,
            body,
            close_binding: RefCell::new(None),
        });

        // Close control in the static modal markup keeps its own page-lifetime
        // listener; per-render controls are bound in `show`.
        if let Some(static_close) = ctl.root.query_selector(CLOSE_SELECTOR)? {
            let weak = Rc::downgrade(&ctl);
            dom::listen(&static_close, "click", move |_evt: MouseEvent| {
                if let Some(ctl) = weak.upgrade() {
                    ctl.close(CloseTrigger::CloseControl);
                }
            })?;
        }

        // Backdrop: a click whose target is the modal container itself.
        let weak = Rc::downgrade(&ctl);
        let win = dom::window()?;
        dom::listen(&win, "click", move |evt: MouseEvent| {
            let Some(ctl) = weak.upgrade() else { return };
            let on_backdrop = evt
                .target()
                .and_then(|t| t.dyn_into::<Node>().ok())
                .map(|n| ctl.root.is_same_node(Some(&n)))
                .unwrap_or(false);
            if on_backdrop {
                ctl.close(CloseTrigger::Backdrop);
            }
        })?;

        let weak = Rc::downgrade(&ctl);
        dom::listen(doc, "keydown", move |evt: KeyboardEvent| {
            if let Some(ctl) = weak.upgrade() {
                let closed = ctl.modal.borrow_mut().handle_key(&evt.key());
                if closed {
                    ctl.sync_visibility();
                }
            }
        })?;

        Ok(ctl)
    }

    pub fn state(&self) -> ModalState {
        self.modal.borrow().state()
    }

    /// Render the project into the content region and open. Unknown ids are ignored.
    pub fn show(self: &Rc<Self>, id: &str) {
        let Some(panel) = self.modal.borrow_mut().show(id) else { return };
        self.content.set_inner_html(&panel.to_html());
        match self.content.query_selector(CLOSE_SELECTOR) {
            Ok(Some(btn)) => {
                if let Err(err) = self.bind_close_control(btn) {
                    log::warn!("modal close control not bound: {err}");
                }
            }
            _ => log::warn!("modal render produced no close control"),
        }
        self.sync_visibility();
    }

    pub fn close(&self, trigger: CloseTrigger) {
        self.modal.borrow_mut().close(trigger);
        self.sync_visibility();
    }

    fn sync_visibility(&self) {
        let locked = self.modal.borrow().scroll_locked();
        dom::set_style(&self.root, "display", if locked { "block" } else { "none" });
        dom::set_style(&self.body, "overflow", if locked { "hidden" } else { "auto" });
    }

    /// Bind the freshly rendered close control; the previous render's listener is detached and dropped.
    fn bind_close_control(self: &Rc<Self>, btn: Element) -> Result<()> {
        if let Some((old_btn, old_cb)) = self.close_binding.borrow_mut().take() {
            old_btn.remove_event_listener_with_callback("click", old_cb.as_ref().unchecked_ref()).ok();
        }
        let weak: Weak<Self> = Rc::downgrade(self);
        let cb: ClickListener = Closure::wrap(Box::new(move |_evt: MouseEvent| {
            if let Some(ctl) = weak.upgrade() {
                ctl.close(CloseTrigger::CloseControl);
            }
        }) as Box<dyn FnMut(_)>);
        btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        *self.close_binding.borrow_mut() = Some((btn, cb));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modal() -> Modal {
        Modal::new(ProjectCatalog::builtin())
    }

    #[test]
    fn starts_closed_and_unlocked() {
        let m = modal();
        assert_eq!(m.state(), ModalState::Closed);
        assert!(!m.scroll_locked());
    }

    #[test]
    fn show_snake_opens_with_ordered_lists() {
        let mut m = modal();
        let panel = m.show("snake").expect("snake is in the catalog");
        assert_eq!(m.state(), ModalState::Open { project_id: "snake" });
        assert!(m.scroll_locked());
        assert_eq!(
            panel.features(),
            &[
                "Classic snake gameplay mechanics",
                "Score tracking and high score system",
                "Responsive design for all devices",
                "Smooth animations and controls",
            ]
        );
        assert_eq!(panel.tech_tags(), &["HTML5", "CSS3", "JavaScript", "Canvas API"]);
    }

    #[test]
    fn unknown_id_is_a_silent_noop() {
        let mut m = modal();
        assert!(m.show("does-not-exist").is_none());
        assert_eq!(m.state(), ModalState::Closed);

        m.show("lan");
        assert!(m.show("does-not-exist").is_none());
        assert_eq!(m.state(), ModalState::Open { project_id: "lan" });
    }

    #[test]
    fn every_close_trigger_closes_and_unlocks() {
        for trigger in [CloseTrigger::CloseControl, CloseTrigger::Backdrop, CloseTrigger::Escape] {
            let mut m = modal();
            m.show("snake");
            assert!(m.close(trigger));
            assert_eq!(m.state(), ModalState::Closed);
            assert!(!m.scroll_locked());
        }
    }

    #[test]
    fn escape_only_acts_while_open() {
        let mut m = modal();
        assert!(!m.handle_key("Escape"));
        m.show("neural");
        assert!(!m.handle_key("Enter"));
        assert!(m.is_open());
        assert!(m.handle_key("Escape"));
        assert!(!m.is_open());
    }

    #[test]
    fn reopening_switches_project() {
        let mut m = modal();
        m.show("snake");
        m.show("tumor");
        assert_eq!(m.state(), ModalState::Open { project_id: "tumor" });
    }

    #[test]
    fn html_keeps_source_order_and_single_close_control() {
        let mut m = modal();
        let html = m.show("snake").unwrap().to_html();
        assert_eq!(html.matches("<li>").count(), 4);
        assert_eq!(html.matches("class=\"tech-tag\"").count(), 4);
        assert_eq!(html.matches("class=\"close\"").count(), 1);
        let positions: Vec<usize> = ["HTML5", "CSS3", "JavaScript", "Canvas API"]
            .iter()
            .map(|t| html.find(&format!(">{t}<")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.find("modal-left").unwrap() < html.find("modal-right").unwrap());
    }
}
