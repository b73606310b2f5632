//! Portfolio FX core crate.
//!
//! Client-side effects for the single-page portfolio: particle backdrop and
//! cursor trail driven by one frame scheduler, the project info modal, the
//! persisted theme toggle, scroll-driven nav / reveal / parallax and the hero
//! typing effect. `start_portfolio()` wires whatever the page provides; a
//! missing region only disables the feature that needs it.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, MouseEvent};

pub mod catalog;
pub mod config;
mod dom;
mod effects;
pub mod error;
mod logging;
pub mod modal;
pub mod nav;
pub mod particles;
pub mod scheduler;
pub mod theme;
pub mod trail;
pub mod typing;

pub use catalog::{PROJECTS, ProjectCatalog, ProjectRecord};
pub use config::PortfolioConfig;
pub use error::PortfolioError;
pub use modal::{CloseTrigger, Modal, ModalState, ProjectPanel};
pub use particles::{Particle, ParticleField, ParticleParams};
pub use scheduler::{Animated, FrameScheduler};
pub use theme::{MemoryBackend, PreferenceBackend, PreferenceStore, Theme};
pub use trail::CursorTrail;
pub use typing::Typewriter;

use modal::ModalController;
use particles::ParticleLayer;
use scheduler::FrameLoopHandle;
use trail::TrailLayer;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Page instance
// -----------------------------------------------------------------------------

/// Everything `start_portfolio` built. Held for the page's lifetime.
struct Portfolio {
    modal: Option<Rc<ModalController>>,
    frame_loop: Option<FrameLoopHandle>,
}

thread_local! {
    static PORTFOLIO: RefCell<Option<Portfolio>> = const { RefCell::new(None) };
}

fn optional<T>(feature: &str, res: error::Result<T>) -> Option<T> {
    match res {
        Ok(v) => Some(v),
        Err(err) => {
            log::warn!("{feature} disabled: {err}");
            None
        }
    }
}

impl Portfolio {
    fn install(doc: &Document, cfg: &PortfolioConfig) -> Self {
        optional("styles", effects::inject_styles(doc));
        optional("theme toggle", theme::install(doc, cfg.theme_transition_ms));
        optional("mobile menu", nav::install_mobile_menu(doc));
        optional("smooth scroll", nav::install_smooth_scroll(doc));
        optional("scroll reveal", nav::install_reveal(doc, cfg));
        optional("scroll handlers", nav::install_scroll_handlers(doc, cfg));
        optional("hero typing", typing::install(doc, cfg.typing_start_delay_ms, cfg.typing_speed_ms));
        optional("card hover", effects::install_card_hover(doc));
        optional("skill pulse", effects::install_skill_pulse(doc));
        optional("page fade-in", effects::install_page_fade_in(doc));
        let modal = optional("project modal", ModalController::install(doc, ProjectCatalog::builtin()));

        let scheduler = Rc::new(RefCell::new(FrameScheduler::new()));
        if cfg.enable_particles {
            if let Some(layer) = optional("particles", install_particles(doc, cfg)) {
                scheduler.borrow_mut().add(layer);
            }
        }
        if cfg.enable_cursor_trail {
            if let Some(layer) = optional("cursor trail", install_trail(doc, cfg)) {
                scheduler.borrow_mut().add(layer);
            }
        }
        let frame_loop = if scheduler.borrow().is_empty() {
            None
        } else {
            optional("frame loop", scheduler::start_frame_loop(scheduler.clone()))
        };

        Self { modal, frame_loop }
    }
}

fn install_particles(doc: &Document, cfg: &PortfolioConfig) -> error::Result<Rc<RefCell<ParticleLayer>>> {
    let layer = Rc::new(RefCell::new(ParticleLayer::install(doc, cfg)?));
    let resize = layer.clone();
    let win = dom::window()?;
    dom::listen(&win, "resize", move |_evt: Event| resize.borrow_mut().resize_to_viewport())?;
    Ok(layer)
}

fn install_trail(doc: &Document, cfg: &PortfolioConfig) -> error::Result<Rc<RefCell<TrailLayer>>> {
    let layer = Rc::new(RefCell::new(TrailLayer::install(doc, cfg.trail_count, cfg.trail_step_ms)?));
    let pointer = layer.clone();
    dom::listen(doc, "mousemove", move |evt: MouseEvent| {
        pointer.borrow_mut().record_pointer(evt.client_x() as f64, evt.client_y() as f64);
    })?;
    Ok(layer)
}

/// Put the inline-handler entry points on `window`.
fn expose_globals() -> error::Result<()> {
    let win = dom::window()?;
    let show = Closure::wrap(Box::new(|id: String| show_project_info(&id)) as Box<dyn FnMut(String)>);
    js_sys::Reflect::set(&win, &JsValue::from_str("showProjectInfo"), show.as_ref())?;
    show.forget();
    let close = Closure::wrap(Box::new(close_modal) as Box<dyn FnMut()>);
    js_sys::Reflect::set(&win, &JsValue::from_str("closeModal"), close.as_ref())?;
    close.forget();
    Ok(())
}

fn start_with(cfg: PortfolioConfig) -> Result<(), JsValue> {
    if PORTFOLIO.with(|p| p.borrow().is_some()) {
        log::debug!("start_portfolio called twice; ignoring");
        return Ok(());
    }
    logging::init(cfg.level_filter()?);
    let doc = dom::document()?;
    let portfolio = Portfolio::install(&doc, &cfg);
    PORTFOLIO.with(|p| p.replace(Some(portfolio)));
    optional("window entry points", expose_globals());
    logging::welcome_banner();
    Ok(())
}

// -----------------------------------------------------------------------------
// JS entry points
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_portfolio() -> Result<(), JsValue> {
    start_with(PortfolioConfig::default())
}

/// Start with a JSON object overriding any `PortfolioConfig` fields.
#[wasm_bindgen]
pub fn start_portfolio_with_config(json: &str) -> Result<(), JsValue> {
    start_with(PortfolioConfig::from_json(json)?)
}

fn page_modal() -> Option<Rc<ModalController>> {
    PORTFOLIO.with(|p| p.borrow().as_ref().and_then(|p| p.modal.clone()))
}

/// Open the modal for `project_id`. Unknown ids, or a page without a modal, do nothing.
#[wasm_bindgen(js_name = showProjectInfo)]
pub fn show_project_info(project_id: &str) {
    if let Some(modal) = page_modal() {
        modal.show(project_id);
    }
}

#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal() {
    if let Some(modal) = page_modal() {
        modal.close(CloseTrigger::CloseControl);
    }
}

/// Stop the particle / trail frame loop (page teardown).
#[wasm_bindgen]
pub fn stop_animations() {
    PORTFOLIO.with(|p| {
        if let Some(handle) = p.borrow().as_ref().and_then(|p| p.frame_loop.as_ref()) {
            handle.stop();
        }
    });
}

#[wasm_bindgen]
pub fn project_catalog_json() -> Result<String, JsValue> {
    ProjectCatalog::builtin()
        .to_json()
        .map_err(|e| PortfolioError::from(e).into())
}
