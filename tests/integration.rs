// Integration tests (native) for the `portfolio-fx` crate.
// These tests avoid wasm-specific functionality and exercise pure Rust logic so
// they can run under `cargo test` on the host.

use std::cell::RefCell;
use std::rc::Rc;

use portfolio_fx::nav::{SectionBounds, active_section};
use portfolio_fx::theme::THEME_KEY;
use portfolio_fx::{
    Animated, CloseTrigger, CursorTrail, FrameScheduler, MemoryBackend, Modal, ModalState, ParticleField,
    ParticleParams, PortfolioConfig, PreferenceBackend, PreferenceStore, ProjectCatalog, Theme,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

// Without a started page the entry points are silent no-ops.
#[test]
fn entry_points_without_page_do_nothing() {
    portfolio_fx::show_project_info("snake");
    portfolio_fx::show_project_info("does-not-exist");
    portfolio_fx::close_modal();
    portfolio_fx::stop_animations();
}

#[test]
fn snake_modal_flow() {
    let mut modal = Modal::new(ProjectCatalog::builtin());
    let panel = modal.show("snake").unwrap();
    assert_eq!(modal.state(), ModalState::Open { project_id: "snake" });
    assert_eq!(panel.features().len(), 4);
    assert_eq!(panel.features()[0], "Classic snake gameplay mechanics");
    assert_eq!(panel.tech_tags(), ["HTML5", "CSS3", "JavaScript", "Canvas API"]);
    assert!(panel.to_html().contains("<h2 class=\"modal-title\">Snake Game</h2>"));

    assert!(modal.show("does-not-exist").is_none());
    assert_eq!(modal.state(), ModalState::Open { project_id: "snake" });

    assert!(modal.close(CloseTrigger::Backdrop));
    assert!(!modal.scroll_locked());
    assert!(!modal.close(CloseTrigger::CloseControl), "closing twice is a no-op");
}

#[test]
fn theme_toggle_round_trip_through_backend() {
    let mut backend = MemoryBackend::new();
    backend.set(THEME_KEY, "dark").unwrap();
    let mut store = PreferenceStore::load(backend);
    assert_eq!(store.toggle(), Theme::Light);
    assert_eq!(store.backend().get(THEME_KEY).unwrap().as_deref(), Some("light"));
    assert_eq!(store.toggle(), Theme::Dark);
    assert_eq!(store.backend().get(THEME_KEY).unwrap().as_deref(), Some("dark"));
}

#[test]
fn nav_picks_b_at_850() {
    let sections = [
        SectionBounds { id: "A", top: 0.0 },
        SectionBounds { id: "B", top: 800.0 },
        SectionBounds { id: "C", top: 1600.0 },
    ];
    let cfg = PortfolioConfig::default();
    assert_eq!(active_section(&sections, 850.0, cfg.nav_offset_px), Some("B"));
}

// Scheduler-driven field + trail, without any display.
struct FieldLayer(ParticleField);
impl Animated for FieldLayer {
    fn frame(&mut self, _now_ms: f64) {
        self.0.tick();
    }
}

struct TrailOnly(CursorTrail);
impl Animated for TrailOnly {
    fn frame(&mut self, now_ms: f64) {
        self.0.advance(now_ms);
    }
}

#[test]
fn scheduler_keeps_particles_in_bounds_over_many_frames() {
    let cfg = PortfolioConfig::default();
    let mut rng = StdRng::seed_from_u64(2024);
    let field = ParticleField::initialize(cfg.particle_count, 320.0, 240.0, ParticleParams::from(&cfg), &mut rng);
    let speeds: Vec<(f64, f64)> = field.particles().iter().map(|p| (p.vx.abs(), p.vy.abs())).collect();

    let layer = Rc::new(RefCell::new(FieldLayer(field)));
    let trail = Rc::new(RefCell::new(TrailOnly(CursorTrail::new(cfg.trail_count, cfg.trail_step_ms))));
    let mut sched = FrameScheduler::new();
    sched.add(layer.clone());
    sched.add(trail.clone());

    for frame in 0..5_000u32 {
        trail.borrow_mut().0.record_pointer(frame as f64, 10.0);
        sched.tick(frame as f64 * 16.0);
    }
    assert_eq!(sched.frames(), 5_000);

    let layer = layer.borrow();
    assert_eq!(layer.0.len(), 100, "no particle is ever added or removed");
    for (p, (sx, sy)) in layer.0.particles().iter().zip(speeds) {
        assert!((0.0..=320.0).contains(&p.x) && (0.0..=240.0).contains(&p.y));
        assert_eq!((p.vx.abs(), p.vy.abs()), (sx, sy), "speed only ever changes sign");
    }
    assert_eq!(trail.borrow().0.positions()[0], (4_999.0, 10.0));
}
