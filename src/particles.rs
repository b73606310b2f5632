//! Drifting-dot backdrop.
//!
//! `ParticleField` is the simulation (positions, velocities, reflection at the
//! canvas edges). `ParticleLayer` owns the fixed full-viewport canvas and paints
//! the field once per frame from the scheduler.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::config::PortfolioConfig;
use crate::dom;
use crate::error::{PortfolioError, Result};
use crate::scheduler::Animated;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
}

/// Spawn ranges. Velocity components are drawn from `-max_speed..=max_speed`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleParams {
    pub max_speed: f64,
    pub min_size: f64,
    pub max_size: f64,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self { max_speed: 0.25, min_size: 1.0, max_size: 3.0 }
    }
}

impl ParticleParams {
    /// Spawn ranges `gen_range` can sample: finite, non-negative, and a
    /// velocity span `2 * max_speed` that does not overflow.
    pub fn check(&self) -> Result<()> {
        if !(self.max_speed >= 0.0 && (2.0 * self.max_speed).is_finite()) {
            return Err(PortfolioError::InvalidConfig(format!(
                "particle_max_speed must be finite and >= 0, got {}",
                self.max_speed
            )));
        }
        if !(self.min_size >= 0.0 && self.min_size <= self.max_size && (self.max_size - self.min_size).is_finite()) {
            return Err(PortfolioError::InvalidConfig(format!(
                "particle size range {}..={} is empty or unbounded",
                self.min_size, self.max_size
            )));
        }
        Ok(())
    }
}

impl From<&PortfolioConfig> for ParticleParams {
    fn from(cfg: &PortfolioConfig) -> Self {
        Self {
            max_speed: cfg.particle_max_speed,
            min_size: cfg.particle_min_size,
            max_size: cfg.particle_max_size,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleField {
    /// Allocate `count` particles uniformly inside `width x height`.
    /// `params` must pass [`ParticleParams::check`].
    pub fn initialize<R: Rng>(count: usize, width: f64, height: f64, params: ParticleParams, rng: &mut R) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.gen_range(0.0..=width),
                y: rng.gen_range(0.0..=height),
                vx: rng.gen_range(-params.max_speed..=params.max_speed),
                vy: rng.gen_range(-params.max_speed..=params.max_speed),
                size: rng.gen_range(params.min_size..=params.max_size),
            })
            .collect();
        Self { particles, width, height }
    }

    pub fn from_particles(particles: Vec<Particle>, width: f64, height: f64) -> Self {
        Self { particles, width, height }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// New surface size. Particles keep their positions, even if now outside.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    /// Advance one frame. An axis that leaves `[0, dim]` flips its velocity and
    /// the position is pulled back onto the edge.
    pub fn tick(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            if p.x < 0.0 || p.x > w {
                p.vx = -p.vx;
                p.x = p.x.clamp(0.0, w);
            }
            if p.y < 0.0 || p.y > h {
                p.vy = -p.vy;
                p.y = p.y.clamp(0.0, h);
            }
        }
    }
}

// --- Canvas layer ------------------------------------------------------------

pub struct ParticleLayer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    field: ParticleField,
    fill: String,
}

impl ParticleLayer {
    /// Create the backdrop canvas, size it to the viewport and seed the field.
    pub fn install(doc: &Document, cfg: &PortfolioConfig) -> Result<Self> {
        let canvas: HtmlCanvasElement = dom::create(doc, "canvas")?;
        canvas.set_attribute(
            "style",
            &format!(
                "position:fixed; top:0; left:0; width:100%; height:100%; pointer-events:none; z-index:-1; opacity:{};",
                cfg.particle_canvas_opacity
            ),
        ).ok();
        dom::body(doc)?.append_child(&canvas)?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| PortfolioError::missing("canvas 2d context"))?;

        let (w, h) = viewport_size()?;
        canvas.set_width(w as u32);
        canvas.set_height(h as u32);
        let mut rng = SmallRng::from_entropy();
        let field = ParticleField::initialize(cfg.particle_count, w, h, ParticleParams::from(cfg), &mut rng);
        log::debug!("particle field: {} particles on {w}x{h}", field.len());

        Ok(Self { canvas, ctx, field, fill: cfg.particle_fill.clone() })
    }

    pub fn resize_to_viewport(&mut self) {
        match viewport_size() {
            Ok((w, h)) => {
                self.canvas.set_width(w as u32);
                self.canvas.set_height(h as u32);
                self.field.resize(w, h);
            }
            Err(err) => log::warn!("particle canvas resize skipped: {err}"),
        }
    }

    fn render(&self) {
        let (w, h) = self.field.bounds();
        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.ctx.set_fill_style_str(&self.fill);
        for p in self.field.particles() {
            self.ctx.begin_path();
            self.ctx.arc(p.x, p.y, p.size, 0.0, std::f64::consts::TAU).ok();
            self.ctx.fill();
        }
    }
}

impl Animated for ParticleLayer {
    fn frame(&mut self, _now_ms: f64) {
        self.field.tick();
        self.render();
    }
}

fn viewport_size() -> Result<(f64, f64)> {
    let win = dom::window()?;
    let w = win.inner_width()?.as_f64().unwrap_or(0.0);
    let h = win.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((w, h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    fn p(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle { x, y, vx, vy, size: 2.0 }
    }

    #[test]
    fn initialize_allocates_exact_count_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in [0usize, 1, 5, 100, 257] {
            let field = ParticleField::initialize(n, 640.0, 480.0, ParticleParams::default(), &mut rng);
            assert_eq!(field.len(), n);
            for q in field.particles() {
                assert!((0.0..=640.0).contains(&q.x) && (0.0..=480.0).contains(&q.y));
                assert!(q.vx.abs() <= 0.25 && q.vy.abs() <= 0.25);
                assert!((1.0..=3.0).contains(&q.size));
            }
        }
    }

    #[test]
    fn params_that_pass_check_always_initialize() {
        let huge = ParticleParams { max_speed: 1e300, min_size: 0.0, max_size: 1e300 };
        assert!(huge.check().is_ok());
        let mut rng = StdRng::seed_from_u64(3);
        let field = ParticleField::initialize(4, 100.0, 100.0, huge, &mut rng);
        assert!(field.particles().iter().all(|q| q.vx.abs() <= 1e300));

        let overflowing = ParticleParams { max_speed: 1e308, ..ParticleParams::default() };
        assert!(overflowing.check().is_err());
    }

    #[test]
    fn zero_sized_surface_is_fine() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = ParticleField::initialize(3, 0.0, 0.0, ParticleParams::default(), &mut rng);
        field.tick();
        assert!(field.particles().iter().all(|q| q.x == 0.0 && q.y == 0.0));
    }

    #[test]
    fn crossing_right_edge_flips_vx_only() {
        let mut field = ParticleField::from_particles(vec![p(99.9, 50.0, 0.2, 0.1)], 100.0, 100.0);
        field.tick();
        let q = field.particles()[0];
        assert_eq!(q.vx, -0.2);
        assert_eq!(q.vy, 0.1);
        assert_eq!(q.x, 100.0);
    }

    #[test]
    fn crossing_top_edge_flips_vy_only() {
        let mut field = ParticleField::from_particles(vec![p(50.0, 0.05, -0.1, -0.2)], 100.0, 100.0);
        field.tick();
        let q = field.particles()[0];
        assert_eq!(q.vx, -0.1);
        assert_eq!(q.vy, 0.2);
        assert_eq!(q.y, 0.0);
    }

    #[test]
    fn interior_particle_keeps_velocity() {
        let mut field = ParticleField::from_particles(vec![p(50.0, 50.0, 0.25, -0.25)], 100.0, 100.0);
        field.tick();
        let q = field.particles()[0];
        assert_eq!((q.vx, q.vy), (0.25, -0.25));
        assert_eq!((q.x, q.y), (50.25, 49.75));
    }

    #[test]
    fn tick_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = ParticleField::initialize(20, 300.0, 200.0, ParticleParams::default(), &mut rng);
        let untouched = a.clone();
        assert_eq!(a.particles(), untouched.particles());

        let mut b = a.clone();
        let mut c = a.clone();
        b.tick();
        c.tick();
        assert_eq!(b.particles(), c.particles());
    }

    #[test]
    fn resize_keeps_positions() {
        let mut field = ParticleField::from_particles(vec![p(90.0, 90.0, 0.1, 0.1)], 100.0, 100.0);
        field.resize(50.0, 50.0);
        assert_eq!(field.bounds(), (50.0, 50.0));
        assert_eq!(field.particles()[0].x, 90.0);
        // next tick reflects it back onto the new edge
        field.tick();
        let q = field.particles()[0];
        assert_eq!((q.x, q.y), (50.0, 50.0));
        assert_eq!((q.vx, q.vy), (-0.1, -0.1));
    }
}
