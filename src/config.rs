//! Tunables for every page effect. Defaults reproduce the stock page; a host can
//! override any subset by passing a JSON object to `start_portfolio_with_config`.

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, Result};
use crate::particles::ParticleParams;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    // --- Particle background ---
    pub enable_particles: bool,
    pub particle_count: usize,
    pub particle_max_speed: f64, // per-axis velocity bound (px / frame)
    pub particle_min_size: f64,
    pub particle_max_size: f64,
    pub particle_fill: String,
    pub particle_canvas_opacity: f64,
    // --- Cursor trail ---
    pub enable_cursor_trail: bool,
    pub trail_count: usize,
    pub trail_step_ms: f64, // extra lag per trailing node
    // --- Hero typing ---
    pub typing_speed_ms: i32,
    pub typing_start_delay_ms: i32,
    // --- Scroll / nav ---
    pub nav_offset_px: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    // --- Theme ---
    pub theme_transition_ms: i32,
    /// One of `error`, `warn`, `info`, `debug`, `trace`, `off`.
    pub log_level: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            enable_particles: true,
            particle_count: 100,
            particle_max_speed: 0.25,
            particle_min_size: 1.0,
            particle_max_size: 3.0,
            particle_fill: "rgba(255, 255, 255, 0.5)".to_string(),
            particle_canvas_opacity: 0.3,
            enable_cursor_trail: true,
            trail_count: 5,
            trail_step_ms: 2.0,
            typing_speed_ms: 150,
            typing_start_delay_ms: 500,
            nav_offset_px: 200.0,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            theme_transition_ms: 300,
            log_level: "info".to_string(),
        }
    }
}

impl PortfolioConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: PortfolioConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        ParticleParams::from(self).check()?;
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(PortfolioError::InvalidConfig(format!(
                "reveal_threshold must be within 0..=1, got {}",
                self.reveal_threshold
            )));
        }
        if self.trail_step_ms < 0.0 || self.typing_speed_ms < 0 || self.typing_start_delay_ms < 0 {
            return Err(PortfolioError::InvalidConfig("timings must not be negative".into()));
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.log_level
            .parse::<log::LevelFilter>()
            .map_err(|_| PortfolioError::InvalidConfig(format!("unknown log level `{}`", self.log_level)))
    }
}
