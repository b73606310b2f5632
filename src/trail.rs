//! Cursor trail: `count` dots following the pointer, node `i` lagging by `i * step_ms`.
//!
//! Lag comes from a pointer history buffer sampled once per frame, so each node
//! shows where the pointer really was `i * step_ms` earlier.

use std::collections::VecDeque;

use web_sys::{Document, HtmlElement};

use crate::dom;
use crate::error::Result;
use crate::scheduler::Animated;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Sample {
    t: f64,
    x: f64,
    y: f64,
}

#[derive(Clone, Debug)]
pub struct CursorTrail {
    pointer: (f64, f64),
    history: VecDeque<Sample>,
    positions: Vec<(f64, f64)>,
    step_ms: f64,
}

impl CursorTrail {
    pub fn new(count: usize, step_ms: f64) -> Self {
        Self {
            pointer: (0.0, 0.0),
            history: VecDeque::new(),
            positions: vec![(0.0, 0.0); count],
            step_ms: step_ms.max(0.0),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Latest pointer coordinates; earlier unsampled moves are simply overwritten.
    pub fn record_pointer(&mut self, x: f64, y: f64) {
        self.pointer = (x, y);
    }

    pub fn positions(&self) -> &[(f64, f64)] {
        &self.positions
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Oldest trailing node opacity is lowest: `0.3 - i * 0.05`, floored at zero.
    pub fn opacity(index: usize) -> f64 {
        (0.3 - index as f64 * 0.05).max(0.0)
    }

    fn max_delay(&self) -> f64 {
        self.positions.len().saturating_sub(1) as f64 * self.step_ms
    }

    pub fn advance(&mut self, now_ms: f64) {
        let (x, y) = self.pointer;
        self.history.push_back(Sample { t: now_ms, x, y });

        // Keep one sample at or before the oldest node's target time.
        let horizon = now_ms - self.max_delay();
        while self.history.len() > 1 && self.history[1].t <= horizon {
            self.history.pop_front();
        }

        for (i, pos) in self.positions.iter_mut().enumerate() {
            let target = now_ms - i as f64 * self.step_ms;
            let sample = self
                .history
                .iter()
                .rev()
                .find(|s| s.t <= target)
                .or_else(|| self.history.front());
            if let Some(s) = sample {
                *pos = (s.x, s.y);
            }
        }
    }
}

// --- DOM layer ---------------------------------------------------------------

pub struct TrailLayer {
    trail: CursorTrail,
    nodes: Vec<HtmlElement>,
}

impl TrailLayer {
    pub fn install(doc: &Document, count: usize, step_ms: f64) -> Result<Self> {
        let body = dom::body(doc)?;
        let mut nodes = Vec::with_capacity(count);
        for i in 0..count {
            let node: HtmlElement = dom::create(doc, "div")?;
            node.set_class_name("cursor-trail");
            node.set_attribute(
                "style",
                &format!(
                    "position:fixed; width:6px; height:6px; background:rgba(255, 255, 255, {:.2}); border-radius:50%; pointer-events:none; z-index:9999; transition:all 0.1s ease;",
                    CursorTrail::opacity(i)
                ),
            ).ok();
            body.append_child(&node)?;
            nodes.push(node);
        }
        Ok(Self { trail: CursorTrail::new(count, step_ms), nodes })
    }

    pub fn record_pointer(&mut self, x: f64, y: f64) {
        self.trail.record_pointer(x, y);
    }
}

impl Animated for TrailLayer {
    fn frame(&mut self, now_ms: f64) {
        self.trail.advance(now_ms);
        for (node, &(x, y)) in self.nodes.iter().zip(self.trail.positions()) {
            dom::set_style(node, "left", &format!("{x}px"));
            dom::set_style(node, "top", &format!("{y}px"));
        }
    }
}
