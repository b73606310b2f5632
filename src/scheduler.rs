//! Single frame driver for every animated layer.
//!
//! Layers register with `FrameScheduler`; `start_frame_loop` calls
//! `FrameScheduler::tick` from `requestAnimationFrame` until the returned
//! handle is stopped. Tests call `tick` directly with synthetic timestamps.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::dom;
use crate::error::Result;

/// Something repainted once per display frame.
pub trait Animated {
    fn frame(&mut self, now_ms: f64);
}

pub type SharedLayer = Rc<RefCell<dyn Animated>>;

#[derive(Default)]
pub struct FrameScheduler {
    layers: Vec<SharedLayer>,
    frames: u64,
    last_ms: Option<f64>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layers run in registration order.
    pub fn add(&mut self, layer: SharedLayer) {
        self.layers.push(layer);
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_frame_ms(&self) -> Option<f64> {
        self.last_ms
    }

    pub fn tick(&mut self, now_ms: f64) {
        for layer in &self.layers {
            layer.borrow_mut().frame(now_ms);
        }
        self.frames += 1;
        self.last_ms = Some(now_ms);
    }
}

/// Stops the animation-frame loop at the next frame boundary.
#[derive(Clone, Debug)]
pub struct FrameLoopHandle {
    running: Rc<Cell<bool>>,
}

impl FrameLoopHandle {
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn stop(&self) {
        self.running.set(false);
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub fn start_frame_loop(scheduler: Rc<RefCell<FrameScheduler>>) -> Result<FrameLoopHandle> {
    let running = Rc::new(Cell::new(true));
    let handle = FrameLoopHandle { running: running.clone() };

    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        if !running.get() {
            return;
        }
        scheduler.borrow_mut().tick(ts);
        if let Ok(w) = dom::window() {
            if let Some(cb) = f.borrow().as_ref() {
                let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(cb) = g.borrow().as_ref() {
        dom::window()?.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        name: &'static str,
        log: Rc<RefCell<Vec<(&'static str, f64)>>>,
    }

    impl Animated for Recorder {
        fn frame(&mut self, now_ms: f64) {
            self.log.borrow_mut().push((self.name, now_ms));
        }
    }

    #[test]
    fn ticks_layers_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut sched = FrameScheduler::new();
        sched.add(Rc::new(RefCell::new(Recorder { name: "particles", log: log.clone() })));
        sched.add(Rc::new(RefCell::new(Recorder { name: "trail", log: log.clone() })));
        sched.tick(16.0);
        sched.tick(32.0);
        assert_eq!(
            *log.borrow(),
            vec![("particles", 16.0), ("trail", 16.0), ("particles", 32.0), ("trail", 32.0)]
        );
        assert_eq!(sched.frames(), 2);
        assert_eq!(sched.last_frame_ms(), Some(32.0));
    }

    #[test]
    fn empty_scheduler_still_counts_frames() {
        let mut sched = FrameScheduler::new();
        assert!(sched.is_empty());
        sched.tick(0.0);
        assert_eq!(sched.frames(), 1);
    }
}
