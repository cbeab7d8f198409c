use crate::surface::Surface;
use crt_core::Monitor;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub monitor: Monitor,
    /// `None` when the page had nowhere to draw; the monitor still runs.
    pub surface: Option<Surface>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let update = self.monitor.frame(dt);
        if let Some(surface) = &self.surface {
            if update.noise {
                surface.draw_noise(self.monitor.noise());
            }
        }
        if update.needs_restyle() {
            self.restyle();
        }
    }

    /// One render pass over the latest snapshot.
    pub fn restyle(&mut self) {
        let Some(surface) = &self.surface else {
            return;
        };
        let scene = self.monitor.scene();
        surface.apply_scene(&scene);
        surface.apply_text(self.monitor.text_overlay().as_ref());
    }
}

struct LoopState {
    cancelled: Cell<bool>,
    raf_id: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopState {
    fn request_frame(&self) {
        let Some(window) = web::window() else {
            return;
        };
        let tick = self.tick.borrow();
        let Some(cb) = tick.as_ref() else {
            return;
        };
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.raf_id.set(Some(id)),
            Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }
}

/// Owns the animation-frame loop. Cancelling, or dropping the handle, stops
/// it; a frame that was already queued returns without touching any state.
pub struct LoopHandle {
    state: Rc<LoopState>,
}

impl LoopHandle {
    pub fn cancel(&self) {
        if self.state.cancelled.replace(true) {
            return;
        }
        if let (Some(window), Some(id)) = (web::window(), self.state.raf_id.take()) {
            _ = window.cancel_animation_frame(id);
        }
        log::info!("[frame] loop cancelled");
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.cancelled.get()
    }
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let state = Rc::new(LoopState {
        cancelled: Cell::new(false),
        raf_id: Cell::new(None),
        tick: RefCell::new(None),
    });
    let weak: Weak<LoopState> = Rc::downgrade(&state);
    *state.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let Some(state) = weak.upgrade() else {
            return;
        };
        state.raf_id.set(None);
        if state.cancelled.get() {
            return;
        }
        match frame_ctx.try_borrow_mut() {
            Ok(mut ctx) => ctx.frame(),
            Err(_) => log::warn!("[frame] context busy; skipping frame"),
        }
        if !state.cancelled.get() {
            state.request_frame();
        }
    }) as Box<dyn FnMut()>));
    state.request_frame();
    LoopHandle { state }
}
