#![cfg(target_arch = "wasm32")]
use crt_core::{Monitor, MonitorConfig, MonotonicClock};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod frame;
mod overlay;
mod style;
mod surface;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("crt-web starting");
    Ok(())
}

/// Mount the effect inside the element with id `container_id`.
#[wasm_bindgen]
pub fn mount(container_id: &str, active: bool) -> Result<CrtHandle, JsValue> {
    init(container_id, active).map_err(|e| {
        log::error!("mount error: {:?}", e);
        JsValue::from_str(&format!("{:#}", e))
    })
}

fn init(container_id: &str, active: bool) -> anyhow::Result<CrtHandle> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root = document
        .get_element_by_id(container_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", container_id))?;

    let config = MonitorConfig {
        active,
        ..MonitorConfig::default()
    };
    let monitor = Monitor::mount(config, MonotonicClock::start())?;

    // A page that cannot host the canvases still gets a running (invisible) core
    let surface = match surface::Surface::build(
        &document,
        &root,
        monitor.pattern().width(),
        monitor.pattern().height(),
    ) {
        Ok(s) => {
            s.draw_pattern(monitor.pattern());
            s.draw_noise(monitor.noise());
            Some(s)
        }
        Err(e) => {
            log::error!("[surface] setup failed: {:?}", e);
            None
        }
    };

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        monitor,
        surface,
        last_instant: Instant::now(),
    }));
    frame_ctx.borrow_mut().restyle();
    let frame_loop = frame::start_loop(frame_ctx.clone());
    Ok(CrtHandle {
        frame_ctx,
        frame_loop,
    })
}

/// JS-side handle to a mounted effect. Freeing it unmounts.
#[wasm_bindgen]
pub struct CrtHandle {
    frame_ctx: Rc<RefCell<frame::FrameContext>>,
    frame_loop: frame::LoopHandle,
}

impl CrtHandle {
    fn with_ctx(&self, f: impl FnOnce(&mut frame::FrameContext)) {
        match self.frame_ctx.try_borrow_mut() {
            Ok(mut ctx) => f(&mut ctx),
            Err(_) => log::warn!("[crt] context busy; dropping call"),
        }
    }
}

#[wasm_bindgen]
impl CrtHandle {
    pub fn set_active(&self, active: bool) {
        self.with_ctx(|ctx| {
            ctx.monitor.set_active(active);
            ctx.restyle();
        });
    }

    pub fn set_headline(&self, text: &str) {
        self.with_ctx(|ctx| {
            ctx.monitor.set_headline(text);
            ctx.restyle();
        });
    }

    pub fn restart_headline(&self) {
        self.with_ctx(|ctx| {
            ctx.monitor.restart_headline();
            ctx.restyle();
        });
    }

    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.frame_ctx
            .try_borrow()
            .map(|ctx| ctx.monitor.is_active())
            .unwrap_or(false)
    }

    /// Stop every process and clear the text layer. The canvases stay on the
    /// page showing their last frame.
    pub fn unmount(&self) {
        self.frame_loop.cancel();
        self.with_ctx(|ctx| {
            ctx.monitor.unmount();
            if let Some(surface) = &ctx.surface {
                surface.apply_text(None);
            }
        });
    }
}

impl Drop for CrtHandle {
    fn drop(&mut self) {
        if !self.frame_loop.is_cancelled() {
            self.unmount();
        }
    }
}
