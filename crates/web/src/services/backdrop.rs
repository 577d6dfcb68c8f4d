// =============================================================================
// Portfolio Web - Particle Backdrop Driver
// =============================================================================
// Owns the particle simulator, its animation-frame loop and the window
// resize listener. Dropping the backdrop (or calling `teardown`) cancels the
// pending frame and removes the listener; both are idempotent.
// =============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use portfolio_motion::{ParticleConfig, ParticleSimulator};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

use crate::error::DomError;
use crate::services::canvas::CanvasSurface;
use crate::utils;

/// Running particle animation bound to a canvas.
pub struct ParticleBackdrop {
    inner: Rc<BackdropInner>,
}

struct BackdropInner {
    window: Window,
    simulator: RefCell<ParticleSimulator<CanvasSurface>>,
    /// Pending animation-frame handle
    frame: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
    resize: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl ParticleBackdrop {
    /// Size `canvas` to the window, populate the field and start the loop.
    pub fn start(canvas: HtmlCanvasElement, config: &ParticleConfig) -> Result<Self, DomError> {
        let window = utils::window()?;
        let viewport = utils::viewport(&window)?;
        let surface = CanvasSurface::new(canvas)?;
        let simulator = ParticleSimulator::new(surface, viewport, config.clone());

        let inner = Rc::new(BackdropInner {
            window,
            simulator: RefCell::new(simulator),
            frame: Cell::new(None),
            tick: RefCell::new(None),
            resize: RefCell::new(None),
        });

        // Frame loop: closures hold weak refs so dropping the backdrop frees them
        let weak = Rc::downgrade(&inner);
        *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.frame.set(None);
                let running = inner.simulator.borrow_mut().tick();
                if running {
                    inner.schedule();
                }
            }
        }) as Box<dyn FnMut()>));

        let weak = Rc::downgrade(&inner);
        let resize = Closure::wrap(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.on_resize();
            }
        }) as Box<dyn FnMut()>);
        inner
            .window
            .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;
        *inner.resize.borrow_mut() = Some(resize);

        inner.schedule();
        log::info!("Particle backdrop started");
        Ok(Self { inner })
    }

    /// Stop the loop and release the resize listener.
    pub fn teardown(&self) {
        self.inner.teardown();
    }
}

impl Drop for ParticleBackdrop {
    fn drop(&mut self) {
        self.inner.teardown();
    }
}

impl BackdropInner {
    fn schedule(&self) {
        let tick = self.tick.borrow();
        let Some(tick) = tick.as_ref() else {
            return;
        };
        match self.window.request_animation_frame(tick.as_ref().unchecked_ref()) {
            Ok(handle) => self.frame.set(Some(handle)),
            Err(err) => log::debug!("Particle frame not scheduled: {}", DomError::from(err)),
        }
    }

    fn on_resize(&self) {
        match utils::viewport(&self.window) {
            Ok(viewport) => {
                self.simulator.borrow_mut().resize(viewport);
            }
            Err(err) => log::debug!("Resize ignored: {}", err),
        }
    }

    fn teardown(&self) {
        if let Some(handle) = self.frame.take() {
            let _ = self.window.cancel_animation_frame(handle);
        }
        if let Some(resize) = self.resize.borrow_mut().take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
        }
        self.simulator.borrow_mut().teardown();
        self.tick.borrow_mut().take();
    }
}
