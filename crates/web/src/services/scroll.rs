// =============================================================================
// Portfolio Web - Smooth Scroll Service
// =============================================================================
// Drives the engine's scroll navigator from animation frames. One frame
// closure is shared by every job; starting a navigation cancels the frame
// of the job it replaces.
// =============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use portfolio_motion::scroll::target_offset;
use portfolio_motion::{ScrollConfig, ScrollNavigator, Section};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::DomError;
use crate::utils;

/// Smooth scroller handle. Clones share the same active job.
#[derive(Clone)]
pub struct SmoothScroller {
    inner: Rc<ScrollerInner>,
}

struct ScrollerInner {
    window: Window,
    navigator: RefCell<ScrollNavigator>,
    frame: Cell<Option<i32>>,
    step: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl SmoothScroller {
    pub fn new(config: &ScrollConfig) -> Result<Self, DomError> {
        let inner = Rc::new(ScrollerInner {
            window: utils::window()?,
            navigator: RefCell::new(ScrollNavigator::new(config.clone())),
            frame: Cell::new(None),
            step: RefCell::new(None),
        });

        let weak = Rc::downgrade(&inner);
        *inner.step.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            if let Some(inner) = weak.upgrade() {
                inner.on_frame(now);
            }
        }) as Box<dyn FnMut(f64)>));

        Ok(Self { inner })
    }

    /// Animate to `section`, leaving `nav_height` px for the fixed navbar.
    ///
    /// Returns `Ok(false)` when the section is not on the page.
    pub fn scroll_to(&self, section: Section, nav_height: f64) -> Result<bool, DomError> {
        let element = match utils::element_by_id(section.id()) {
            Ok(element) => element,
            Err(DomError::MissingElement(id)) => {
                log::debug!("Scroll target #{} not found", id);
                return Ok(false);
            }
            Err(err) => return Err(err),
        };

        let window = &self.inner.window;
        let current = window.scroll_y()?;
        let target = target_offset(utils::document_top(window, &element)?, nav_height);

        self.inner.cancel_frame();
        let job = self.inner.navigator.borrow_mut().begin(current, target);
        log::debug!("Scroll job {} to #{}: {} -> {}", job, section, current, target);
        self.inner.schedule();
        Ok(true)
    }

    /// Stop the active animation where it is.
    pub fn cancel(&self) {
        self.inner.cancel_frame();
        self.inner.navigator.borrow_mut().cancel();
    }
}

impl ScrollerInner {
    fn on_frame(&self, now: f64) {
        self.frame.set(None);
        let step = self.navigator.borrow_mut().advance(now);
        if let Some(step) = step {
            self.window.scroll_to_with_x_and_y(0.0, step.offset);
            if step.keep_going {
                self.schedule();
            }
        }
    }

    fn schedule(&self) {
        let step = self.step.borrow();
        let Some(step) = step.as_ref() else {
            return;
        };
        match self.window.request_animation_frame(step.as_ref().unchecked_ref()) {
            Ok(handle) => self.frame.set(Some(handle)),
            Err(err) => log::debug!("Scroll frame not scheduled: {}", DomError::from(err)),
        }
    }

    fn cancel_frame(&self) {
        if let Some(handle) = self.frame.take() {
            let _ = self.window.cancel_animation_frame(handle);
        }
    }
}

impl Drop for ScrollerInner {
    fn drop(&mut self) {
        self.cancel_frame();
    }
}
