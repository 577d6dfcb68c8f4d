// =============================================================================
// Portfolio Web - Section Reveal Watch
// =============================================================================
// IntersectionObserver binding for the engine's per-section reveal state
// machine. The commit runs on the next animation frame so the section's
// initial state is painted before the `visible` class lands.
// =============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use portfolio_motion::{RevealAction, RevealConfig, SectionReveal};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::DomError;
use crate::utils;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Intersection watch on one section. Disconnects on drop.
pub struct RevealWatch {
    observer: IntersectionObserver,
    state: Rc<RefCell<SectionReveal>>,
    _callback: ObserverCallback,
}

impl RevealWatch {
    /// Observe `element`; `on_reveal` runs at most once.
    pub fn attach(
        element: &Element,
        config: &RevealConfig,
        on_reveal: impl Fn() + 'static,
    ) -> Result<Self, DomError> {
        let state = Rc::new(RefCell::new(SectionReveal::new()));
        let on_reveal = Rc::new(on_reveal);

        let callback_state = state.clone();
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let intersecting = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());

                if callback_state.borrow_mut().on_intersect(intersecting) != RevealAction::ScheduleCommit {
                    return;
                }

                let state = callback_state.clone();
                let on_reveal = on_reveal.clone();
                let commit = Closure::once_into_js(move || {
                    if state.borrow_mut().commit() {
                        (*on_reveal)();
                    }
                    observer.disconnect();
                });
                if let Err(err) = schedule_once(&commit) {
                    // Back to hidden: the next intersection event retries
                    callback_state.borrow_mut().abandon();
                    log::debug!("Reveal commit not scheduled: {}", err);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.threshold));
        options.set_root_margin(&config.root_margin());

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            state,
            _callback: callback,
        })
    }
}

impl Drop for RevealWatch {
    fn drop(&mut self) {
        self.state.borrow_mut().release();
        self.observer.disconnect();
    }
}

fn schedule_once(callback: &JsValue) -> Result<i32, DomError> {
    Ok(utils::window()?.request_animation_frame(callback.unchecked_ref())?)
}
