// =============================================================================
// Portfolio Web - Particle Canvas Component
// =============================================================================
// Full-viewport canvas behind the page content. The backdrop starts once
// the canvas is mounted and is torn down with the component.
// =============================================================================

use leptos::html;
use leptos::prelude::*;
use send_wrapper::SendWrapper;

use crate::services::ParticleBackdrop;
use crate::state::SiteState;

/// Animated particle background.
#[component]
pub fn ParticleCanvas() -> impl IntoView {
    let site = expect_context::<SiteState>();
    let canvas_ref = NodeRef::<html::Canvas>::new();

    Effect::new(move |_| {
        // Not mounted yet: nothing to animate
        let Some(canvas) = canvas_ref.get() else {
            return;
        };

        match ParticleBackdrop::start(canvas, &site.config.particles) {
            Ok(backdrop) => {
                let backdrop = SendWrapper::new(backdrop);
                on_cleanup(move || backdrop.teardown());
            }
            Err(err) => log::debug!("Particle background disabled: {}", err),
        }
    });

    view! {
        <canvas node_ref=canvas_ref class="particle-canvas"></canvas>
    }
}
