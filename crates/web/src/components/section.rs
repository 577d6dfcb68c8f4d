// =============================================================================
// Portfolio Web - Reveal Section Component
// =============================================================================
// Page section that fades in the first time it scrolls into view.
// =============================================================================

use leptos::html;
use leptos::prelude::*;
use portfolio_motion::Section;
use send_wrapper::SendWrapper;

use crate::services::RevealWatch;
use crate::state::SiteState;
use crate::utils::class_when;

/// Watch `node` and flip the returned signal once it enters the viewport.
pub fn use_reveal(node: NodeRef<html::Section>) -> ReadSignal<bool> {
    let site = expect_context::<SiteState>();
    let (visible, set_visible) = signal(false);

    Effect::new(move |_| {
        let Some(element) = node.get() else {
            return;
        };

        match RevealWatch::attach(&element, &site.config.reveal, move || set_visible.set(true)) {
            Ok(watch) => {
                let watch = SendWrapper::new(watch);
                on_cleanup(move || drop(watch));
            }
            Err(err) => log::debug!("Reveal watch not attached: {}", err),
        }
    });

    visible
}

/// `<section>` with the page id of `section` and a one-shot `visible` class.
#[component]
pub fn RevealSection(section: Section, children: Children) -> impl IntoView {
    let node = NodeRef::<html::Section>::new();
    let visible = use_reveal(node);

    view! {
        <section
            id=section.id()
            node_ref=node
            class=move || class_when(section.id(), "visible", visible.get())
        >
            {children()}
        </section>
    }
}
