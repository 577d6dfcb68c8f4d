// =============================================================================
// Portfolio Web - Navigation Bar Component
// =============================================================================
// Fixed navbar with one link per page section.
// Links smooth-scroll to their section instead of jumping.
// Mobile-responsive with a hamburger toggle.
// =============================================================================

use leptos::ev::MouseEvent;
use leptos::html;
use leptos::prelude::*;
use portfolio_motion::{Section, NAV_ITEMS};
use send_wrapper::SendWrapper;

use crate::content::BRAND;
use crate::services::SmoothScroller;
use crate::state::SiteState;
use crate::utils::class_when;

/// Navigation bar component.
#[component]
pub fn Navbar() -> impl IntoView {
    let site = expect_context::<SiteState>();

    // Mobile menu state
    let menu_open = RwSignal::new(false);
    let nav_ref = NodeRef::<html::Nav>::new();

    let scroller = match SmoothScroller::new(&site.config.scroll) {
        Ok(scroller) => Some(SendWrapper::new(scroller)),
        Err(err) => {
            log::debug!("Smooth scrolling disabled: {}", err);
            None
        }
    };

    // Unmounting mid-animation stops the scroll where it is
    let pending = scroller.clone();
    on_cleanup(move || {
        if let Some(scroller) = &pending {
            scroller.cancel();
        }
    });

    let links = NAV_ITEMS
        .into_iter()
        .map(|section| {
            let scroller = scroller.clone();
            let on_click = move |ev: MouseEvent| {
                ev.prevent_default();
                let nav_height = nav_ref
                    .get_untracked()
                    .map(|nav| nav.offset_height() as f64)
                    .unwrap_or(0.0);
                if let Some(scroller) = &scroller {
                    navigate(scroller, section, nav_height);
                }
                menu_open.set(false);
            };

            view! {
                <li>
                    <a href=section.href() on:click=on_click>{section.label()}</a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="navbar" node_ref=nav_ref>
            <div class="nav-brand">
                <h2>{BRAND}</h2>
            </div>

            // Hamburger button (mobile only)
            <button
                class="mobile-menu-btn"
                aria-label="Toggle menu"
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>

            <ul class=move || class_when("nav-links", "mobile-open", menu_open.get())>
                {links}
            </ul>
        </nav>
    }
}

fn navigate(scroller: &SmoothScroller, section: Section, nav_height: f64) {
    if let Err(err) = scroller.scroll_to(section, nav_height) {
        log::debug!("Navigation to #{} skipped: {}", section, err);
    }
}
