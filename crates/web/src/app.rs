// =============================================================================
// Portfolio Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Imports
// -----------------------------------------------------------------------------

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};

use crate::content::OWNER;
use crate::pages::HomePage;
use crate::state::SiteState;

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide page-wide state
    let site = SiteState::new();
    log::debug!("Motion config: {:?}", site.config);
    provide_context(site);

    view! {
        <Title text=format!("{} | Portfolio", OWNER) />
        <HomePage />
    }
}
