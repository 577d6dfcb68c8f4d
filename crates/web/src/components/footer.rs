// =============================================================================
// Portfolio Web - Footer Component
// =============================================================================

use leptos::prelude::*;

use crate::content::OWNER;

/// Page footer.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"© 2025 " {OWNER} ". Built with Leptos + Rust."</p>
        </footer>
    }
}
