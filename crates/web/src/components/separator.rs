// =============================================================================
// Portfolio Web - Section Separators
// =============================================================================

use leptos::prelude::*;

/// Separator flavour.
#[derive(Clone, Copy, Default, PartialEq)]
pub enum SeparatorVariant {
    #[default]
    Line,
    /// Wider glow divider used under the hero
    Glow,
}

impl SeparatorVariant {
    fn class(&self) -> &'static str {
        match self {
            SeparatorVariant::Line => "separator",
            SeparatorVariant::Glow => "separator separator-glow",
        }
    }
}

/// Decorative divider between sections.
#[component]
pub fn Separator(#[prop(optional)] variant: SeparatorVariant) -> impl IntoView {
    view! {
        <div class=variant.class() aria-hidden="true">
            <span class="separator-line"></span>
        </div>
    }
}
