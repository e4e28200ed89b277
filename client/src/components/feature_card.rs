//! Icon + title + description card used on the home page feature grid.

use leptos::prelude::*;

/// Seconds between the entrance animations of consecutive cards.
pub const STAGGER_SECS: f64 = 0.2;

/// Inline style carrying the entrance delay for the card at `index`.
pub fn entrance_delay_style(index: usize) -> String {
    #[allow(clippy::cast_precision_loss)]
    let delay = index as f64 * STAGGER_SECS;
    format!("--enter-delay: {delay:.1}s")
}

#[component]
pub fn FeatureCard(
    icon: &'static str,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] description: Signal<String>,
    #[prop(default = 0)] index: usize,
) -> impl IntoView {
    view! {
        <div class="feature-card" style=entrance_delay_style(index)>
            <div class="feature-card__icon">{icon}</div>
            <h3 class="feature-card__title">{move || title.get()}</h3>
            <p class="feature-card__description">{move || description.get()}</p>
        </div>
    }
}
