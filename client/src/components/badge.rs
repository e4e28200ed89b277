//! Small status pill used by the feature demos.

#[cfg(test)]
#[path = "badge_test.rs"]
mod badge_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeKind {
    Success,
    Warning,
    Info,
}

impl BadgeKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "badge badge--success",
            Self::Warning => "badge badge--warning",
            Self::Info => "badge badge--info",
        }
    }
}

#[component]
pub fn Badge(#[prop(into)] kind: Signal<BadgeKind>, children: Children) -> impl IntoView {
    view! { <span class=move || kind.get().class()>{children()}</span> }
}
