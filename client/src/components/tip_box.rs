//! Highlighted hint or warning paragraph inside docs content.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TipKind {
    #[default]
    Info,
    Warning,
}

impl TipKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "tip-box tip-box--info",
            Self::Warning => "tip-box tip-box--warning",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "✔",
            Self::Warning => "⚠",
        }
    }
}

#[component]
pub fn TipBox(#[prop(optional)] kind: TipKind, children: Children) -> impl IntoView {
    view! {
        <div class=kind.class()>
            <span class="tip-box__icon">{kind.icon()}</span>
            <div class="tip-box__body">{children()}</div>
        </div>
    }
}
