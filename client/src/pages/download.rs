//! Installer downloads for each supported desktop platform.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::i18n::{translate, translate_with};

/// One installer offered on the download page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DownloadItem {
    pub platform: &'static str,
    pub version: &'static str,
    pub size: &'static str,
    pub icon: &'static str,
    pub description_key: &'static str,
    pub url: &'static str,
}

pub const DOWNLOADS: [DownloadItem; 3] = [
    DownloadItem {
        platform: "Windows",
        version: "1.0.0",
        size: "68.5 MB",
        icon: "⊞",
        description_key: "download.windows.description",
        url: "https://github.com/jbj338033/stompilot-app/releases/latest/download/Stompilot.exe",
    },
    DownloadItem {
        platform: "macOS",
        version: "1.0.0",
        size: "72.3 MB",
        icon: "⌘",
        description_key: "download.mac.description",
        url: "/Stompilot.dmg",
    },
    DownloadItem {
        platform: "Linux",
        version: "1.0.0",
        size: "78.4 MB",
        icon: "🐧",
        description_key: "download.linux.description",
        url: "https://github.com/jbj338033/stompilot-app/releases/latest/download/Stompilot.AppImage",
    },
];

pub const REQUIREMENT_KEYS: [&str; 3] =
    ["download.requirements.windows", "download.requirements.mac", "download.requirements.memory"];

impl DownloadItem {
    /// Secondary line under the platform name, e.g. `v1.0.0 • 68.5 MB`.
    pub fn meta_line(&self) -> String {
        format!("v{} • {}", self.version, self.size)
    }
}

#[component]
pub fn DownloadPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let lang = move || ui.get().language;

    view! {
        <div class="page download">
            <h1 class="page__title gradient-text">{move || translate(lang(), "download.title")}</h1>
            <p class="page__subtitle">{move || translate(lang(), "download.subtitle")}</p>

            <div class="grid grid--3">
                {DOWNLOADS
                    .into_iter()
                    .map(|item| {
                        view! {
                            <div class="download-card">
                                <div class="download-card__header">
                                    <span class="download-card__icon">{item.icon}</span>
                                    <div>
                                        <h2 class="download-card__platform">{item.platform}</h2>
                                        <p class="download-card__meta">{item.meta_line()}</p>
                                    </div>
                                </div>
                                <p class="download-card__description">
                                    {move || translate(lang(), item.description_key)}
                                </p>
                                <a href=item.url class="btn btn--primary download-card__button">
                                    {move || translate_with(lang(), "download.button", &[("platform", item.platform)])}
                                </a>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="download__requirements">
                <h3>{move || translate(lang(), "download.requirements.title")}</h3>
                <ul>
                    {REQUIREMENT_KEYS
                        .into_iter()
                        .map(|key| view! { <li>{move || translate(lang(), key)}</li> })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
