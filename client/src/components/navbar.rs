//! Top navigation bar with page links, theme and language switches.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar is the only view that mutates the theme store; every page reads
//! the resulting `dark` class through CSS. It also owns the mobile menu, which
//! closes whenever the route changes.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::state::ui::UiState;
use crate::util::dark_mode::BrowserThemeStore;
use crate::util::i18n::translate;

/// Links shown in both the desktop bar and the mobile menu.
pub const NAV_LINKS: [(&str, &str); 3] = [("/docs", "nav.docs"), ("/features", "nav.features"), ("/pricing", "nav.pricing")];

/// CSS class for a nav link, marking the one that matches the current path.
pub fn nav_link_class(target: &str, current_path: &str) -> &'static str {
    if target == current_path.trim_end_matches('/') {
        "navbar__link navbar__link--active"
    } else {
        "navbar__link"
    }
}

/// Icon for the theme button: the mode the click would switch to.
pub fn theme_icon(is_dark: bool) -> &'static str {
    if is_dark { "☀" } else { "☾" }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = expect_context::<RwSignal<BrowserThemeStore>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    Effect::new(move || {
        let _ = location.pathname.get();
        ui.update(UiState::close_menu);
    });

    #[cfg(feature = "hydrate")]
    {
        let _ = window_event_listener(leptos::ev::scroll, move |_| {
            let offset = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            ui.maybe_update(|u| u.set_scroll_offset(offset));
        });
    }

    let on_toggle_theme = move |_| {
        theme.update(|store| {
            store.toggle();
        });
    };
    let on_toggle_language = move |_| ui.update(UiState::toggle_language);
    let on_toggle_menu = move |_| ui.update(UiState::toggle_menu);

    let lang = move || ui.get().language;
    let is_dark = move || theme.with(BrowserThemeStore::current);
    let link_class = move |target: &'static str| move || nav_link_class(target, &location.pathname.get());

    view! {
        <nav class="navbar" class:navbar--scrolled=move || ui.get().scrolled>
            <div class="navbar__inner">
                <A href="/" attr:class="navbar__brand">
                    <img src="/icon.png" alt="Logo" class="navbar__logo"/>
                    <span class="navbar__title">"Stompilot"</span>
                </A>

                <div class="navbar__links">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, key)| {
                            view! {
                                <A href=href attr:class=link_class(href)>
                                    {move || translate(lang(), key)}
                                </A>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="navbar__actions">
                    <button
                        class="btn navbar__icon-btn"
                        on:click=on_toggle_theme
                        aria-label=move || translate(lang(), "nav.toggle_theme")
                    >
                        {move || theme_icon(is_dark())}
                    </button>
                    <button
                        class="btn navbar__icon-btn"
                        on:click=on_toggle_language
                        aria-label=move || translate(lang(), "nav.change_language")
                    >
                        {move || lang().code().to_ascii_uppercase()}
                    </button>
                    <A href="/download" attr:class="btn btn--primary navbar__download">
                        "⬇ "
                        {move || translate(lang(), "nav.download")}
                    </A>
                </div>

                <button class="btn navbar__menu-btn" on:click=on_toggle_menu>
                    {move || if ui.get().menu_open { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || ui.get().menu_open>
                <div class="navbar__mobile">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, key)| {
                            view! {
                                <A href=href attr:class="navbar__mobile-link">
                                    {move || translate(lang(), key)}
                                </A>
                            }
                        })
                        .collect_view()}
                    <div class="navbar__mobile-actions">
                        <button class="btn navbar__icon-btn" on:click=on_toggle_theme>
                            {move || theme_icon(is_dark())}
                        </button>
                        <button class="btn navbar__icon-btn" on:click=on_toggle_language>
                            {move || lang().code().to_ascii_uppercase()}
                        </button>
                    </div>
                    <A href="/download" attr:class="btn btn--primary navbar__mobile-download">
                        {move || translate(lang(), "nav.download")}
                    </A>
                </div>
            </Show>
        </nav>
    }
}
