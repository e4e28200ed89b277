//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{docs::DocsPage, download::DownloadPage, features::FeaturesPage, home::HomePage, pricing::PricingPage};
use crate::state::ui::UiState;
use crate::util::dark_mode::{self, BrowserThemeStore, RESTORE_SCRIPT};
use crate::util::i18n::{apply_document_language, translate};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `RESTORE_SCRIPT` runs before the stylesheet is applied so a persisted dark
/// preference never paints a light frame first.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script inner_html=RESTORE_SCRIPT></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session's theme store and UI state and provides both as contexts.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(dark_mode::browser_store());
    let ui = RwSignal::new(UiState::default());

    provide_context(theme);
    provide_context(ui);

    // Effects only run in the browser; this one runs once, after hydration.
    Effect::new(move || theme.update(BrowserThemeStore::restore_on_start));

    let language = Memo::new(move |_| ui.with(|u| u.language));
    Effect::new(move || {
        let _ = apply_document_language(language.get());
    });

    let not_found = move || view! { <p class="not-found">{move || translate(ui.get().language, "notfound.message")}</p> };

    view! {
        <Stylesheet id="leptos" href="/pkg/stompilot-site.css"/>
        <Title text="Stompilot"/>

        <Router>
            <Navbar/>
            <main>
                <Routes fallback=not_found>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("features") view=FeaturesPage/>
                    <Route path=StaticSegment("pricing") view=PricingPage/>
                    <Route path=StaticSegment("download") view=DownloadPage/>
                    <Route path=StaticSegment("docs") view=DocsPage/>
                </Routes>
            </main>
        </Router>
    }
}
