//! Landing page: hero, feature grid, stats, testimonials, and closing CTA.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::feature_card::FeatureCard;
use crate::state::ui::UiState;
use crate::util::i18n::{Language, translate};

pub const GITHUB_URL: &str = "https://github.com/jbj338033/stompilot-app";

/// Feature grid entries: icon glyph and translation key prefix.
pub const HOME_FEATURES: [(&str, &str); 6] = [
    ("⚡", "home.features.realtime"),
    ("⏱", "home.features.performance"),
    ("💡", "home.features.intuitive"),
    ("</>", "home.features.customizable"),
    ("🛡", "home.features.secure"),
    ("☁", "home.features.cloud"),
];

/// Headline numbers and the translation key of their label.
pub const HOME_STATS: [(&str, &str); 3] = [("10K+", "home.stats.users"), ("99.9%", "home.stats.uptime"), ("24/7", "home.stats.support")];

pub const TESTIMONIAL_COUNT: usize = 3;

/// Resolve `<prefix>.<field>` in `lang`.
pub fn section_text(lang: Language, prefix: &str, field: &str) -> String {
    translate(lang, &format!("{prefix}.{field}")).to_owned()
}

/// Translation key prefix for the testimonial at zero-based `index`.
pub fn testimonial_prefix(index: usize) -> String {
    format!("home.testimonials.testimonial{}", index + 1)
}

/// Avatar letter for a testimonial author.
pub fn initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let lang = move || ui.get().language;

    view! {
        <div class="home">
            <section class="hero">
                <h1 class="hero__title gradient-text">{move || translate(lang(), "home.hero.title")}</h1>
                <p class="hero__subtitle">{move || translate(lang(), "home.hero.subtitle")}</p>
                <div class="hero__actions">
                    <A href="/download" attr:class="btn btn--primary btn--large">
                        {move || translate(lang(), "home.hero.download")}
                    </A>
                    <a href=GITHUB_URL target="_blank" rel="noopener noreferrer" class="btn btn--dark btn--large">
                        "GitHub"
                    </a>
                </div>
                <div class="hero__scroll">
                    <span>{move || translate(lang(), "home.scroll")}</span>
                    <span class="hero__chevron">"⌄"</span>
                </div>
            </section>

            <section class="home__features">
                <h2 class="section-title">{move || translate(lang(), "home.features.title")}</h2>
                <div class="grid grid--3">
                    {HOME_FEATURES
                        .into_iter()
                        .enumerate()
                        .map(|(index, (icon, prefix))| {
                            view! {
                                <FeatureCard
                                    icon=icon
                                    title=Signal::derive(move || section_text(lang(), prefix, "title"))
                                    description=Signal::derive(move || section_text(lang(), prefix, "description"))
                                    index=index
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="home__stats">
                <div class="grid grid--3">
                    {HOME_STATS
                        .into_iter()
                        .map(|(number, key)| {
                            view! {
                                <div class="stat">
                                    <h3 class="stat__number gradient-text">{number}</h3>
                                    <p class="stat__label">{move || translate(lang(), key)}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="home__testimonials">
                <h2 class="section-title">{move || translate(lang(), "home.testimonials.title")}</h2>
                <div class="grid grid--3">
                    {(0..TESTIMONIAL_COUNT)
                        .map(|index| {
                            let prefix = testimonial_prefix(index);
                            let name = {
                                let prefix = prefix.clone();
                                move || section_text(lang(), &prefix, "name")
                            };
                            let role = {
                                let prefix = prefix.clone();
                                move || section_text(lang(), &prefix, "role")
                            };
                            let content = move || section_text(lang(), &prefix, "content");
                            let avatar = {
                                let name = name.clone();
                                move || initial(&name())
                            };
                            view! {
                                <div class="testimonial">
                                    <div class="testimonial__header">
                                        <div class="testimonial__avatar">{avatar}</div>
                                        <div>
                                            <h3 class="testimonial__name">{name}</h3>
                                            <p class="testimonial__role">{role}</p>
                                        </div>
                                    </div>
                                    <p class="testimonial__content">{content}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="home__cta">
                <h2 class="gradient-text">{move || translate(lang(), "home.cta.title")}</h2>
                <p>{move || translate(lang(), "home.cta.description")}</p>
                <A href="/download" attr:class="btn btn--primary btn--large">
                    {move || translate(lang(), "home.cta.button")}
                </A>
            </section>
        </div>
    }
}
