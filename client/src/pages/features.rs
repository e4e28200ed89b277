//! Feature catalogue with interactive (simulated) testing demos.
//!
//! DESIGN
//! ======
//! The demos never open a socket. Their state lives in `DemoState`, a plain
//! struct the page wraps in a signal, so the transitions stay testable
//! without a browser.

#[cfg(test)]
#[path = "features_test.rs"]
mod features_test;

use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeKind};

/// Simulated round-trip delay for the "Send Test Message" demo.
pub const SEND_DELAY_MS: u64 = 1000;

pub const SENT_MESSAGE: &str = "New test message sent...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureDetail {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub benefits: [&'static str; 3],
}

pub const FEATURE_DETAILS: [FeatureDetail; 6] = [
    FeatureDetail {
        id: "real-time",
        icon: "⏱",
        title: "Real-time Testing",
        description: "Test your STOMP messages with instant feedback and monitoring",
        benefits: ["Live message monitoring", "Real-time connection status", "Message timing analytics"],
    },
    FeatureDetail {
        id: "connections",
        icon: "🔀",
        title: "Multiple Connections",
        description: "Manage and test multiple STOMP connections simultaneously",
        benefits: ["Multi-connection support", "Connection profiles", "Connection health monitoring"],
    },
    FeatureDetail {
        id: "security",
        icon: "🛡",
        title: "Security Features",
        description: "Secure your STOMP connections with advanced security options",
        benefits: ["SSL/TLS support", "Authentication handling", "Header security testing"],
    },
    FeatureDetail {
        id: "extensions",
        icon: "🧩",
        title: "Extensible Platform",
        description: "Extend functionality with plugins and custom scripts",
        benefits: ["Custom protocol support", "Plugin architecture", "Script automation"],
    },
    FeatureDetail {
        id: "automation",
        icon: "🔁",
        title: "Test Automation",
        description: "Automate your STOMP testing workflows",
        benefits: ["Automated test suites", "CI/CD integration", "Batch testing"],
    },
    FeatureDetail {
        id: "debugging",
        icon: ">_",
        title: "Advanced Debugging",
        description: "Powerful tools for debugging STOMP messages",
        benefits: ["Message inspector", "Network analysis", "Error tracking"],
    },
];

pub const CONNECTION_SNIPPET: &str = r#"// Connection Configuration
{
  url: "ws://localhost:8080/ws",
  headers: {
    "heart-beat": "0,10000",
    "accept-version": "1.2"
  }
}"#;

pub const SECURITY_SNIPPET: &str = r#"// Security Configuration
{
  ssl: true,
  auth: {
    type: "basic",
    credentials: "username:password"
  },
  headers: {
    "Authorization": "Bearer ****"
  }
}"#;

pub const PERFORMANCE_STATS: [(&str, &str); 3] = [("Latency", "45ms"), ("Messages/sec", "152"), ("Success Rate", "99.9%")];

/// Local state behind the connection and message demos.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DemoState {
    pub connected: bool,
    pub sending: bool,
    pub messages: Vec<String>,
}

impl DemoState {
    pub fn toggle_connection(&mut self) {
        self.connected = !self.connected;
    }

    /// Start a simulated send. Returns `false` if one is already in flight.
    pub fn begin_send(&mut self) -> bool {
        if self.sending {
            return false;
        }
        self.sending = true;
        true
    }

    pub fn finish_send(&mut self) {
        self.messages.push(SENT_MESSAGE.to_owned());
        self.sending = false;
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn connection_badge(&self) -> (BadgeKind, &'static str) {
        if self.connected { (BadgeKind::Success, "Connected") } else { (BadgeKind::Warning, "Disconnected") }
    }
}

#[component]
fn DemoCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="demo-card">
            <h3 class="demo-card__title">{title}</h3>
            {children()}
        </div>
    }
}

#[component]
pub fn FeaturesPage() -> impl IntoView {
    let demo = RwSignal::new(DemoState::default());

    let on_send = move |_| {
        if !demo.try_update(DemoState::begin_send).unwrap_or(false) {
            return;
        }
        set_timeout(move || demo.update(DemoState::finish_send), std::time::Duration::from_millis(SEND_DELAY_MS));
    };

    view! {
        <div class="page features">
            <h1 class="page__title gradient-text">"Powerful Features for STOMP Testing"</h1>
            <p class="page__subtitle">
                "Everything you need to test, debug, and monitor your STOMP messaging system in one powerful tool."
            </p>

            <div class="grid grid--3">
                {FEATURE_DETAILS
                    .into_iter()
                    .map(|feature| {
                        view! {
                            <div class="feature-detail" id=feature.id>
                                <div class="feature-detail__icon">{feature.icon}</div>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                                <ul class="check-list">
                                    {feature.benefits.into_iter().map(|b| view! { <li>{b}</li> }).collect_view()}
                                </ul>
                                <a href="#demos" class="feature-detail__demo">"Try Demo →"</a>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <section id="demos" class="demos">
                <h2 class="section-title">"Interactive Demos"</h2>
                <div class="grid grid--2">
                    <DemoCard title="Connection Testing">
                        <div class="demo-card__row">
                            <div class="demo-card__badges">
                                <Badge kind=Signal::derive(move || demo.with(|d| d.connection_badge().0))>
                                    {move || demo.with(|d| d.connection_badge().1)}
                                </Badge>
                                <Show when=move || demo.with(|d| d.sending)>
                                    <Badge kind=BadgeKind::Info>"Testing..."</Badge>
                                </Show>
                            </div>
                            <button
                                class="btn"
                                class:btn--danger=move || demo.with(|d| d.connected)
                                class:btn--success=move || !demo.with(|d| d.connected)
                                on:click=move |_| demo.update(DemoState::toggle_connection)
                            >
                                {move || if demo.with(|d| d.connected) { "■ Disconnect" } else { "▶ Connect" }}
                            </button>
                        </div>
                        <pre class="snippet"><code>{CONNECTION_SNIPPET}</code></pre>
                    </DemoCard>

                    <DemoCard title="Message Testing">
                        <Badge kind=BadgeKind::Info>"⏲ Response Time: 45ms"</Badge>
                        <div class="demo-card__log">
                            <For
                                each=move || demo.with(|d| d.messages.clone().into_iter().enumerate().collect::<Vec<_>>())
                                key=|(index, _)| *index
                                children=|(_, message)| view! { <div class="demo-card__message">{message}</div> }
                            />
                        </div>
                        <div class="demo-card__row">
                            <button
                                class="btn btn--primary"
                                on:click=on_send
                                disabled=move || demo.with(|d| d.sending)
                            >
                                "▶ Send Test Message"
                            </button>
                            <button class="btn btn--ghost" on:click=move |_| demo.update(DemoState::clear)>
                                "Clear"
                            </button>
                        </div>
                    </DemoCard>

                    <DemoCard title="Security Testing">
                        <div class="demo-card__badges">
                            <Badge kind=BadgeKind::Success>"SSL Enabled"</Badge>
                            <Badge kind=BadgeKind::Info>"Auth Required"</Badge>
                        </div>
                        <pre class="snippet"><code>{SECURITY_SNIPPET}</code></pre>
                    </DemoCard>

                    <DemoCard title="Performance Monitoring">
                        <div class="grid grid--3">
                            {PERFORMANCE_STATS
                                .into_iter()
                                .map(|(label, value)| {
                                    view! {
                                        <div class="demo-stat">
                                            <div class="demo-stat__label">{label}</div>
                                            <div class="demo-stat__value">{value}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </DemoCard>
                </div>
            </section>
        </div>
    }
}
