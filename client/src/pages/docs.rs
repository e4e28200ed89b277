//! Documentation page with a section sidebar.
//!
//! The active section is view-local and resets on every visit.

#[cfg(test)]
#[path = "docs_test.rs"]
mod docs_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::code_block::CodeBlock;
use crate::components::tip_box::{TipBox, TipKind};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DocsSection {
    #[default]
    GettingStarted,
    Features,
    Api,
    Configuration,
}

impl DocsSection {
    pub const ALL: [Self; 4] = [Self::GettingStarted, Self::Features, Self::Api, Self::Configuration];

    pub fn id(self) -> &'static str {
        match self {
            Self::GettingStarted => "getting-started",
            Self::Features => "features",
            Self::Api => "api",
            Self::Configuration => "configuration",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::GettingStarted => "Getting Started",
            Self::Features => "Features & Usage",
            Self::Api => "API Reference",
            Self::Configuration => "Configuration",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            Self::GettingStarted => "Start Here",
            Self::Features => "Essential",
            Self::Api => "Technical",
            Self::Configuration => "Advanced",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::GettingStarted => "🚀",
            Self::Features => "📖",
            Self::Api => "</>",
            Self::Configuration => "⚙",
        }
    }
}

const INSTALL_SNIPPET: &str = "npm install stompilot";

const QUICK_START_SNIPPET: &str = r"import Stompilot from 'stompilot';

const client = new Stompilot({
  url: 'ws://localhost:8080/ws',
  destination: '/topic/messages'
});

client.connect();";

const BASIC_EXAMPLE_SNIPPET: &str = r"// Initialize the client
const client = new Stompilot({
  url: 'ws://localhost:8080/ws',
  destination: '/topic/messages'
});

// Subscribe to messages
client.subscribe('/topic/messages', message => {
  console.log('Received:', message);
});

// Send a test message
client.send('/topic/messages', {
  body: 'Hello STOMP!',
  headers: {
    'content-type': 'text/plain'
  }
});";

const TEST_CASE_SNIPPET: &str = r"// Example test case
const test = new StompilotTest({
  name: 'Message Round Trip',
  destination: '/topic/test',
  payload: { message: 'test' },
  timeout: 5000
});

test.run();";

const KEY_FEATURES: [(&str, &str); 4] = [
    ("Real-time Testing", "Test STOMP messages in real-time with instant feedback"),
    ("Message Inspector", "Detailed message inspection with headers and payload visualization"),
    ("Connection Manager", "Manage multiple STOMP connections simultaneously"),
    ("Message Templates", "Save and reuse common message patterns"),
];

#[component]
fn GettingStarted() -> impl IntoView {
    view! {
        <div class="docs__section">
            <header>
                <h1 class="gradient-text">"Getting Started with Stompilot"</h1>
                <p class="docs__lead">"Your ultimate tool for testing STOMP messaging in real-time."</p>
            </header>
            <section>
                <h2>"Installation"</h2>
                <p>"Install Stompilot using your preferred package manager:"</p>
                <CodeBlock code=INSTALL_SNIPPET/>
            </section>
            <section>
                <h2>"Quick Start"</h2>
                <p>"Connect to your STOMP server with just a few lines of code:"</p>
                <CodeBlock code=QUICK_START_SNIPPET/>
            </section>
            <TipBox>
                "For the best experience, make sure your WebSocket server supports STOMP protocol version 1.2 or higher."
            </TipBox>
            <section>
                <h2>"Basic Example"</h2>
                <p>"Here's a complete example of sending and receiving messages:"</p>
                <CodeBlock code=BASIC_EXAMPLE_SNIPPET/>
            </section>
            <TipBox kind=TipKind::Warning>
                "Remember to handle connection errors and implement reconnection logic in production environments."
            </TipBox>
        </div>
    }
}

#[component]
fn FeaturesUsage() -> impl IntoView {
    view! {
        <div class="docs__section">
            <header>
                <h1 class="gradient-text">"Features & Usage"</h1>
            </header>
            <section>
                <h2>"Key Features"</h2>
                <div class="grid grid--2">
                    {KEY_FEATURES
                        .into_iter()
                        .map(|(title, description)| {
                            view! {
                                <div class="docs__feature">
                                    <h3>{title}</h3>
                                    <p>{description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <section>
                <h2>"Testing Messages"</h2>
                <div class="docs__test-panel">
                    <div class="docs__test-actions">
                        <button class="btn btn--success">"▶ Start Test"</button>
                        <button class="btn btn--danger">"■ Stop Test"</button>
                    </div>
                    <CodeBlock code=TEST_CASE_SNIPPET/>
                </div>
            </section>
        </div>
    }
}

#[component]
fn ComingSoon(section: DocsSection) -> impl IntoView {
    view! {
        <div class="docs__section">
            <header>
                <h1 class="gradient-text">{section.title()}</h1>
            </header>
            <TipBox>"This section is being written. Check back soon."</TipBox>
        </div>
    }
}

#[component]
pub fn DocsPage() -> impl IntoView {
    let active = RwSignal::new(DocsSection::default());

    view! {
        <div class="page docs">
            <nav class="docs__sidebar">
                {DocsSection::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <button
                                class="docs__nav-item"
                                class:docs__nav-item--active=move || active.get() == section
                                on:click=move |_| active.set(section)
                            >
                                <span class="docs__nav-icon">{section.icon()}</span>
                                <span class="docs__nav-title">{section.title()}</span>
                                <span class="docs__nav-badge">{section.badge()}</span>
                                <span class="docs__nav-chevron">"›"</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <article class="docs__content">
                {move || match active.get() {
                    DocsSection::GettingStarted => view! { <GettingStarted/> }.into_any(),
                    DocsSection::Features => view! { <FeaturesUsage/> }.into_any(),
                    section @ (DocsSection::Api | DocsSection::Configuration) => {
                        view! { <ComingSoon section=section/> }.into_any()
                    }
                }}
            </article>
        </div>
    }
}
