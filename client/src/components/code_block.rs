//! Preformatted code sample with a copy-to-clipboard button.

use leptos::prelude::*;

use crate::util::clipboard;

/// How long the copy button shows its confirmation mark.
pub const COPY_FEEDBACK_MS: u64 = 2000;

#[component]
pub fn CodeBlock(code: &'static str) -> impl IntoView {
    let copied = RwSignal::new(false);

    let on_copy = move |_| {
        if clipboard::copy_text(code) {
            copied.set(true);
            set_timeout(move || copied.set(false), std::time::Duration::from_millis(COPY_FEEDBACK_MS));
        }
    };

    view! {
        <div class="code-block">
            <pre class="code-block__pre">
                <code>{code}</code>
            </pre>
            <button class="code-block__copy" on:click=on_copy title="Copy">
                {move || if copied.get() { "✔" } else { "⧉" }}
            </button>
        </div>
    }
}
