//! Clipboard access for copy buttons.

/// Write `text` to the system clipboard.
///
/// Returns `false` when no browser window is available. The write itself is
/// asynchronous and its outcome is not observed.
pub fn copy_text(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let _ = window.navigator().clipboard().write_text(text);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}
