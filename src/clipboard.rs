//! Best-effort clipboard copy.
//!
//! Copying is a convenience, not a contract: failure (headless session,
//! missing display server) is logged and swallowed so it never interrupts
//! the user.

/// Copy `text` to the system clipboard. Returns whether the copy took.
pub fn copy_text(text: &str) -> bool {
    match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text.to_string())) {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(error = %err, "clipboard copy failed");
            false
        }
    }
}
