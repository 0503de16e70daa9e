//! Best-effort desktop actions: clipboard copy and opening URLs.
//!
//! Failures are returned so the caller can log them and tell the user; they
//! never affect the history.

use tracing::{debug, warn};

use crate::error::AppError;

/// Copies `text` to the system clipboard.
///
/// # Errors
///
/// Returns [`AppError::Clipboard`] if no clipboard is available (e.g. a
/// headless session) or the write is rejected.
pub fn copy_to_clipboard(text: &str) -> Result<(), AppError> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| {
        warn!(error = %e, "Clipboard unavailable");
        AppError::Clipboard(e.to_string())
    })?;

    set_text(&mut clipboard, text).map_err(|e| {
        warn!(error = %e, "Failed to copy");
        AppError::Clipboard(e.to_string())
    })?;

    debug!(len = text.len(), "Copied to clipboard");
    Ok(())
}

/// On X11 and Wayland the selection is served by the process that set it, so
/// this blocks until another owner (normally the clipboard manager) takes
/// over. Otherwise the text would vanish when the CLI exits.
#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
fn set_text(clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    debug!("Waiting for clipboard ownership to pass on");
    clipboard.set().wait().text(text)
}

#[cfg(not(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
)))]
fn set_text(clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

/// Opens `url` with the system's default handler.
///
/// # Errors
///
/// Returns [`AppError::Open`] if no handler could be launched.
pub fn open_url(url: &str) -> Result<(), AppError> {
    open::that(url).map_err(|e| {
        warn!(url, error = %e, "Failed to open URL");
        AppError::Open(e.to_string())
    })?;

    debug!(url, "Opened URL");
    Ok(())
}
