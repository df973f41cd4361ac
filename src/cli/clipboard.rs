// src/cli/clipboard.rs
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use thiserror::Error;
use zeroize::Zeroizing;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Failed to access clipboard: {0}")]
    Access(String),

    #[error("Failed to copy to clipboard: {0}")]
    Write(String),

    #[error("Failed to restore clipboard: {0}")]
    Restore(String),
}

/// Result of a copy attempt. Never retried; each outcome maps to a short
/// status line for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed(String),
}

impl CopyOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            CopyOutcome::Copied => "✅ Copied ✓",
            CopyOutcome::Failed(_) => "❌ Copy failed",
        }
    }

    pub fn is_copied(&self) -> bool {
        matches!(self, CopyOutcome::Copied)
    }
}

impl From<Result<(), ClipboardError>> for CopyOutcome {
    fn from(result: Result<(), ClipboardError>) -> Self {
        match result {
            Ok(()) => CopyOutcome::Copied,
            Err(e) => {
                log::warn!("{}", e);
                CopyOutcome::Failed(e.to_string())
            }
        }
    }
}

/// X11/Wayland only serve the selection while its owner is running, so a
/// process that is about to exit has to hold it until another program
/// takes over. Other platforms keep the contents after exit.
pub const HOLDS_UNTIL_REPLACED: bool = cfg!(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
));

/// A finished copy plus the worker that still owns the clipboard, if any.
///
/// The worker restores the previous contents after the clear timeout, or
/// holds the selection for exiting processes. Callers that are about to
/// exit must call [`CopyTicket::finish`].
pub struct CopyTicket {
    pub outcome: CopyOutcome,
    worker: Option<JoinHandle<()>>,
}

impl CopyTicket {
    pub fn new(outcome: CopyOutcome, worker: Option<JoinHandle<()>>) -> Self {
        CopyTicket { outcome, worker }
    }

    pub fn is_pending(&self) -> bool {
        self.worker.as_ref().map_or(false, |worker| !worker.is_finished())
    }

    /// Block until the worker is done with the clipboard.
    pub fn finish(self) -> CopyOutcome {
        if let Some(worker) = self.worker {
            if worker.join().is_err() {
                log::warn!("Clipboard worker panicked");
            }
        }
        self.outcome
    }
}

/// Copy text to the system clipboard on a worker thread that keeps the
/// clipboard open for as long as it is needed.
///
/// With `clear_after`, the previous contents are restored (or the clipboard
/// cleared) after the timeout. With `hold` and no timeout, the worker keeps
/// serving the text until another program replaces it. The copied value is
/// never logged.
pub fn copy_to_clipboard(text: &str, clear_after: Option<Duration>, hold: bool) -> CopyTicket {
    let text = Zeroizing::new(text.to_owned());
    let (tx, rx) = mpsc::channel();

    let worker = thread::spawn(move || {
        let mut clipboard = match arboard::Clipboard::new() {
            Ok(clipboard) => clipboard,
            Err(e) => {
                let _ = tx.send(Err(ClipboardError::Access(e.to_string())));
                return;
            }
        };

        // Unreadable contents just won't be restored
        let previous = clipboard.get_text().ok().map(Zeroizing::new);

        if let Err(e) = clipboard.set_text(text.as_str()) {
            let _ = tx.send(Err(ClipboardError::Write(e.to_string())));
            return;
        }
        log::debug!("Copied {} characters to clipboard", text.chars().count());
        let _ = tx.send(Ok(()));

        match clear_after {
            Some(duration) => {
                thread::sleep(duration);
                match restore(&mut clipboard, previous) {
                    Ok(()) => log::debug!("Clipboard restored after {:?}", duration),
                    Err(e) => log::warn!("{}", e),
                }
            }
            None if hold => {
                if let Err(e) = hold_until_replaced(&mut clipboard, &text) {
                    log::warn!("{}", e);
                }
            }
            None => {}
        }
    });

    let outcome: CopyOutcome = rx
        .recv()
        .unwrap_or_else(|_| Err(ClipboardError::Access("clipboard worker stopped".to_string())))
        .into();

    CopyTicket::new(outcome, Some(worker))
}

fn restore(
    clipboard: &mut arboard::Clipboard,
    previous: Option<Zeroizing<String>>,
) -> Result<(), ClipboardError> {
    let result = match previous {
        Some(prev) => clipboard.set_text(prev.as_str()),
        None => clipboard.clear(),
    };
    result.map_err(|e| ClipboardError::Restore(e.to_string()))
}

#[cfg(all(unix, not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))))]
fn hold_until_replaced(clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), ClipboardError> {
    use arboard::SetExtLinux;

    clipboard
        .set()
        .wait()
        .text(text)
        .map_err(|e| ClipboardError::Write(e.to_string()))
}

#[cfg(not(all(unix, not(any(target_os = "macos", target_os = "android", target_os = "emscripten")))))]
fn hold_until_replaced(_clipboard: &mut arboard::Clipboard, _text: &str) -> Result<(), ClipboardError> {
    Ok(())
}
