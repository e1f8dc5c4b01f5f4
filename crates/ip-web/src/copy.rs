//! Clipboard copy with a self-reverting "copied" indicator.
//!
//! `CopyState` holds the flag and guards re-entry. `RevertTimer` holds the one
//! pending revert: arming drops (and so cancels) the previous timer, clearing
//! drops the current one. Only the `RevertTicket` from the latest successful
//! copy can lower the flag.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard API is not available")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

#[cfg(feature = "csr")]
impl ClipboardError {
    /// Build from a promise rejection. Only `Error` objects contribute a message.
    fn from_thrown(value: &wasm_bindgen::JsValue) -> Self {
        use wasm_bindgen::JsCast;

        let detail = value
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| value.as_string())
            .unwrap_or_else(|| "unknown".to_string());
        ClipboardError::Rejected(detail)
    }
}

/// Identifies the copy a revert timer was armed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevertTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyState {
    just_copied: bool,
    writing: bool,
    generation: u64,
}

impl CopyState {
    pub fn just_copied(&self) -> bool {
        self.just_copied
    }

    /// Start a copy of `ip`. Returns the text to write, or `None` when there is
    /// nothing to copy, a copy was just confirmed, or a write is still pending.
    pub fn begin(&mut self, ip: Option<&str>) -> Option<String> {
        let ip = ip?;
        if self.just_copied || self.writing {
            return None;
        }
        self.writing = true;
        Some(ip.to_string())
    }

    /// Record the clipboard outcome. On success the flag goes up and the
    /// caller must arm a revert timer with the returned ticket.
    pub fn finish(&mut self, outcome: Result<(), ClipboardError>) -> Option<RevertTicket> {
        self.writing = false;
        match outcome {
            Ok(()) => {
                self.just_copied = true;
                self.generation += 1;
                Some(RevertTicket(self.generation))
            }
            Err(_) => None,
        }
    }

    /// Clear the flag if `ticket` belongs to the latest copy. Returns whether
    /// anything changed.
    pub fn revert(&mut self, ticket: RevertTicket) -> bool {
        if ticket.0 != self.generation || !self.just_copied {
            return false;
        }
        self.just_copied = false;
        true
    }
}

/// Runs a callback once after a delay. Dropping the handle cancels it.
pub trait Schedule {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: impl FnOnce() + 'static) -> Self::Handle;
}

/// Browser timers via `setTimeout`
#[cfg(feature = "csr")]
pub struct BrowserTimers;

#[cfg(feature = "csr")]
impl Schedule for BrowserTimers {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay_ms: u32, callback: impl FnOnce() + 'static) -> Self::Handle {
        gloo_timers::callback::Timeout::new(delay_ms, callback)
    }
}

/// Holder for the single pending revert
pub struct RevertTimer<H> {
    pending: Option<H>,
}

impl<H> Default for RevertTimer<H> {
    fn default() -> Self {
        RevertTimer { pending: None }
    }
}

impl<H> RevertTimer<H> {
    /// Schedule `callback`, replacing whatever was pending
    pub fn arm<S>(&mut self, scheduler: &S, delay_ms: u32, callback: impl FnOnce() + 'static)
    where
        S: Schedule<Handle = H>,
    {
        // Drop the old handle before scheduling so two are never live
        self.pending = None;
        self.pending = Some(scheduler.schedule(delay_ms, callback));
    }

    /// Cancel the pending revert, if any
    pub fn clear(&mut self) {
        self.pending = None;
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

/// Write `text` to the system clipboard
#[cfg(feature = "csr")]
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
    let clipboard = window.navigator().clipboard();
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| ClipboardError::from_thrown(&e))
}

#[cfg(not(feature = "csr"))]
pub async fn write_text(_text: &str) -> Result<(), ClipboardError> {
    Err(ClipboardError::Unavailable)
}
