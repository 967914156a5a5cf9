//! Quiet-window debouncing for search input.

use std::time::Duration;

use tokio::sync::mpsc::{self, error::SendError, UnboundedReceiver, UnboundedSender};

/// Quiet window applied to search keystrokes.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Sending half: every keystroke's current value goes here.
#[derive(Debug, Clone)]
pub struct DebouncerInput<T> {
    tx: UnboundedSender<T>,
}

impl<T> DebouncerInput<T> {
    pub fn push(&self, value: T) -> Result<(), SendError<T>> {
        self.tx.send(value)
    }
}

/// Receiving half: yields the last value of each burst once the input has
/// been quiet for the window.
#[derive(Debug)]
pub struct Debouncer<T> {
    rx: UnboundedReceiver<T>,
    window: Duration,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn channel(window: Duration) -> (DebouncerInput<T>, Debouncer<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            DebouncerInput { tx },
            Debouncer {
                rx,
                window,
                pending: None,
            },
        )
    }

    /// Wait for the next settled value.
    ///
    /// Every new value restarts the window. When all inputs are dropped the
    /// pending value is flushed immediately; afterwards `None` is returned.
    ///
    /// Cancel safe: a value received before the future is dropped is kept
    /// for the next call, which starts a fresh window.
    pub async fn next(&mut self) -> Option<T> {
        if self.pending.is_none() {
            self.pending = Some(self.rx.recv().await?);
        }
        loop {
            tokio::select! {
                value = self.rx.recv() => match value {
                    Some(value) => self.pending = Some(value),
                    None => return self.pending.take(),
                },
                _ = tokio::time::sleep(self.window) => return self.pending.take(),
            }
        }
    }
}
