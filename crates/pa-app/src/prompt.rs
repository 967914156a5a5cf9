//! Reusable yes/no confirmation prompt.
//!
//! The prompt owns no state of its own: its owner supplies the message, the
//! visibility flag and the channel the two outbound signals go to.

use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptSignal {
    Confirm,
    Cancel,
}

#[derive(Debug, Clone)]
pub struct ConfirmationPrompt {
    message: String,
    visible: bool,
    signals: UnboundedSender<PromptSignal>,
}

impl ConfirmationPrompt {
    pub const DEFAULT_MESSAGE: &'static str = "Are you sure?";

    /// Hidden prompt with the default message.
    pub fn new(signals: UnboundedSender<PromptSignal>) -> Self {
        Self {
            message: Self::DEFAULT_MESSAGE.to_string(),
            visible: false,
            signals,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn confirm(&self) {
        self.emit(PromptSignal::Confirm);
    }

    pub fn cancel(&self) {
        self.emit(PromptSignal::Cancel);
    }

    fn emit(&self, signal: PromptSignal) {
        if self.signals.send(signal).is_err() {
            debug!(?signal, "Prompt owner is gone, dropping signal");
        }
    }
}
