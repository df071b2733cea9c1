use crate::countdown::CountdownTicker;
use crate::error::{DrawError, Result};
use crate::reveal::{RevealPhase, RevealSequencer};
use lotto_core::format::clipboard_text;
use serde::Serialize;
use tokio::sync::watch;
use uuid::Uuid;

pub const COPY_OK: &str = "Copied to clipboard";
pub const COPY_FAILED: &str = "Failed to copy";

/// Somewhere the formatted result can be written for the user to paste
pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub draw_id: Option<Uuid>,
    pub phase: RevealPhase,
    pub generating: bool,
    pub revealed: Vec<u8>,
    pub show_statistics: bool,
    pub countdown: Option<String>,
    pub notification: Option<String>,
}

/// Owns the view state; all changes go through its actions.
#[derive(Debug)]
pub struct Controller {
    sequencer: RevealSequencer,
    clipboard_label: String,
    show_statistics: bool,
    notification: Option<String>,
    countdown: Option<watch::Receiver<String>>,
}

impl Controller {
    pub fn new(sequencer: RevealSequencer, clipboard_label: impl Into<String>) -> Self {
        Self {
            sequencer,
            clipboard_label: clipboard_label.into(),
            show_statistics: false,
            notification: None,
            countdown: None,
        }
    }

    pub fn sequencer(&self) -> &RevealSequencer {
        &self.sequencer
    }

    pub fn attach_countdown(&mut self, ticker: &CountdownTicker) {
        self.countdown = Some(ticker.subscribe());
    }

    /// Start a draw unless one is already running.
    pub fn trigger_generation(&mut self) -> Result<Uuid> {
        if self.sequencer.is_generating() {
            return Err(DrawError::Busy);
        }
        self.notification = None;
        Ok(self.sequencer.start())
    }

    /// Write the finished draw to `clipboard`.
    ///
    /// A clipboard failure only sets the notification; the draw is untouched.
    pub fn copy_result(&mut self, clipboard: &dyn Clipboard) -> Result<String> {
        let state = self.sequencer.snapshot();
        let draw = match (state.generating, state.result) {
            (false, Some(draw)) => draw,
            _ => return Err(DrawError::NothingToCopy),
        };

        let text = clipboard_text(&self.clipboard_label, &draw);
        match clipboard.write_text(&text) {
            Ok(()) => {
                self.notification = Some(COPY_OK.to_string());
                Ok(text)
            }
            Err(e) => {
                tracing::warn!("Clipboard write failed: {}", e);
                self.notification = Some(COPY_FAILED.to_string());
                Err(e)
            }
        }
    }

    pub fn toggle_statistics(&mut self) -> bool {
        self.show_statistics = !self.show_statistics;
        self.show_statistics
    }

    pub fn clear_notification(&mut self) {
        self.notification = None;
    }

    pub fn view(&self) -> ViewState {
        let state = self.sequencer.snapshot();
        ViewState {
            draw_id: state.draw_id,
            phase: state.phase,
            generating: state.generating,
            revealed: state.revealed,
            show_statistics: self.show_statistics,
            countdown: self.countdown.as_ref().map(|rx| rx.borrow().clone()),
            notification: self.notification.clone(),
        }
    }
}
