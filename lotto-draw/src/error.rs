use lotto_core::LottoError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DrawError>;

#[derive(Error, Debug)]
pub enum DrawError {
    #[error("Lotto core error: {0}")]
    Core(#[from] LottoError),

    #[error("A draw is already in progress")]
    Busy,

    #[error("No complete draw to copy")]
    NothingToCopy,

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DrawError {
    pub fn clipboard(msg: impl Into<String>) -> Self {
        Self::Clipboard(msg.into())
    }
}
