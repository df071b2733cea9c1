//! Draw generation and staged reveal for lotto-pick
//!
//! Six distinct numbers are drawn by rejection sampling, then revealed one at
//! a time on a fixed cadence. A new draw cancels any reveal still pending.

pub mod controller;
pub mod countdown;
pub mod error;
pub mod generator;
pub mod reveal;

pub use controller::{Clipboard, Controller, ViewState};
pub use countdown::CountdownTicker;
pub use error::{DrawError, Result};
pub use generator::{generate, RandomSource, SeededRandom, ThreadRandom};
pub use reveal::{RevealConfig, RevealEvent, RevealPhase, RevealSequencer, RevealState};

use lotto_core::LottoConfig;

/// Controller wired from config, drawing from `source`
pub fn create_controller(
    config: &LottoConfig,
    source: impl RandomSource + Send + 'static,
) -> Controller {
    let sequencer = RevealSequencer::new(RevealConfig::from(config), source);
    Controller::new(sequencer, config.clipboard_label.clone())
}
