//! lotto-pick core library
//!
//! Domain types shared by the draw generator and the CLI: validated draws,
//! the recent-rounds fixture, prize ranks, number statistics, countdown
//! arithmetic and display formatting.

pub mod config;
pub mod countdown;
pub mod error;
pub mod format;
pub mod history;
pub mod prize;
pub mod stats;
pub mod types;

pub use config::LottoConfig;
pub use countdown::DrawSchedule;
pub use error::{LottoError, Result};
pub use history::{HistoryEntry, RankPayout, WinnerSummary};
pub use prize::PrizeRank;
pub use stats::MatchReport;
pub use types::{BallColor, DrawResult, DRAW_SIZE, MAX_NUMBER, MIN_NUMBER};
