use serde::{Deserialize, Serialize};
use std::fmt;

/// Prize rank for a pick against one winning draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PrizeRank {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    NoPrize,
}

impl PrizeRank {
    /// Second prize needs five main numbers plus the bonus ball.
    pub fn from_matches(matched: usize, has_bonus: bool) -> Self {
        match matched {
            6 => PrizeRank::First,
            5 if has_bonus => PrizeRank::Second,
            5 => PrizeRank::Third,
            4 => PrizeRank::Fourth,
            3 => PrizeRank::Fifth,
            _ => PrizeRank::NoPrize,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PrizeRank::First => "1등",
            PrizeRank::Second => "2등",
            PrizeRank::Third => "3등",
            PrizeRank::Fourth => "4등",
            PrizeRank::Fifth => "5등",
            PrizeRank::NoPrize => "낙첨",
        }
    }

    pub fn condition(&self) -> &'static str {
        match self {
            PrizeRank::First => "6 numbers",
            PrizeRank::Second => "5 numbers + bonus",
            PrizeRank::Third => "5 numbers",
            PrizeRank::Fourth => "4 numbers",
            PrizeRank::Fifth => "3 numbers",
            PrizeRank::NoPrize => "fewer than 3",
        }
    }

    pub fn is_winning(&self) -> bool {
        !matches!(self, PrizeRank::NoPrize)
    }
}

impl fmt::Display for PrizeRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
