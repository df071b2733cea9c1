use crate::error::{LottoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest number that can be drawn.
pub const MIN_NUMBER: u8 = 1;
/// Largest number that can be drawn.
pub const MAX_NUMBER: u8 = 45;
/// Numbers in one draw, bonus excluded.
pub const DRAW_SIZE: usize = 6;

/// Six distinct numbers in `1..=45`, kept in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct DrawResult([u8; DRAW_SIZE]);

impl DrawResult {
    /// Validate and sort arbitrary input into a draw.
    pub fn new(numbers: &[u8]) -> Result<Self> {
        if numbers.len() != DRAW_SIZE {
            return Err(LottoError::InvalidLength {
                expected: DRAW_SIZE,
                actual: numbers.len(),
            });
        }

        let mut sorted = [0u8; DRAW_SIZE];
        sorted.copy_from_slice(numbers);
        sorted.sort_unstable();

        for (i, &n) in sorted.iter().enumerate() {
            if !is_valid_number(n) {
                return Err(LottoError::NumberOutOfRange(n));
            }
            if i > 0 && sorted[i - 1] == n {
                return Err(LottoError::DuplicateNumber(n));
            }
        }

        Ok(Self(sorted))
    }

    /// For compile-time fixtures whose numbers are already sorted and valid.
    pub(crate) const fn from_sorted(numbers: [u8; DRAW_SIZE]) -> Self {
        Self(numbers)
    }

    pub fn numbers(&self) -> &[u8; DRAW_SIZE] {
        &self.0
    }

    pub fn contains(&self, number: u8) -> bool {
        self.0.binary_search(&number).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }
}

impl TryFrom<Vec<u8>> for DrawResult {
    type Error = LottoError;

    fn try_from(value: Vec<u8>) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<DrawResult> for Vec<u8> {
    fn from(value: DrawResult) -> Self {
        value.0.to_vec()
    }
}

impl fmt::Display for DrawResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::numbers_text(&self.0))
    }
}

pub fn is_valid_number(n: u8) -> bool {
    (MIN_NUMBER..=MAX_NUMBER).contains(&n)
}

/// Ball color band, by tens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallColor {
    Yellow,
    Blue,
    Red,
    Gray,
    Green,
}

impl BallColor {
    pub fn for_number(number: u8) -> Self {
        match number {
            0..=10 => BallColor::Yellow,
            11..=20 => BallColor::Blue,
            21..=30 => BallColor::Red,
            31..=40 => BallColor::Gray,
            _ => BallColor::Green,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BallColor::Yellow => "yellow",
            BallColor::Blue => "blue",
            BallColor::Red => "red",
            BallColor::Gray => "gray",
            BallColor::Green => "green",
        }
    }
}
