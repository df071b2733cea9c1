use crate::history::{recent_rounds, HistoryEntry};
use crate::prize::PrizeRank;
use crate::types::{MAX_NUMBER, MIN_NUMBER};
use serde::Serialize;
use std::collections::BTreeMap;

/// How often each number 1..=45 appeared in the history fixture.
///
/// Numbers that never appeared are present with a count of zero.
pub fn number_frequency() -> BTreeMap<u8, u32> {
    frequency_of(recent_rounds())
}

pub fn frequency_of(entries: &[HistoryEntry]) -> BTreeMap<u8, u32> {
    let mut frequency: BTreeMap<u8, u32> = (MIN_NUMBER..=MAX_NUMBER).map(|n| (n, 0)).collect();

    for entry in entries {
        for n in entry.numbers.iter() {
            *frequency.entry(n).or_insert(0) += 1;
        }
    }

    frequency
}

/// Top `n` numbers by count; ties go to the lower number.
pub fn most_frequent(n: usize) -> Vec<(u8, u32)> {
    let mut counts: Vec<(u8, u32)> = number_frequency().into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    counts.truncate(n);
    counts
}

/// Outcome of checking a pick against one historical round
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    pub round: u32,
    pub date: &'static str,
    pub matched: usize,
    pub matched_numbers: Vec<u8>,
    pub has_bonus: bool,
    pub prize: PrizeRank,
}

/// Check `numbers` against every round in the history, newest first.
pub fn analyze(numbers: &[u8]) -> Vec<MatchReport> {
    recent_rounds()
        .iter()
        .map(|winning| {
            let matched_numbers: Vec<u8> = numbers
                .iter()
                .copied()
                .filter(|&n| winning.numbers.contains(n))
                .collect();
            let has_bonus = numbers.contains(&winning.bonus);

            MatchReport {
                round: winning.round,
                date: winning.date,
                matched: matched_numbers.len(),
                prize: PrizeRank::from_matches(matched_numbers.len(), has_bonus),
                matched_numbers,
                has_bonus,
            }
        })
        .collect()
}
