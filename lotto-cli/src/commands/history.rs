use crate::render;
use anyhow::Result;
use lotto_core::format::won;
use lotto_core::{history, stats, DrawResult, PrizeRank};

pub fn show_latest() -> Result<()> {
    let latest = history::latest();

    println!("Round {} result ({})", latest.round, latest.date);
    println!("{}", render::balls_table(latest.numbers.numbers(), Some(latest.bonus)));

    if let Some(table) = render::prize_table(latest) {
        println!("{}", table);
    }
    println!("Total prize: {}", won(latest.total_prize));

    Ok(())
}

pub fn show_stats(top: Option<usize>) -> Result<()> {
    let rounds = history::recent_rounds();
    let counts: Vec<(u8, u32)> = match top {
        Some(n) => stats::most_frequent(n),
        None => stats::number_frequency().into_iter().collect(),
    };

    if let (Some(newest), Some(oldest)) = (rounds.first(), rounds.last()) {
        println!(
            "Number frequency over rounds {}-{}",
            oldest.round, newest.round
        );
    }
    println!("{}", render::frequency_table(&counts));

    Ok(())
}

pub fn check_numbers(numbers: &[u8]) -> Result<()> {
    let pick = DrawResult::new(numbers)?;
    let reports = stats::analyze(pick.numbers());

    println!("Checking {}", pick);
    println!("{}", render::match_table(&reports));

    let best = reports
        .iter()
        .map(|r| r.prize)
        .min()
        .unwrap_or(PrizeRank::NoPrize);
    if best.is_winning() {
        println!("Best result: {} ({})", best, best.condition());
    } else {
        println!("No winning round in recent history");
    }

    Ok(())
}
