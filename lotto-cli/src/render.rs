use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use lotto_core::format::won;
use lotto_core::{BallColor, HistoryEntry, MatchReport};

fn table_color(color: BallColor) -> Color {
    match color {
        BallColor::Yellow => Color::Yellow,
        BallColor::Blue => Color::Blue,
        BallColor::Red => Color::Red,
        BallColor::Gray => Color::Grey,
        BallColor::Green => Color::Green,
    }
}

fn ball_cell(number: u8) -> Cell {
    Cell::new(number).fg(table_color(BallColor::for_number(number)))
}

/// `3 (yellow)`
pub fn ball_label(number: u8) -> String {
    format!("{} ({})", number, BallColor::for_number(number).name())
}

/// One row of colored balls, with the bonus after a `+`.
pub fn balls_table(numbers: &[u8], bonus: Option<u8>) -> Table {
    let mut row: Vec<Cell> = numbers.iter().map(|&n| ball_cell(n)).collect();
    if let Some(bonus) = bonus {
        row.push(Cell::new("+"));
        row.push(ball_cell(bonus));
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.add_row(row);
    table
}

pub fn prize_table(entry: &HistoryEntry) -> Option<Table> {
    let winners = entry.winners?;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Rank", "Condition", "Winners", "Prize per winner"]);
    for (rank, payout) in [
        (lotto_core::PrizeRank::First, winners.first),
        (lotto_core::PrizeRank::Second, winners.second),
        (lotto_core::PrizeRank::Third, winners.third),
    ] {
        table.add_row(vec![
            rank.label().to_string(),
            rank.condition().to_string(),
            lotto_core::format::thousands(payout.winners as u64),
            won(payout.prize_per_winner),
        ]);
    }
    Some(table)
}

pub fn frequency_table(counts: &[(u8, u32)]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Number", "Count", ""]);
    for &(number, count) in counts {
        table.add_row(vec![
            ball_cell(number),
            Cell::new(count),
            Cell::new("■".repeat(count as usize)),
        ]);
    }
    table
}

pub fn match_table(reports: &[MatchReport]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Round", "Date", "Matched", "Numbers", "Bonus", "Result"]);
    for report in reports {
        table.add_row(vec![
            report.round.to_string(),
            report.date.to_string(),
            report.matched.to_string(),
            lotto_core::format::numbers_text(&report.matched_numbers),
            if report.has_bonus { "yes" } else { "no" }.to_string(),
            report.prize.label().to_string(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_label() {
        assert_eq!(ball_label(3), "3 (yellow)");
        assert_eq!(ball_label(45), "45 (green)");
    }

    #[test]
    fn test_prize_table_only_for_latest() {
        let latest = lotto_core::history::latest();
        let rendered = prize_table(latest).unwrap().to_string();
        assert!(rendered.contains("2,364,851,750원"));
        assert!(rendered.contains("2,142"));

        let older = lotto_core::history::find_round(1101).unwrap();
        assert!(prize_table(older).is_none());
    }
}
