//! Text formatting for numbers, clipboard payloads and prize amounts.

use crate::types::DrawResult;

pub const DEFAULT_CLIPBOARD_LABEL: &str = "Lotto numbers";

/// `[3, 9, 27]` -> `"3, 9, 27"`
pub fn numbers_text(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Text placed on the clipboard for a finished draw.
///
/// An empty label yields the bare number list.
pub fn clipboard_text(label: &str, draw: &DrawResult) -> String {
    let numbers = numbers_text(draw.numbers());
    if label.is_empty() {
        numbers
    } else {
        format!("{}: {}", label, numbers)
    }
}

/// Thousands-separated amount with the won suffix, e.g. `2,364,851,750원`.
pub fn won(amount: u64) -> String {
    format!("{}원", thousands(amount))
}

pub fn thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
