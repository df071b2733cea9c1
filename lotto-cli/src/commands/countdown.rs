use anyhow::Result;
use chrono::Utc;
use lotto_core::LottoConfig;
use lotto_draw::CountdownTicker;
use std::io::Write;

pub async fn show_countdown(config: &LottoConfig, watch: bool) -> Result<()> {
    let schedule = config.schedule()?;
    let now = Utc::now();
    let next = schedule.next_draw_after(now);

    println!("Next draw: {}", next.format("%Y-%m-%d %H:%M (UTC%:z)"));

    if !watch {
        println!("Remaining: {}", schedule.countdown_text(now));
        return Ok(());
    }

    let ticker = CountdownTicker::spawn(schedule);
    let mut text = ticker.subscribe();
    let mut stdout = std::io::stdout();

    loop {
        write!(stdout, "\rRemaining: {}   ", text.borrow_and_update().as_str())?;
        stdout.flush()?;

        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = text.changed() => {
                if changed.is_err() {
                    break;
                }
            }
        }
    }

    println!();
    ticker.stop();
    Ok(())
}
