use super::draw::{copy_with_notice, reveal_with_output};
use crate::render;
use anyhow::Result;
use dialoguer::Select;
use lotto_core::{history, stats, LottoConfig};
use lotto_draw::{create_controller, CountdownTicker, DrawError, ThreadRandom, ViewState};

enum Action {
    Generate,
    Copy,
    ToggleStatistics,
    Quit,
}

async fn prompt(show_statistics: bool) -> Result<Action> {
    let stats_item = if show_statistics {
        "Hide statistics"
    } else {
        "Show statistics"
    };
    let items = vec!["Generate numbers", "Copy result", stats_item, "Quit"];

    let choice = tokio::task::spawn_blocking(move || {
        Select::new()
            .with_prompt("What next?")
            .items(&items)
            .default(0)
            .interact()
    })
    .await??;

    Ok(match choice {
        0 => Action::Generate,
        1 => Action::Copy,
        2 => Action::ToggleStatistics,
        _ => Action::Quit,
    })
}

fn render_view(view: &ViewState) {
    println!();
    if let Some(countdown) = &view.countdown {
        println!("Next draw in {}", countdown);
    }

    if !view.revealed.is_empty() {
        println!("{}", render::balls_table(&view.revealed, None));
    }

    if view.show_statistics {
        println!("{}", render::frequency_table(&stats::most_frequent(10)));
    }

    if let Some(notification) = &view.notification {
        println!("{}", notification);
    }
}

pub async fn run_interactive(config: &LottoConfig) -> Result<()> {
    let mut controller = create_controller(config, ThreadRandom);
    let ticker = CountdownTicker::spawn(config.schedule()?);
    controller.attach_countdown(&ticker);

    let latest = history::latest();
    println!("Round {} result ({})", latest.round, latest.date);
    println!(
        "{}",
        render::balls_table(latest.numbers.numbers(), Some(latest.bonus))
    );

    loop {
        let view = controller.view();
        render_view(&view);
        controller.clear_notification();

        match prompt(view.show_statistics).await? {
            Action::Generate => {
                if !reveal_with_output(&mut controller).await? {
                    println!("Draw cancelled.");
                }
            }
            Action::Copy => match copy_with_notice(&mut controller) {
                Ok(()) => {}
                Err(e) if matches!(e.downcast_ref::<DrawError>(), Some(DrawError::NothingToCopy)) => {
                    println!("Nothing to copy yet. Generate numbers first.");
                }
                Err(e) => return Err(e),
            },
            Action::ToggleStatistics => {
                controller.toggle_statistics();
            }
            Action::Quit => break,
        }
    }

    ticker.stop();
    Ok(())
}
