use crate::clipboard::Osc52Clipboard;
use crate::render;
use anyhow::Result;
use clap::Args;
use lotto_core::LottoConfig;
use lotto_draw::{
    create_controller, Controller, DrawError, RandomSource, RevealEvent, SeededRandom,
    ThreadRandom,
};
use tokio::sync::broadcast::error::RecvError;

#[derive(Args, Debug, Clone, Default)]
pub struct DrawArgs {
    /// Copy the numbers to the terminal clipboard when done
    #[arg(long)]
    pub copy: bool,

    /// "Generating" delay before the draw, in milliseconds
    #[arg(long)]
    pub preroll_ms: Option<u64>,

    /// Delay between reveals, in milliseconds
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Seed for a reproducible draw
    #[arg(long)]
    pub seed: Option<u64>,
}

impl DrawArgs {
    /// Flags take precedence over the config file.
    fn apply(&self, config: &LottoConfig) -> Result<LottoConfig> {
        let mut config = config.clone();
        if let Some(ms) = self.preroll_ms {
            config.preroll_ms = ms;
        }
        if let Some(ms) = self.interval_ms {
            config.reveal_interval_ms = ms;
        }
        config.validate()?;
        Ok(config)
    }
}

pub fn random_source(seed: Option<u64>) -> Box<dyn RandomSource + Send> {
    match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    }
}

pub async fn run_draw(config: &LottoConfig, args: DrawArgs) -> Result<()> {
    let config = args.apply(config)?;
    let mut controller = create_controller(&config, random_source(args.seed));

    if !reveal_with_output(&mut controller).await? {
        println!("Draw cancelled.");
        return Ok(());
    }

    if args.copy {
        copy_with_notice(&mut controller)?;
    }

    Ok(())
}

/// Start a draw and print each number as it is revealed.
///
/// Returns `false` if the draw was interrupted with Ctrl+C.
pub async fn reveal_with_output(controller: &mut Controller) -> Result<bool> {
    let mut events = controller.sequencer().subscribe();
    let draw_id = controller.trigger_generation()?;

    if !controller.sequencer().config().preroll.is_zero() {
        println!("Generating numbers...");
    }

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                controller.sequencer().cancel();
                println!();
                return Ok(false);
            }
            event = events.recv() => match event {
                Ok(RevealEvent::Revealed { draw_id: id, index, number }) if id == draw_id => {
                    println!("  #{} {}", index + 1, render::ball_label(number));
                }
                Ok(RevealEvent::Completed { draw_id: id, result }) if id == draw_id => {
                    println!("{}", render::balls_table(result.numbers(), None));
                    return Ok(true);
                }
                Ok(RevealEvent::Cancelled { draw_id: id }) if id == draw_id => {
                    return Ok(false);
                }
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("Missed {} reveal events", skipped);
                }
                Err(RecvError::Closed) => return Ok(false),
            }
        }
    }
}

/// Copy the finished draw and print the resulting notification.
///
/// A clipboard write failure is reported, not returned.
pub fn copy_with_notice(controller: &mut Controller) -> Result<()> {
    match controller.copy_result(&Osc52Clipboard::stdout()) {
        Ok(text) => println!("{}", text),
        Err(DrawError::Clipboard(_)) => {}
        Err(e) => return Err(e.into()),
    }

    if let Some(notification) = controller.view().notification {
        println!("{}", notification);
    }
    controller.clear_notification();
    Ok(())
}
