use chrono::{DateTime, Utc};
use lotto_core::DrawSchedule;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

const TICK: Duration = Duration::from_secs(1);

/// Recomputes the countdown text once per second for as long as it lives.
///
/// The task is aborted by [`CountdownTicker::stop`] or on drop.
#[derive(Debug)]
pub struct CountdownTicker {
    handle: JoinHandle<()>,
    text: watch::Receiver<String>,
}

impl CountdownTicker {
    pub fn spawn(schedule: DrawSchedule) -> Self {
        Self::spawn_with_clock(schedule, Utc::now)
    }

    pub fn spawn_with_clock<C>(schedule: DrawSchedule, clock: C) -> Self
    where
        C: Fn() -> DateTime<Utc> + Send + 'static,
    {
        let (tx, text) = watch::channel(schedule.countdown_text(clock()));

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK);
            loop {
                interval.tick().await;
                if tx.send(schedule.countdown_text(clock())).is_err() {
                    tracing::debug!("Countdown has no listeners, stopping");
                    break;
                }
            }
        });

        Self { handle, text }
    }

    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    /// A receiver that observes every refresh.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.text.clone()
    }

    pub fn stop(&self) {
        self.handle.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_every_second() {
        // Saturday 2024-02-03 20:44:57 KST
        let start = Utc.with_ymd_and_hms(2024, 2, 3, 11, 44, 57).unwrap();
        let elapsed = Arc::new(AtomicI64::new(0));
        let clock_elapsed = elapsed.clone();
        let ticker = CountdownTicker::spawn_with_clock(DrawSchedule::default(), move || {
            start + chrono::Duration::seconds(clock_elapsed.load(Ordering::SeqCst))
        });
        assert_eq!(ticker.text(), "00:00:03");

        let mut rx = ticker.subscribe();
        elapsed.store(2, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(1_500)).await;
        rx.changed().await.unwrap();
        assert_eq!(ticker.text(), "00:00:01");

        // rolls over to next week at draw time
        elapsed.store(3, Ordering::SeqCst);
        rx.changed().await.unwrap();
        assert_eq!(ticker.text(), "7d 00:00:00");
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_aborts_task() {
        let ticker = CountdownTicker::spawn(DrawSchedule::default());
        assert!(ticker.is_running());

        ticker.stop();
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(!ticker.is_running());
    }
}
