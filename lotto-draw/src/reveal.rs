//! Staged reveal of a draw.
//!
//! Each of the six reveals is its own scheduled task at
//! `preroll + index * interval`. Starting a new sequence aborts every pending
//! task of the old one and bumps the epoch, so at most one sequence is ever
//! active; a task that already woke for an old epoch finds the epoch changed
//! under the lock and does nothing.

use crate::generator::{generate, RandomSource};
use lotto_core::{DrawResult, LottoConfig, DRAW_SIZE};
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use uuid::Uuid;

const EVENT_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealConfig {
    pub interval: Duration,
    pub preroll: Duration,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(500),
            preroll: Duration::ZERO,
        }
    }
}

impl From<&LottoConfig> for RevealConfig {
    fn from(config: &LottoConfig) -> Self {
        Self {
            interval: config.reveal_interval(),
            preroll: config.preroll(),
        }
    }
}

/// Idle -> Generating -> Revealing(1..=6) -> Idle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum RevealPhase {
    #[default]
    Idle,
    Generating,
    /// Count of numbers shown so far
    Revealing(usize),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RevealState {
    pub draw_id: Option<Uuid>,
    pub phase: RevealPhase,
    pub generating: bool,
    pub revealed: Vec<u8>,
    /// Set once all six numbers are shown
    pub result: Option<DrawResult>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealEvent {
    Started {
        draw_id: Uuid,
    },
    Revealed {
        draw_id: Uuid,
        index: usize,
        number: u8,
    },
    Completed {
        draw_id: Uuid,
        result: DrawResult,
    },
    Cancelled {
        draw_id: Uuid,
    },
}

struct Sequence {
    epoch: u64,
    draw: Option<DrawResult>,
    state: RevealState,
    tasks: Vec<JoinHandle<()>>,
    source: Box<dyn RandomSource + Send>,
}

impl Sequence {
    fn abort_pending(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

struct Inner {
    config: RevealConfig,
    seq: Mutex<Sequence>,
    events: broadcast::Sender<RevealEvent>,
    state_tx: watch::Sender<RevealState>,
}

impl Inner {
    fn emit(&self, event: RevealEvent) {
        // no subscribers is fine
        let _ = self.events.send(event);
    }

    fn publish(&self, state: &RevealState) {
        self.state_tx.send_replace(state.clone());
    }

    /// Compute the draw and schedule its six reveals from `base`.
    fn schedule_reveals(self: &Arc<Self>, seq: &mut Sequence, epoch: u64, base: Instant) {
        let draw = generate(seq.source.as_mut());
        seq.draw = Some(draw);

        for index in 0..DRAW_SIZE {
            let deadline = base + self.config.interval * index as u32;
            let inner = Arc::clone(self);
            seq.tasks.push(tokio::spawn(async move {
                tokio::time::sleep_until(deadline).await;
                inner.reveal_through(epoch, index);
            }));
        }
    }

    fn run_preroll(self: &Arc<Self>, epoch: u64) -> JoinHandle<()> {
        let inner = Arc::clone(self);
        let preroll = self.config.preroll;
        tokio::spawn(async move {
            tokio::time::sleep(preroll).await;
            let mut seq = inner.seq.lock();
            if seq.epoch != epoch {
                return;
            }
            inner.schedule_reveals(&mut seq, epoch, Instant::now());
        })
    }

    /// Reveal every number up to and including `index`.
    ///
    /// Normally this reveals exactly one number; if a later task was polled
    /// before an earlier one, the earlier numbers are shown first so the
    /// order never changes.
    fn reveal_through(&self, epoch: u64, index: usize) {
        let mut seq = self.seq.lock();
        if seq.epoch != epoch {
            tracing::debug!("Dropping stale reveal #{} from epoch {}", index, epoch);
            return;
        }
        let (Some(draw), Some(draw_id)) = (seq.draw, seq.state.draw_id) else {
            return;
        };

        while seq.state.revealed.len() <= index {
            let k = seq.state.revealed.len();
            let number = draw.numbers()[k];
            seq.state.revealed.push(number);
            seq.state.phase = RevealPhase::Revealing(k + 1);
            tracing::debug!("Draw {} revealed #{}: {}", draw_id, k + 1, number);
            self.emit(RevealEvent::Revealed {
                draw_id,
                index: k,
                number,
            });
        }

        if seq.state.revealed.len() == DRAW_SIZE && seq.state.generating {
            seq.state.generating = false;
            seq.state.phase = RevealPhase::Idle;
            seq.state.result = Some(draw);
            seq.tasks.clear();
            tracing::info!("Draw {} complete: {}", draw_id, draw);
            self.emit(RevealEvent::Completed {
                draw_id,
                result: draw,
            });
        }

        self.publish(&seq.state);
    }
}

/// Owns the single active reveal sequence
pub struct RevealSequencer {
    inner: Arc<Inner>,
}

impl RevealSequencer {
    pub fn new(config: RevealConfig, source: impl RandomSource + Send + 'static) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let (state_tx, _) = watch::channel(RevealState::default());

        Self {
            inner: Arc::new(Inner {
                config,
                seq: Mutex::new(Sequence {
                    epoch: 0,
                    draw: None,
                    state: RevealState::default(),
                    tasks: Vec::new(),
                    source: Box::new(source),
                }),
                events,
                state_tx,
            }),
        }
    }

    pub fn config(&self) -> RevealConfig {
        self.inner.config
    }

    /// Start a new draw, superseding any sequence still in flight.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self) -> Uuid {
        let draw_id = Uuid::new_v4();
        let mut seq = self.inner.seq.lock();

        seq.abort_pending();
        if let (true, Some(previous)) = (seq.state.generating, seq.state.draw_id) {
            tracing::warn!("Draw {} superseded by {}", previous, draw_id);
            self.inner.emit(RevealEvent::Cancelled { draw_id: previous });
        }

        seq.epoch += 1;
        let epoch = seq.epoch;
        seq.draw = None;
        seq.state = RevealState {
            draw_id: Some(draw_id),
            phase: RevealPhase::Generating,
            generating: true,
            revealed: Vec::with_capacity(DRAW_SIZE),
            result: None,
        };

        tracing::info!("Draw {} started", draw_id);
        self.inner.emit(RevealEvent::Started { draw_id });
        self.inner.publish(&seq.state);

        if self.inner.config.preroll.is_zero() {
            self.inner.schedule_reveals(&mut seq, epoch, Instant::now());
        } else {
            let handle = self.inner.run_preroll(epoch);
            seq.tasks.push(handle);
        }

        draw_id
    }

    /// Stop the active sequence, keeping whatever was already revealed.
    ///
    /// Returns `false` when nothing was in flight.
    pub fn cancel(&self) -> bool {
        let mut seq = self.inner.seq.lock();
        if !seq.state.generating {
            return false;
        }

        seq.abort_pending();
        seq.epoch += 1;
        seq.state.generating = false;
        seq.state.phase = RevealPhase::Idle;

        if let Some(draw_id) = seq.state.draw_id {
            tracing::info!(
                "Draw {} cancelled after {} reveals",
                draw_id,
                seq.state.revealed.len()
            );
            self.inner.emit(RevealEvent::Cancelled { draw_id });
        }
        self.inner.publish(&seq.state);
        true
    }

    pub fn snapshot(&self) -> RevealState {
        self.inner.seq.lock().state.clone()
    }

    pub fn is_generating(&self) -> bool {
        self.inner.seq.lock().state.generating
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RevealEvent> {
        self.inner.events.subscribe()
    }

    pub fn watch_state(&self) -> watch::Receiver<RevealState> {
        self.inner.state_tx.subscribe()
    }

    /// Resolve once no sequence is in flight.
    pub async fn wait_idle(&self) -> RevealState {
        let mut rx = self.watch_state();
        loop {
            {
                let state = rx.borrow_and_update();
                if !state.generating {
                    return state.clone();
                }
            }
            if rx.changed().await.is_err() {
                return self.snapshot();
            }
        }
    }
}

impl Drop for RevealSequencer {
    fn drop(&mut self) {
        self.inner.seq.lock().abort_pending();
    }
}

impl std::fmt::Debug for RevealSequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let seq = self.inner.seq.lock();
        f.debug_struct("RevealSequencer")
            .field("config", &self.inner.config)
            .field("epoch", &seq.epoch)
            .field("state", &seq.state)
            .field("pending_tasks", &seq.tasks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::tests::ScriptedRandom;

    fn sequencer(samples: &[u8], preroll_ms: u64) -> RevealSequencer {
        RevealSequencer::new(
            RevealConfig {
                interval: Duration::from_millis(500),
                preroll: Duration::from_millis(preroll_ms),
            },
            ScriptedRandom::new(samples),
        )
    }

    fn drain(rx: &mut broadcast::Receiver<RevealEvent>) -> Vec<RevealEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    async fn advance_ms(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_reveals_in_order_with_generating_flag() {
        let seq = sequencer(&[39, 3, 28, 9, 38, 27], 0);
        let mut rx = seq.subscribe();

        let draw_id = seq.start();
        let state = seq.snapshot();
        assert!(state.generating);
        assert_eq!(state.phase, RevealPhase::Generating);
        assert!(state.revealed.is_empty());

        advance_ms(1).await;
        assert_eq!(seq.snapshot().revealed, vec![3]);
        assert!(seq.is_generating());

        advance_ms(2_000).await;
        let state = seq.snapshot();
        assert_eq!(state.revealed, vec![3, 9, 27, 28, 38]);
        assert_eq!(state.phase, RevealPhase::Revealing(5));
        assert!(state.generating);
        assert!(state.result.is_none());

        advance_ms(500).await;
        let state = seq.snapshot();
        assert_eq!(state.revealed, vec![3, 9, 27, 28, 38, 39]);
        assert!(!state.generating);
        assert_eq!(state.phase, RevealPhase::Idle);

        let expected = DrawResult::new(&[3, 9, 27, 28, 38, 39]).unwrap();
        assert_eq!(state.result, Some(expected));

        let events = drain(&mut rx);
        let mut wanted = vec![RevealEvent::Started { draw_id }];
        for (index, number) in [3, 9, 27, 28, 38, 39].into_iter().enumerate() {
            wanted.push(RevealEvent::Revealed {
                draw_id,
                index,
                number,
            });
        }
        wanted.push(RevealEvent::Completed {
            draw_id,
            result: expected,
        });
        assert_eq!(events, wanted);

        advance_ms(5_000).await;
        assert!(!seq.is_generating());
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_cancels_pending_reveals() {
        let seq = sequencer(&[1, 2, 3, 4, 5, 6, 40, 41, 42, 43, 44, 45], 0);
        let mut rx = seq.subscribe();

        let first = seq.start();
        advance_ms(700).await;
        assert_eq!(seq.snapshot().revealed, vec![1, 2]);

        let second = seq.start();
        assert!(seq.snapshot().revealed.is_empty());

        let state = seq.wait_idle().await;
        assert_eq!(state.draw_id, Some(second));
        assert_eq!(state.revealed, vec![40, 41, 42, 43, 44, 45]);

        advance_ms(5_000).await;
        assert_eq!(seq.snapshot().revealed, vec![40, 41, 42, 43, 44, 45]);

        let events = drain(&mut rx);
        let restart_at = events
            .iter()
            .position(|e| *e == RevealEvent::Started { draw_id: second })
            .unwrap();
        assert_eq!(events[restart_at - 1], RevealEvent::Cancelled { draw_id: first });

        let stale: Vec<_> = events[restart_at..]
            .iter()
            .filter(|e| matches!(e, RevealEvent::Revealed { draw_id, .. } if *draw_id == first))
            .collect();
        assert!(stale.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_preroll_delays_first_reveal() {
        let seq = sequencer(&[10, 20, 30, 40, 44, 45], 3_000);
        seq.start();

        advance_ms(2_999).await;
        let state = seq.snapshot();
        assert!(state.generating);
        assert_eq!(state.phase, RevealPhase::Generating);
        assert!(state.revealed.is_empty());

        advance_ms(2).await;
        assert_eq!(seq.snapshot().revealed, vec![10]);

        let state = seq.wait_idle().await;
        assert_eq!(state.revealed, vec![10, 20, 30, 40, 44, 45]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_keeps_revealed_numbers() {
        let seq = sequencer(&[1, 2, 3, 4, 5, 6], 0);
        let mut rx = seq.subscribe();
        let draw_id = seq.start();

        advance_ms(600).await;
        assert!(seq.cancel());

        let state = seq.snapshot();
        assert!(!state.generating);
        assert_eq!(state.phase, RevealPhase::Idle);
        assert_eq!(state.revealed, vec![1, 2]);
        assert!(state.result.is_none());

        advance_ms(5_000).await;
        assert_eq!(seq.snapshot().revealed, vec![1, 2]);
        assert!(!seq.cancel());

        let events = drain(&mut rx);
        assert_eq!(events.last(), Some(&RevealEvent::Cancelled { draw_id }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_pending_tasks() {
        let seq = sequencer(&[1, 2, 3, 4, 5, 6], 0);
        let mut state_rx = seq.watch_state();
        seq.start();
        drop(seq);

        advance_ms(5_000).await;
        assert!(state_rx.borrow_and_update().revealed.is_empty());
        assert!(state_rx.changed().await.is_err());
    }
}
