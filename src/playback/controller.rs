use std::sync::Arc;
use std::time::Duration;

use log::info;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use super::player::{PlayerState, VideoPlayer};
use super::state::{PlaybackMode, PlaybackSession};

/// Default bounded-play window: one eight-count at typical tempo.
pub const DEFAULT_CLIP_SECS: u64 = 8;

const LOOP_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// The timer or poller backing the current session. Owning the token and
/// handle together lets a transition cancel and discard both atomically.
struct ActiveTask {
    handle: JoinHandle<()>,
    cancel: CancellationToken,
}

/// Drives bounded plays and loops against an abstract player.
///
/// There is at most one live timer or poller at any moment: every entry
/// point cancels the previous task before arming its own, and a player
/// pause/end notification cancels whatever is running. The controller has
/// no terminal state; it cycles back to idle.
#[derive(Clone)]
pub struct PlaybackController {
    player: Arc<dyn VideoPlayer>,
    session: Arc<Mutex<PlaybackSession>>,
    task: Arc<Mutex<Option<ActiveTask>>>,
}

impl PlaybackController {
    pub fn new(player: Arc<dyn VideoPlayer>) -> Self {
        Self {
            player,
            session: Arc::new(Mutex::new(PlaybackSession::new())),
            task: Arc::new(Mutex::new(None)),
        }
    }

    pub async fn mode(&self) -> PlaybackMode {
        self.session.lock().await.mode
    }

    pub async fn session_snapshot(&self) -> PlaybackSession {
        self.session.lock().await.clone()
    }

    /// Seek to `start_time_sec`, play for `duration_sec` (default 8 s),
    /// then pause — unless the user got there first.
    pub async fn play_segment(&self, start_time_sec: u64, duration_sec: Option<u64>) {
        let duration_sec = duration_sec.unwrap_or(DEFAULT_CLIP_SECS);
        self.cancel_active().await;

        info!("bounded play: {duration_sec}s from {start_time_sec}s");
        self.player.seek(start_time_sec as f64);
        self.player.play();

        self.session.lock().await.begin_bounded();

        let player = self.player.clone();
        let session = self.session.clone();
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        // Anchor the window at the moment the play command is issued, not
        // at the spawned task's first poll.
        let expiry = time::sleep(Duration::from_secs(duration_sec));
        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = expiry => {
                    // The timer is advisory: only pause if playback is
                    // still running. A user who already paused (or resumed
                    // after pausing) must not be fought.
                    if player.state() == PlayerState::Playing {
                        player.pause();
                    }
                    session.lock().await.reset();
                }
                _ = token.cancelled() => {}
            }
        });

        self.store_task(ActiveTask { handle, cancel }).await;
    }

    /// Seek to `start_time_sec`, play, and keep seeking back there every
    /// time playback reaches `end_time_sec`, until canceled.
    pub async fn loop_segment(&self, start_time_sec: u64, end_time_sec: u64) {
        self.cancel_active().await;

        info!("looping {start_time_sec}s..{end_time_sec}s");
        self.player.seek(start_time_sec as f64);
        self.player.play();

        self.session
            .lock()
            .await
            .begin_loop(start_time_sec, end_time_sec);

        let player = self.player.clone();
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let handle = tokio::spawn(async move {
            // The player surface has no sub-second boundary callbacks, so
            // the loop end is detected by polling.
            let mut ticker = time::interval(LOOP_POLL_INTERVAL);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        if player.current_time() >= end_time_sec as f64 {
                            // Correction, not a transition: playback keeps
                            // running and the session stays in looping.
                            player.seek(start_time_sec as f64);
                        }
                    }
                    _ = token.cancelled() => break,
                }
            }
        });

        self.store_task(ActiveTask { handle, cancel }).await;
    }

    /// Notification sink for the player's state changes. A pause or end
    /// tears the session down from any state; everything else is ignored.
    pub async fn on_player_state_change(&self, state: PlayerState) {
        match state {
            PlayerState::Paused | PlayerState::Ended => {
                info!("player reported {state:?}, resetting session");
                self.cancel_active().await;
            }
            _ => {}
        }
    }

    /// Cancel any pending timer or poller and reset the session. Safe to
    /// call when nothing is active.
    async fn cancel_active(&self) {
        if let Some(task) = self.task.lock().await.take() {
            task.cancel.cancel();
            task.handle.abort();
        }
        self.session.lock().await.reset();
    }

    async fn store_task(&self, task: ActiveTask) {
        let mut slot = self.task.lock().await;
        if let Some(stale) = slot.take() {
            stale.cancel.cancel();
            stale.handle.abort();
        }
        *slot = Some(task);
    }
}
