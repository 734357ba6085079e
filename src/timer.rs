use std::collections::HashMap;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use crate::runtime::GameEvent;

/// Cadence of the countdown repaint ticker.
pub const DISPLAY_TICK_MS: u64 = 50;

/// Timer bookkeeping shared between the game loop and the timer threads.
///
/// Every read-modify-write happens under the one lock; the tick sleeps do
/// not. Epochs are identified by a monotonically increasing counter so a
/// late-firing thread from a cancelled epoch can recognise itself and
/// quiesce: tickers check their stopped flag on every iteration and the
/// expiry thread verifies it before acting.
#[derive(Debug)]
struct TimerShared {
    remaining_secs: u64,
    /// Next epoch id. Monotonic for the lifetime of the timer, never
    /// rewound: a sleeping thread from a retired epoch must not find its
    /// id reissued to a later round and slip past the stopped check.
    epoch: u64,
    /// Value of `epoch` when the current round started.
    round_base: u64,
    stopped: HashMap<u64, bool>,
    skip_next_creation: bool,
    stop_signal: bool,
}

/// The per-guess countdown.
///
/// Arming an epoch spawns three threads: a one-shot expiry, a one-second
/// countdown ticker, and a repaint ticker. None of them touch game state;
/// expiry and repaint are delivered to the main loop as [`GameEvent`]s and
/// the loop owns the life penalty and the re-arm decision.
#[derive(Debug, Clone)]
pub struct RoundTimer {
    shared: Arc<Mutex<TimerShared>>,
    max_time: u64,
}

impl RoundTimer {
    pub fn new(max_time: u64) -> Self {
        Self {
            shared: Arc::new(Mutex::new(TimerShared {
                remaining_secs: max_time,
                epoch: 0,
                round_base: 0,
                stopped: HashMap::new(),
                skip_next_creation: false,
                stop_signal: false,
            })),
            max_time,
        }
    }

    /// Whether the loop should arm a fresh epoch this iteration.
    pub fn should_arm(&self) -> bool {
        let shared = self.shared.lock().unwrap();
        !shared.skip_next_creation && !shared.stop_signal
    }

    /// Arm a new timer epoch and return its identifier.
    ///
    /// Restores the full time budget, marks the epoch live, and raises
    /// `skip_next_creation` so the loop does not re-arm on every keystroke.
    pub fn arm(&self, events: &Sender<GameEvent>) -> u64 {
        let epoch = {
            let mut shared = self.shared.lock().unwrap();
            let epoch = shared.epoch;
            shared.epoch += 1;
            shared.stopped.insert(epoch, false);
            shared.skip_next_creation = true;
            shared.remaining_secs = self.max_time;
            epoch
        };

        self.spawn_expiry(epoch, events.clone());
        self.spawn_countdown(epoch);
        self.spawn_display(epoch, events.clone());

        epoch
    }

    fn spawn_expiry(&self, epoch: u64, tx: Sender<GameEvent>) {
        let shared = Arc::clone(&self.shared);
        let max_time = self.max_time;
        thread::spawn(move || {
            thread::sleep(Duration::from_secs(max_time));
            {
                let mut shared = shared.lock().unwrap();
                // Verify before firing: a cancelled epoch stays silent.
                if shared.stop_signal || shared.stopped.get(&epoch).copied().unwrap_or(true) {
                    return;
                }
                shared.stopped.insert(epoch, true);
                shared.skip_next_creation = false;
            }
            let _ = tx.send(GameEvent::TimerExpired(epoch));
        });
    }

    fn spawn_countdown(&self, epoch: u64) {
        let shared = Arc::clone(&self.shared);
        thread::spawn(move || loop {
            thread::sleep(Duration::from_secs(1));
            let mut shared = shared.lock().unwrap();
            if shared.stopped.get(&epoch).copied().unwrap_or(true) || shared.remaining_secs == 0 {
                break;
            }
            shared.remaining_secs -= 1;
        });
    }

    fn spawn_display(&self, epoch: u64, tx: Sender<GameEvent>) {
        let shared = Arc::clone(&self.shared);
        thread::spawn(move || loop {
            thread::sleep(Duration::from_millis(DISPLAY_TICK_MS));
            {
                let shared = shared.lock().unwrap();
                if shared.stopped.get(&epoch).copied().unwrap_or(true)
                    || shared.remaining_secs == 0
                {
                    break;
                }
            }
            // Repaint every tick, changed or not; the screen is cheap to
            // redraw and the countdown stays visibly live.
            if tx.send(GameEvent::TimerRepaint).is_err() {
                break;
            }
        });
    }

    /// Cancel the most recently armed epoch and restore the time budget.
    /// Its threads self-terminate within one tick interval.
    pub fn cancel_current(&self) {
        let mut shared = self.shared.lock().unwrap();
        if let Some(current) = shared.epoch.checked_sub(1) {
            shared.stopped.insert(current, true);
        }
        shared.remaining_secs = self.max_time;
    }

    /// Raise the terminal stop signal; the round must end and no further
    /// epoch may be armed.
    pub fn stop(&self) {
        let mut shared = self.shared.lock().unwrap();
        shared.stop_signal = true;
        if let Some(current) = shared.epoch.checked_sub(1) {
            shared.stopped.insert(current, true);
        }
    }

    /// Clear the round bookkeeping for a fresh start.
    ///
    /// The epoch allocator itself is not rewound, only rebased: dropping
    /// the stopped map retires every outstanding epoch (an unknown id
    /// reads as stopped), and keeping ids unique means a thread armed
    /// before the reset can never mistake a post-reset flag for its own.
    pub fn reset(&self) {
        let mut shared = self.shared.lock().unwrap();
        shared.round_base = shared.epoch;
        shared.stopped.clear();
        shared.skip_next_creation = false;
        shared.stop_signal = false;
        shared.remaining_secs = self.max_time;
    }

    /// Allow the next loop iteration to arm a fresh epoch.
    pub fn clear_skip(&self) {
        self.shared.lock().unwrap().skip_next_creation = false;
    }

    pub fn skip_next_creation(&self) -> bool {
        self.shared.lock().unwrap().skip_next_creation
    }

    pub fn stop_signal(&self) -> bool {
        self.shared.lock().unwrap().stop_signal
    }

    pub fn remaining_secs(&self) -> u64 {
        self.shared.lock().unwrap().remaining_secs
    }

    pub fn max_time(&self) -> u64 {
        self.max_time
    }

    pub fn is_stopped(&self, epoch: u64) -> bool {
        self.shared
            .lock()
            .unwrap()
            .stopped
            .get(&epoch)
            .copied()
            .unwrap_or(true)
    }

    /// Epochs armed since the last reset.
    pub fn epochs_this_round(&self) -> u64 {
        let shared = self.shared.lock().unwrap();
        shared.epoch - shared.round_base
    }
}
