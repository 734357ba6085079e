use std::sync::mpsc::Sender;

use crate::config::Config;
use crate::guess_tracker::GuessTracker;
use crate::round::{GuessOutcome, RoundState};
use crate::runtime::GameEvent;
use crate::timer::RoundTimer;
use crate::word_bank::{Tier, WordBank};

/// How a finished round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    Won,
    Lost,
}

/// Orchestrates one player's game: picks puzzles, applies guesses, drives
/// the timer protocol, and decides when a round is over.
///
/// All game state is mutated on the thread that owns the session; the timer
/// threads only touch the shared timer bookkeeping and deliver events back
/// through the loop's channel.
#[derive(Debug)]
pub struct GameSession {
    bank: WordBank,
    round: RoundState,
    tracker: GuessTracker,
    timer: RoundTimer,
    start_life: u32,
    armed_epoch: Option<u64>,
}

impl GameSession {
    pub fn new(bank: WordBank, config: &Config) -> Self {
        Self {
            bank,
            round: RoundState::new(config.start_life),
            tracker: GuessTracker::new(),
            timer: RoundTimer::new(config.max_time),
            start_life: config.start_life,
            armed_epoch: None,
        }
    }

    /// Draw a puzzle for the tier and set up the mask.
    pub fn begin_round(&mut self, tier: Tier) {
        let answer = self.bank.pick(tier).to_string();
        self.round.start_round(answer);
    }

    /// Arm a fresh timer epoch if the protocol calls for one.
    ///
    /// Called at the top of every loop iteration; `skip_next_creation`
    /// keeps this from re-arming on every keystroke.
    pub fn maybe_arm_timer(&mut self, events: &Sender<GameEvent>) -> Option<u64> {
        if self.timer.should_arm() {
            let epoch = self.timer.arm(events);
            self.armed_epoch = Some(epoch);
            Some(epoch)
        } else {
            None
        }
    }

    /// Apply one submitted guess and run the timer side of the protocol:
    /// a counted guess (hit or miss) retires the current epoch so the next
    /// iteration arms a fresh one with a full time budget.
    pub fn apply_guess(&mut self, input: &str) -> GuessOutcome {
        let outcome = self.round.apply_guess(&mut self.tracker, input);
        if outcome.counts() {
            self.timer.cancel_current();
            self.timer.clear_skip();
            self.armed_epoch = None;
        }
        outcome
    }

    /// Handle a timer expiry event from the channel.
    ///
    /// Returns false for stale epochs (anything but the currently armed
    /// one), which are dropped without effect. A live expiry costs one
    /// life; on exhaustion the terminal stop signal is raised and no
    /// further epoch will be armed.
    pub fn handle_expiry(&mut self, epoch: u64) -> bool {
        if self.armed_epoch != Some(epoch) {
            return false;
        }
        self.armed_epoch = None;
        self.round.lose_life();
        if self.round.life() == 0 {
            self.timer.stop();
        }
        // The expiry thread already cleared skip_next_creation, so the
        // next loop iteration re-arms unless the stop signal is up.
        true
    }

    /// Termination check, evaluated once per loop iteration.
    pub fn round_outcome(&self) -> Option<RoundOutcome> {
        if self.round.won() {
            Some(RoundOutcome::Won)
        } else if self.timer.stop_signal() || self.round.life() == 0 {
            Some(RoundOutcome::Lost)
        } else {
            None
        }
    }

    /// Cancel any live timer epoch without ending the game, for round
    /// terminations that did not come from the stop signal.
    pub fn cancel_timer(&mut self) {
        self.timer.cancel_current();
        self.armed_epoch = None;
    }

    /// Restore every owned piece of state for the next round. The timer
    /// reset retires all outstanding epochs on its own.
    pub fn reset_round(&mut self) {
        self.round.reset_round(self.start_life);
        self.tracker.reset_all();
        self.timer.reset();
        self.armed_epoch = None;
    }

    pub fn life(&self) -> u32 {
        self.round.life()
    }

    pub fn answer(&self) -> &str {
        self.round.answer()
    }

    pub fn mask(&self) -> &[char] {
        self.round.mask()
    }

    pub fn masked_display(&self) -> String {
        self.round.masked_display()
    }

    pub fn correct_count(&self) -> usize {
        self.round.correct_count()
    }

    pub fn won(&self) -> bool {
        self.round.won()
    }

    pub fn is_typed(&self, letter: char) -> bool {
        self.tracker.is_typed(letter)
    }

    pub fn tracker(&self) -> &GuessTracker {
        &self.tracker
    }

    pub fn remaining_secs(&self) -> u64 {
        self.timer.remaining_secs()
    }

    pub fn stop_signal(&self) -> bool {
        self.timer.stop_signal()
    }

    pub fn timer(&self) -> &RoundTimer {
        &self.timer
    }
}
