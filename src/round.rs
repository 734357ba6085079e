use crate::guess_tracker::GuessTracker;

/// Placeholder shown for unrevealed, non-space positions.
pub const PLACEHOLDER: char = '_';

/// What a single guess did to the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Empty input; treated as a repaint request, timer untouched.
    Pass,
    /// Not exactly one ascii letter; dropped without any state change.
    Rejected,
    /// The letter was guessed before (or already fully revealed); no effect.
    Repeat,
    /// Letter is not in the answer; one life lost.
    Miss,
    /// Letter revealed at least one position.
    Hit,
}

impl GuessOutcome {
    /// True for guesses that consume the current timer epoch and earn a
    /// fresh time budget on the next loop iteration.
    pub fn counts(self) -> bool {
        matches!(self, GuessOutcome::Miss | GuessOutcome::Hit)
    }
}

/// The per-round state machine: lives, the answer, and its masked reveal.
///
/// Created empty, populated by [`start_round`](Self::start_round), mutated by
/// [`apply_guess`](Self::apply_guess), and cleared by
/// [`reset_round`](Self::reset_round). Spaces in the answer are revealed up
/// front and pre-credited so multi-word phrases never penalize spacing.
#[derive(Debug, Clone)]
pub struct RoundState {
    life: u32,
    answer: String,
    mask: Vec<char>,
    correct_count: usize,
    won: bool,
}

impl RoundState {
    pub fn new(start_life: u32) -> Self {
        Self {
            life: start_life,
            answer: String::new(),
            mask: vec![],
            correct_count: 0,
            won: false,
        }
    }

    /// Install a fresh answer and build its mask.
    pub fn start_round(&mut self, answer: String) {
        self.mask = answer
            .chars()
            .map(|c| if c == ' ' { ' ' } else { PLACEHOLDER })
            .collect();
        self.correct_count = answer.chars().filter(|&c| c == ' ').count();
        self.answer = answer;
        self.won = self.correct_count == self.mask.len() && !self.mask.is_empty();
    }

    /// Evaluate one guess against the answer.
    ///
    /// The input is lowercased first. Empty input and anything that is not
    /// exactly one ascii letter pass through without touching the tracker or
    /// the life count; repeats of an already-typed letter are absorbed so a
    /// player is never penalized twice for the same guess.
    pub fn apply_guess(&mut self, tracker: &mut GuessTracker, input: &str) -> GuessOutcome {
        if input.is_empty() {
            return GuessOutcome::Pass;
        }

        let lowered = input.to_lowercase();
        let mut chars = lowered.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_lowercase() => c,
            _ => return GuessOutcome::Rejected,
        };

        if tracker.is_typed(letter) {
            return GuessOutcome::Repeat;
        }
        tracker.mark(letter);

        if !self.answer.contains(letter) {
            self.life = self.life.saturating_sub(1);
            return GuessOutcome::Miss;
        }

        // A letter can be in the answer yet already revealed (e.g. after a
        // reset that kept the mask); never re-credit it.
        if self.mask.contains(&letter) {
            return GuessOutcome::Repeat;
        }

        for (idx, c) in self.answer.chars().enumerate() {
            if c == letter {
                self.mask[idx] = c;
                self.correct_count += 1;
            }
        }
        if self.correct_count == self.mask.len() {
            self.won = true;
        }

        GuessOutcome::Hit
    }

    /// Timer expiry penalty; life never goes below zero.
    pub fn lose_life(&mut self) {
        self.life = self.life.saturating_sub(1);
    }

    /// Restore the state to its pre-round shape.
    pub fn reset_round(&mut self, start_life: u32) {
        self.life = start_life;
        self.answer.clear();
        self.mask.clear();
        self.correct_count = 0;
        self.won = false;
    }

    pub fn life(&self) -> u32 {
        self.life
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn mask(&self) -> &[char] {
        &self.mask
    }

    /// The mask as the player sees it, letters separated by spaces.
    pub fn masked_display(&self) -> String {
        let mut out = String::with_capacity(self.mask.len() * 2);
        for (idx, c) in self.mask.iter().enumerate() {
            if idx > 0 {
                out.push(' ');
            }
            out.push(*c);
        }
        out
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn won(&self) -> bool {
        self.won
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_with(answer: &str, life: u32) -> (RoundState, GuessTracker) {
        let mut round = RoundState::new(life);
        round.start_round(answer.to_string());
        (round, GuessTracker::new())
    }

    #[test]
    fn start_round_masks_everything_but_spaces() {
        let (round, _) = round_with("big small", 7);

        assert_eq!(round.mask().len(), "big small".len());
        assert_eq!(
            round.mask().iter().collect::<String>(),
            "___ _____".to_string()
        );
        assert_eq!(round.correct_count(), 1);
        assert!(!round.won());
    }

    #[test]
    fn wrong_guess_costs_one_life_and_leaves_mask_alone() {
        let (mut round, mut tracker) = round_with("big", 7);

        let outcome = round.apply_guess(&mut tracker, "x");

        assert_eq!(outcome, GuessOutcome::Miss);
        assert_eq!(round.life(), 6);
        assert_eq!(round.mask(), &['_', '_', '_']);
        assert!(tracker.is_typed('x'));
    }

    #[test]
    fn correct_guess_reveals_every_occurrence_at_once() {
        let (mut round, mut tracker) = round_with("banana", 7);

        let outcome = round.apply_guess(&mut tracker, "a");

        assert_eq!(outcome, GuessOutcome::Hit);
        assert_eq!(round.mask(), &['_', 'a', '_', 'a', '_', 'a']);
        assert_eq!(round.correct_count(), 3);
        assert_eq!(round.life(), 7);
    }

    #[test]
    fn repeat_guess_changes_nothing_after_the_first() {
        let (mut round, mut tracker) = round_with("big", 7);

        assert_eq!(round.apply_guess(&mut tracker, "x"), GuessOutcome::Miss);
        let life = round.life();
        let mask: Vec<char> = round.mask().to_vec();
        let count = round.correct_count();

        assert_eq!(round.apply_guess(&mut tracker, "x"), GuessOutcome::Repeat);
        assert_eq!(round.life(), life);
        assert_eq!(round.mask(), mask.as_slice());
        assert_eq!(round.correct_count(), count);

        assert_eq!(round.apply_guess(&mut tracker, "b"), GuessOutcome::Hit);
        assert_eq!(round.apply_guess(&mut tracker, "b"), GuessOutcome::Repeat);
        assert_eq!(round.correct_count(), 1);
    }

    #[test]
    fn empty_input_is_a_pass_through() {
        let (mut round, mut tracker) = round_with("big", 7);

        assert_eq!(round.apply_guess(&mut tracker, ""), GuessOutcome::Pass);
        assert_eq!(round.life(), 7);
        assert!(('a'..='z').all(|c| !tracker.is_typed(c)));
    }

    #[test]
    fn malformed_input_is_rejected_without_state_change() {
        let (mut round, mut tracker) = round_with("big", 7);

        for bad in ["bg", "1", "!", " ", "é"] {
            assert_eq!(round.apply_guess(&mut tracker, bad), GuessOutcome::Rejected);
        }
        assert_eq!(round.life(), 7);
        assert_eq!(round.mask(), &['_', '_', '_']);
        assert!(('a'..='z').all(|c| !tracker.is_typed(c)));
    }

    #[test]
    fn uppercase_input_is_lowered_before_evaluation() {
        let (mut round, mut tracker) = round_with("big", 7);

        assert_eq!(round.apply_guess(&mut tracker, "B"), GuessOutcome::Hit);
        assert_eq!(round.mask(), &['b', '_', '_']);
        assert!(tracker.is_typed('b'));
    }

    #[test]
    fn big_scenario_progresses_to_a_win() {
        let (mut round, mut tracker) = round_with("big", 7);
        assert_eq!(round.mask(), &['_', '_', '_']);
        assert_eq!(round.correct_count(), 0);

        round.apply_guess(&mut tracker, "i");
        assert_eq!(round.mask(), &['_', 'i', '_']);
        assert_eq!(round.correct_count(), 1);
        assert!(!round.won());

        round.apply_guess(&mut tracker, "g");
        assert_eq!(round.mask(), &['_', 'i', 'g']);
        assert_eq!(round.correct_count(), 2);
        assert!(!round.won());

        round.apply_guess(&mut tracker, "b");
        assert_eq!(round.mask(), &['b', 'i', 'g']);
        assert_eq!(round.correct_count(), 3);
        assert!(round.won());
    }

    #[test]
    fn phrase_scenario_pre_credits_the_space() {
        let (mut round, mut tracker) = round_with("big big", 7);
        assert_eq!(round.correct_count(), 1);

        round.apply_guess(&mut tracker, "i");
        assert_eq!(round.correct_count(), 3);

        round.apply_guess(&mut tracker, "g");
        assert_eq!(round.correct_count(), 5);

        round.apply_guess(&mut tracker, "b");
        assert_eq!(round.correct_count(), 7);
        assert_eq!(round.masked_display(), "b i g   b i g");
        assert!(round.won());
    }

    #[test]
    fn wrong_empty_wrong_life_script() {
        let (mut round, mut tracker) = round_with("big", 5);

        round.apply_guess(&mut tracker, "d");
        assert_eq!(round.life(), 4);

        round.apply_guess(&mut tracker, "");
        assert_eq!(round.life(), 4);

        round.apply_guess(&mut tracker, "l");
        assert_eq!(round.life(), 3);
    }

    #[test]
    fn life_never_goes_below_zero() {
        let (mut round, mut tracker) = round_with("z", 1);

        round.apply_guess(&mut tracker, "a");
        assert_eq!(round.life(), 0);
        round.lose_life();
        assert_eq!(round.life(), 0);
    }

    #[test]
    fn reset_round_restores_everything() {
        let (mut round, mut tracker) = round_with("big", 3);
        round.apply_guess(&mut tracker, "b");
        round.apply_guess(&mut tracker, "x");

        round.reset_round(7);

        assert_eq!(round.life(), 7);
        assert_eq!(round.answer(), "");
        assert!(round.mask().is_empty());
        assert_eq!(round.correct_count(), 0);
        assert!(!round.won());
    }
}
