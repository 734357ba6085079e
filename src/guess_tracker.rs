/// Number of trackable letters (ascii a-z).
pub const LETTER_COUNT: usize = 26;

/// Tracks which of the 26 lowercase letters have been guessed this round.
///
/// The key space is fixed: exactly the ascii letters `a..=z`, nothing else.
/// Callers are expected to validate input before consulting the tracker;
/// non-letter characters are answered with `false` and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessTracker {
    typed: [bool; LETTER_COUNT],
}

impl GuessTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn index(letter: char) -> Option<usize> {
        letter
            .is_ascii_lowercase()
            .then(|| letter as usize - 'a' as usize)
    }

    /// Mark a letter as typed. Idempotent; ignores non a-z input.
    pub fn mark(&mut self, letter: char) {
        if let Some(idx) = Self::index(letter) {
            self.typed[idx] = true;
        }
    }

    pub fn is_typed(&self, letter: char) -> bool {
        Self::index(letter).map(|idx| self.typed[idx]).unwrap_or(false)
    }

    /// Clear every typed flag. Called once per round reset.
    pub fn reset_all(&mut self) {
        self.typed = [false; LETTER_COUNT];
    }

    /// All letters in order with their typed status, for the letter board.
    pub fn letters(&self) -> impl Iterator<Item = (char, bool)> + '_ {
        ('a'..='z').map(|c| (c, self.is_typed(c)))
    }
}
