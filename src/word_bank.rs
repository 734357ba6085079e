use include_dir::{include_dir, Dir};
use rand::seq::SliceRandom;
use serde::Deserialize;
use std::error::Error;
use std::path::Path;

static DATA_DIR: Dir = include_dir!("src/data");

const DEFAULT_BANK: &str = "bank.json";

/// Difficulty selection: single words or multi-word phrases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum Tier {
    Basic,
    Intermediate,
}

/// The word and phrase lists a session draws its puzzles from.
///
/// Immutable after construction; both lists are guaranteed non-empty.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WordBank {
    words: Vec<String>,
    phrases: Vec<String>,
}

impl WordBank {
    pub fn new(words: Vec<String>, phrases: Vec<String>) -> Result<Self, Box<dyn Error>> {
        Self { words, phrases }.validated("word bank")
    }

    /// The data set compiled into the binary.
    pub fn embedded() -> Self {
        let file = DATA_DIR
            .get_file(DEFAULT_BANK)
            .expect("Bundled word bank not found");
        let raw = file
            .contents_utf8()
            .expect("Unable to interpret bundled word bank as a string");
        serde_json::from_str(raw).expect("Unable to deserialize bundled word bank")
    }

    /// Load `{ "words": [...], "phrases": [...] }` from an external file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        let bank: WordBank = serde_json::from_str(&raw)
            .map_err(|e| format!("cannot parse {}: {e}", path.display()))?;
        bank.validated(&path.display().to_string())
    }

    fn validated(self, origin: &str) -> Result<Self, Box<dyn Error>> {
        if self.words.is_empty() {
            return Err(format!("{origin}: word list is empty").into());
        }
        if self.phrases.is_empty() {
            return Err(format!("{origin}: phrase list is empty").into());
        }
        Ok(self)
    }

    /// Uniformly random puzzle for the given tier.
    pub fn pick(&self, tier: Tier) -> &str {
        let list = match tier {
            Tier::Basic => &self.words,
            Tier::Intermediate => &self.phrases,
        };
        list.choose(&mut rand::thread_rng())
            .expect("word bank lists are never empty")
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }
}
