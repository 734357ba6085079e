// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod assets;
pub mod config;
pub mod guess_tracker;
pub mod round;
pub mod runtime;
pub mod session;
pub mod timer;
pub mod ui;
pub mod word_bank;
