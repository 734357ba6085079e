use std::sync::mpsc::{self, Receiver, RecvError, Sender};

use crossterm::event::{self, Event as CtEvent, KeyEvent};

/// Unified event type consumed by the game loop.
///
/// Keyboard and resize events come from the terminal; the timer variants are
/// fed into the same channel by the round-timer threads so the loop has a
/// single suspension point.
#[derive(Clone, Debug)]
pub enum GameEvent {
    Key(KeyEvent),
    Resize,
    /// The timer epoch carried the countdown to zero.
    TimerExpired(u64),
    /// Periodic request to repaint the countdown indicator.
    TimerRepaint,
}

/// Source of game events (keyboard, resize, timer).
pub trait EventSource: Send + 'static {
    /// Block until the next event. Err means every sender is gone.
    fn recv(&self) -> Result<GameEvent, RecvError>;

    /// A sender feeding this source, handed to the timer threads.
    fn sender(&self) -> Sender<GameEvent>;
}

/// Production event source using crossterm.
pub struct CrosstermEventSource {
    tx: Sender<GameEvent>,
    rx: Receiver<GameEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        let key_tx = tx.clone();
        std::thread::spawn(move || loop {
            match event::read() {
                Ok(CtEvent::Key(key)) => {
                    if key_tx.send(GameEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(CtEvent::Resize(_, _)) => {
                    if key_tx.send(GameEvent::Resize).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        });

        Self { tx, rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for CrosstermEventSource {
    fn recv(&self) -> Result<GameEvent, RecvError> {
        self.rx.recv()
    }

    fn sender(&self) -> Sender<GameEvent> {
        self.tx.clone()
    }
}

/// Channel-backed event source for headless tests.
pub struct TestEventSource {
    tx: Sender<GameEvent>,
    rx: Receiver<GameEvent>,
}

impl TestEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }
}

impl Default for TestEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for TestEventSource {
    fn recv(&self) -> Result<GameEvent, RecvError> {
        self.rx.recv()
    }

    fn sender(&self) -> Sender<GameEvent> {
        self.tx.clone()
    }
}
