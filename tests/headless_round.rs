use gallows::config::Config;
use gallows::round::GuessOutcome;
use gallows::runtime::{EventSource, GameEvent, TestEventSource};
use gallows::session::{GameSession, RoundOutcome};
use gallows::word_bank::{Tier, WordBank};

fn session_with(words: Vec<&str>, phrases: Vec<&str>, life: u32, max_time: u64) -> GameSession {
    let bank = WordBank::new(
        words.into_iter().map(String::from).collect(),
        phrases.into_iter().map(String::from).collect(),
    )
    .unwrap();
    let cfg = Config {
        start_life: life,
        max_time,
        data_file: None,
    };
    GameSession::new(bank, &cfg)
}

// Headless round driven the way the real loop drives it: arm the timer at
// the top of each iteration, feed guesses, watch the termination condition.
#[test]
fn headless_round_completes_with_a_win() {
    let mut session = session_with(vec!["big"], vec!["big small"], 7, 60);
    let events = TestEventSource::new();
    let tx = events.sender();

    session.begin_round(Tier::Basic);

    let mut outcome = None;
    for guess in ["z", "", "i", "i", "g", "b"] {
        session.maybe_arm_timer(&tx);
        session.apply_guess(guess);
        outcome = session.round_outcome();
        if outcome.is_some() {
            break;
        }
    }

    assert_eq!(outcome, Some(RoundOutcome::Won));
    assert_eq!(session.life(), 6, "one miss, one life gone");
    assert_eq!(session.masked_display(), "b i g");

    session.cancel_timer();
    session.reset_round();
    assert_eq!(session.life(), 7);
    assert_eq!(session.answer(), "");
}

#[test]
fn headless_phrase_round_pre_credits_spaces() {
    let mut session = session_with(vec!["big"], vec!["big big"], 7, 60);
    let events = TestEventSource::new();
    let tx = events.sender();

    session.begin_round(Tier::Intermediate);
    assert_eq!(session.correct_count(), 1);

    let expected = [("i", 3), ("g", 5), ("b", 7)];
    for (guess, count) in expected {
        session.maybe_arm_timer(&tx);
        assert_eq!(session.apply_guess(guess), GuessOutcome::Hit);
        assert_eq!(session.correct_count(), count);
    }

    assert_eq!(session.round_outcome(), Some(RoundOutcome::Won));
}

// A real expiry on the last life: the stop signal must come up and no
// fresh epoch may be armed afterwards.
#[test]
fn timer_expiry_on_last_life_forces_the_loss() {
    let mut session = session_with(vec!["big"], vec!["big small"], 1, 1);
    let events = TestEventSource::new();
    let tx = events.sender();

    session.begin_round(Tier::Basic);
    session.maybe_arm_timer(&tx).expect("initial arm");

    // Drain events until the expiry shows up; repaints tick by in between.
    let expiry = loop {
        match events.recv().expect("channel stays open") {
            GameEvent::TimerExpired(epoch) => break epoch,
            _ => continue,
        }
    };

    assert!(session.handle_expiry(expiry));
    assert_eq!(session.life(), 0);
    assert!(session.stop_signal());
    assert_eq!(session.round_outcome(), Some(RoundOutcome::Lost));
    assert!(session.maybe_arm_timer(&tx).is_none());

    session.reset_round();
    assert!(!session.stop_signal());
    assert_eq!(session.life(), 1);
}

// An expiry with lives to spare costs one life and lets the loop re-arm a
// fresh epoch with a full budget.
#[test]
fn timer_expiry_mid_round_rearms_with_a_fresh_epoch() {
    let mut session = session_with(vec!["big"], vec!["big small"], 3, 1);
    let events = TestEventSource::new();
    let tx = events.sender();

    session.begin_round(Tier::Basic);
    let first = session.maybe_arm_timer(&tx).expect("initial arm");

    let expiry = loop {
        match events.recv().expect("channel stays open") {
            GameEvent::TimerExpired(epoch) => break epoch,
            _ => continue,
        }
    };
    assert_eq!(expiry, first);
    assert!(session.handle_expiry(expiry));

    assert_eq!(session.life(), 2);
    assert!(!session.stop_signal());
    assert!(session.round_outcome().is_none());

    let second = session.maybe_arm_timer(&tx).expect("re-arm after expiry");
    assert_eq!(second, first + 1);
    assert_eq!(session.remaining_secs(), 1, "full budget restored");
    session.cancel_timer();
}

// A guess that lands while the old epoch is being retired: its expiry must
// be dropped, not double-charged.
#[test]
fn stale_expiry_after_a_counted_guess_is_ignored() {
    let mut session = session_with(vec!["big"], vec!["big small"], 3, 1);
    let events = TestEventSource::new();
    let tx = events.sender();

    session.begin_round(Tier::Basic);
    let epoch = session.maybe_arm_timer(&tx).expect("initial arm");

    session.apply_guess("z");
    assert_eq!(session.life(), 2);

    assert!(!session.handle_expiry(epoch), "stale epoch must be dropped");
    assert_eq!(session.life(), 2);
}
