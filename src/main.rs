use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
};

use gallows::{
    config::{self, Config, ConfigStore, FileConfigStore},
    runtime::{CrosstermEventSource, EventSource, GameEvent},
    session::{GameSession, RoundOutcome},
    ui,
    word_bank::WordBank,
};

/// terminal hangman with a per-guess countdown
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Terminal hangman: guess the word or phrase one letter at a time, racing a per-guess countdown that costs a life whenever it runs out."
)]
pub struct Cli {
    /// lives at the start of every round
    #[clap(short = 'l', long)]
    life: Option<u32>,

    /// seconds allowed per counted guess
    #[clap(short = 't', long)]
    max_time: Option<u64>,

    /// word/phrase data file (json with "words" and "phrases" lists)
    #[clap(short = 'd', long)]
    data_file: Option<PathBuf>,

    /// settings file to use instead of the per-user config
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Screen {
    Menu,
    Playing,
    End(RoundOutcome),
}

#[derive(Debug)]
struct App {
    session: GameSession,
    screen: Screen,
    /// Guess line being typed, submitted with Enter.
    input: String,
}

impl App {
    fn new(session: GameSession) -> Self {
        Self {
            session,
            screen: Screen::Menu,
            input: String::new(),
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config, Box<dyn Error>> {
    let mut cfg = match &cli.config {
        Some(path) => config::load_required(path)?,
        None => FileConfigStore::new().load(),
    };
    if let Some(life) = cli.life {
        cfg.start_life = life;
    }
    if let Some(max_time) = cli.max_time {
        cfg.max_time = max_time;
    }
    if cli.data_file.is_some() {
        cfg.data_file = cli.data_file.clone();
    }
    Ok(cfg)
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let cfg = load_config(&cli)?;
    let bank = match &cfg.data_file {
        Some(path) => WordBank::from_file(path)?,
        None => WordBank::embedded(),
    };
    let mut app = App::new(GameSession::new(bank, &cfg));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = CrosstermEventSource::new();
    let result = run(&mut terminal, &events, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// The menu -> round -> end-screen loop, generic over backend and event
/// source so it can be driven headlessly.
fn run<B: Backend, E: EventSource>(
    terminal: &mut Terminal<B>,
    events: &E,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    let timer_tx = events.sender();

    loop {
        if app.screen == Screen::Playing {
            app.session.maybe_arm_timer(&timer_tx);
        }

        terminal.draw(|f| match app.screen {
            Screen::Menu => ui::draw_menu(f),
            Screen::Playing => ui::draw_round(f, &app.session, &app.input),
            Screen::End(outcome) => ui::draw_end_screen(f, &app.session, outcome),
        })?;

        let event = events.recv()?;

        let key = match event {
            GameEvent::Key(key) => key,
            GameEvent::Resize | GameEvent::TimerRepaint => continue,
            GameEvent::TimerExpired(epoch) => {
                if app.screen == Screen::Playing && app.session.handle_expiry(epoch) {
                    if let Some(outcome) = app.session.round_outcome() {
                        // Stop signal raised by the expiry; no timer left
                        // to cancel.
                        app.screen = Screen::End(outcome);
                    }
                }
                continue;
            }
        };

        // ctrl+c quits from anywhere
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            app.session.cancel_timer();
            return Ok(());
        }

        match app.screen {
            Screen::Menu => match key.code {
                KeyCode::Char('3') | KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char(c) => {
                    if let Some(tier) = ui::tier_for_choice(c) {
                        app.session.begin_round(tier);
                        app.input.clear();
                        app.screen = Screen::Playing;
                    }
                }
                _ => {}
            },
            Screen::Playing => match key.code {
                KeyCode::Char(c) => app.input.push(c),
                KeyCode::Backspace => {
                    app.input.pop();
                }
                KeyCode::Enter => {
                    let guess = std::mem::take(&mut app.input);
                    app.session.apply_guess(&guess);
                    if let Some(outcome) = app.session.round_outcome() {
                        if !app.session.stop_signal() {
                            app.session.cancel_timer();
                        }
                        app.screen = Screen::End(outcome);
                    }
                }
                KeyCode::Esc => {
                    // Abandon the round back to the menu.
                    app.session.cancel_timer();
                    app.session.reset_round();
                    app.input.clear();
                    app.screen = Screen::Menu;
                }
                _ => {}
            },
            Screen::End(_) => {
                if key.code == KeyCode::Enter {
                    app.session.reset_round();
                    app.input.clear();
                    app.screen = Screen::Menu;
                }
            }
        }
    }
}
