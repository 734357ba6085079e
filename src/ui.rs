use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::assets;
use crate::session::{GameSession, RoundOutcome};
use crate::word_bank::Tier;

/// Seconds left at which the countdown turns red.
const COUNTDOWN_WARN_SECS: u64 = 5;

const MENU: [&str; 12] = [
    "*-----------------------------------*",
    "|                                   |",
    "|      Welcome to Hangman Game      |",
    "|                                   |",
    "*-----------------------------------*",
    "",
    "Select the number on the menu:",
    "------------------------------",
    "1. Basic",
    "2. Intermediate",
    "3. Quit",
    "",
];

/// Vertically centered sub-rect of `area` that is `height` rows tall.
fn centered_rows(area: Rect, height: u16) -> Rect {
    let top = area.height.saturating_sub(height) / 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(top),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    chunks[1]
}

pub fn draw_menu(f: &mut Frame) {
    let lines: Vec<Line> = MENU.iter().map(|l| Line::from(*l)).collect();
    let height = lines.len() as u16;
    let menu = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(menu, centered_rows(f.area(), height));
}

/// The in-round screen: countdown, gallows, mask, letter board, input line.
pub fn draw_round(f: &mut Frame, session: &GameSession, input: &str) {
    let area = f.area();

    let remaining = session.remaining_secs();
    let timer_style = if remaining <= COUNTDOWN_WARN_SECS {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };
    let timer = Paragraph::new(Line::from(vec![
        Span::raw("Time left: "),
        Span::styled(remaining.to_string(), timer_style),
    ]));
    f.render_widget(
        timer,
        Rect {
            height: area.height.min(1),
            ..area
        },
    );

    let gallows = assets::gallows_frame(session.life());
    let mut lines: Vec<Line> = gallows.iter().map(|l| Line::from(*l)).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(session.masked_display()));
    lines.push(Line::from(""));
    for row in letter_rows(session) {
        lines.push(row);
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("-> "),
        Span::styled(input.to_string(), Style::default().add_modifier(Modifier::BOLD)),
    ]));

    let height = lines.len() as u16;
    let board = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(board, centered_rows(area, height));
}

/// The three letter rows (a-h, i-r, s-z), colored green for hits and red
/// for misses once a letter has been tried.
fn letter_rows(session: &GameSession) -> Vec<Line<'static>> {
    let letters: Vec<(char, bool)> = session.tracker().letters().collect();
    let portion = letters.len() / 3;
    let bounds = [
        (0, portion),
        (portion, letters.len() - portion),
        (letters.len() - portion, letters.len()),
    ];

    bounds
        .iter()
        .map(|&(start, end)| {
            let mut spans = Vec::new();
            for (idx, &(letter, typed)) in letters[start..end].iter().enumerate() {
                if idx > 0 {
                    spans.push(Span::raw(" "));
                }
                let style = if !typed {
                    Style::default()
                } else if session.answer().contains(letter) {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::Red)
                };
                spans.push(Span::styled(letter.to_string(), style));
            }
            Line::from(spans)
        })
        .collect()
}

pub fn draw_end_screen(f: &mut Frame, session: &GameSession, outcome: RoundOutcome) {
    let won = outcome == RoundOutcome::Won;
    let (title, title_color, farewell) = if won {
        ("Congratulations!", Color::Green, "That was good! Feel free to play again")
    } else {
        ("Game Over!", Color::Red, "It's ok! You can try again.")
    };

    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(title_color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(assets::emoticon(won)),
        Line::from(""),
        Line::from(format!("Answer: {}", session.answer())),
        Line::from(""),
        Line::from(farewell),
        Line::from(""),
        Line::from(Span::styled(
            "Press 'enter' to exit.",
            Style::default().add_modifier(Modifier::ITALIC | Modifier::DIM),
        )),
    ];

    let height = lines.len() as u16;
    let screen = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(screen, centered_rows(f.area(), height));
}

/// Tier for a menu keypress, if it selects one.
pub fn tier_for_choice(choice: char) -> Option<Tier> {
    match choice {
        '1' => Some(Tier::Basic),
        '2' => Some(Tier::Intermediate),
        _ => None,
    }
}
