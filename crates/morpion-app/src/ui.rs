//! The UI driver boundary and the plain text implementation.
//!
//! The rules engine never renders or reads keys itself: it consumes
//! [`Action`]s from an [`EventSource`] and hands redraw data and status
//! messages to a [`Presenter`]. The stdin/stdout implementations below are
//! deliberately thin.

use std::io::{self, BufRead as _, Write as _};

use morpion_core::{GRID_SIZE, Line, Point};
use morpion_game::Game;

use crate::action::{Action, MoveDirection};

/// Severity of a status message. Messages themselves are opaque strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// Everything a presenter needs for one redraw.
#[derive(Debug)]
pub struct View<'a> {
    pub game: &'a Game,
    pub possibilities: &'a [Line],
    pub saved: bool,
}

/// Source of player actions, one per turn.
pub trait EventSource {
    /// Blocks until the next action is available.
    fn next_action(&mut self) -> io::Result<Action>;
}

/// Sink for redraws and status messages.
pub trait Presenter {
    fn redraw(&mut self, view: &View<'_>);
    fn message(&mut self, severity: Severity, text: &str);
}

/// Maps one line of keyboard input to an action, `None` for unknown input.
///
/// ZQSD or HJKL movement, empty line or `v` to confirm, `c` to cancel,
/// `u` to undo, `t` to toggle hints, `y` to affirm.
#[must_use]
pub fn parse_key(input: &str) -> Option<Action> {
    match input {
        "" | "v" => Some(Action::Confirm),
        "z" | "k" => Some(Action::Move(MoveDirection::Up)),
        "s" | "j" => Some(Action::Move(MoveDirection::Down)),
        "q" | "h" => Some(Action::Move(MoveDirection::Left)),
        "d" | "l" => Some(Action::Move(MoveDirection::Right)),
        "c" => Some(Action::Cancel),
        "u" => Some(Action::Undo),
        "t" => Some(Action::ToggleHelp),
        "y" => Some(Action::Affirm),
        _ => None,
    }
}

/// Reads actions line by line from standard input.
#[derive(Debug, Default)]
pub struct StdinSource {
    buf: String,
}

impl StdinSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSource for StdinSource {
    fn next_action(&mut self) -> io::Result<Action> {
        loop {
            self.buf.clear();
            if io::stdin().lock().read_line(&mut self.buf)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before the session ended",
                ));
            }
            if let Some(action) = parse_key(self.buf.trim()) {
                return Ok(action);
            }
            // Unknown key, wait for the next one.
        }
    }
}

/// Prints the board and status line to standard output.
#[derive(Debug, Default)]
pub struct TextPresenter;

impl TextPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn cell_char(view: &View<'_>, p: Point) -> char {
        let game = view.game;
        if game.select() == Some(p) {
            return '#';
        }
        if game.cursor() == p {
            return 'X';
        }
        if game.occupied(p) {
            return 'o';
        }
        if game.help_enabled() && is_placeable(view.possibilities, game, p) {
            return '+';
        }
        '.'
    }
}

/// Whether `p` is the missing point of some currently playable line.
fn is_placeable(possibilities: &[Line], game: &Game, p: Point) -> bool {
    possibilities
        .iter()
        .any(|line| line.contains(p) && !game.occupied(p))
}

impl Presenter for TextPresenter {
    fn redraw(&mut self, view: &View<'_>) {
        let mut out = io::stdout().lock();
        let game = view.game;
        let _ = writeln!(out);
        for y in (0..GRID_SIZE).rev() {
            let row: String = (0..GRID_SIZE)
                .map(|x| Self::cell_char(view, Point::new(x, y)))
                .collect();
            let _ = writeln!(out, "  {row}");
        }
        let saved = if view.saved { "saved" } else { "not saved" };
        let _ = writeln!(
            out,
            "  {} [{}]  lines: {}  possibilities: {}  ({saved})",
            game.nickname(),
            game.variant(),
            game.lines_count(),
            view.possibilities.len(),
        );
        let _ = out.flush();
    }

    fn message(&mut self, severity: Severity, text: &str) {
        let prefix = match severity {
            Severity::Info => "--",
            Severity::Success => "ok",
            Severity::Error => "!!",
        };
        println!("{prefix} {text}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_mapping() {
        assert_eq!(parse_key(""), Some(Action::Confirm));
        assert_eq!(parse_key("z"), Some(Action::Move(MoveDirection::Up)));
        assert_eq!(parse_key("d"), Some(Action::Move(MoveDirection::Right)));
        assert_eq!(parse_key("y"), Some(Action::Affirm));
        assert_eq!(parse_key("x"), None);
    }
}
