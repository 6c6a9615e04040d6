//! Test doubles for driving a session without a terminal.

use std::{collections::VecDeque, io};

use morpion_game::Game;

use crate::{
    action::Action,
    ui::{EventSource, Presenter, Severity, View},
};

/// Replays a fixed list of actions, then reports end-of-input.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    actions: VecDeque<Action>,
}

impl ScriptedSource {
    #[must_use]
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }
}

impl EventSource for ScriptedSource {
    fn next_action(&mut self) -> io::Result<Action> {
        self.actions
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

/// Records everything a session asks to present.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub messages: Vec<(Severity, String)>,
    pub redraws: usize,
}

impl RecordingPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded message texts with the given severity.
    pub fn texts(&self, severity: Severity) -> impl Iterator<Item = &str> {
        self.messages
            .iter()
            .filter(move |(s, _)| *s == severity)
            .map(|(_, text)| text.as_str())
    }
}

impl Presenter for RecordingPresenter {
    fn redraw(&mut self, _view: &View<'_>) {
        self.redraws += 1;
    }

    fn message(&mut self, severity: Severity, text: &str) {
        self.messages.push((severity, text.to_owned()));
    }
}

/// A game whose only legal move is the bottom row, for state-machine tests.
#[must_use]
pub fn one_move_game(nickname: &str) -> Game {
    use morpion_core::Point;
    use morpion_game::Variant;

    let seed: Vec<Point> = (0..4).map(|x| Point::new(x, 0)).collect();
    let mut game = Game::from_parts(nickname, Variant::Touching, &seed, &[])
        .expect("empty history is always valid");
    game.set_cursor(Point::new(0, 0));
    game
}
