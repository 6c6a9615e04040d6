//! The interactive game loop.
//!
//! A [`Session`] owns a [`Game`] and a [`SaveStore`] and pumps actions from
//! an [`EventSource`] into the rules engine, autosaving after every change
//! and finishing when no playable line remains.

use std::io;

use morpion_core::Line;
use morpion_game::{Game, GameError};

use crate::{
    action::{Action, MoveDirection},
    persistence::SaveStore,
    ui::{EventSource, Presenter, Severity, View},
};

/// Where the turn state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TurnState {
    /// No point selected.
    Idle,
    /// A first endpoint is selected, waiting for the second.
    Pending,
    /// A quit was requested and awaits affirmation.
    ConfirmingQuit,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No playable line remained.
    Finished {
        /// Lines played over the whole game.
        lines: usize,
        /// 1-based rank in the score table, `None` if recording failed.
        rank: Option<usize>,
    },
    /// The player quit; the save file is kept for resuming.
    Interrupted,
}

/// One play-through of a game, from first prompt to outcome.
#[derive(Debug)]
pub struct Session {
    game: Game,
    store: SaveStore,
    state: TurnState,
    possibilities: Vec<Line>,
    saved: bool,
}

impl Session {
    #[must_use]
    pub fn new(game: Game, store: SaveStore) -> Self {
        let possibilities = game.possibilities();
        let saved = game_has_save(&game);
        Self {
            game,
            store,
            state: TurnState::Idle,
            possibilities,
            saved,
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the loop until the game finishes or the player quits.
    ///
    /// # Errors
    ///
    /// Returns an error when the event source fails, including on
    /// end-of-input.
    pub fn run(
        &mut self,
        source: &mut impl EventSource,
        presenter: &mut impl Presenter,
    ) -> io::Result<Outcome> {
        presenter.message(
            Severity::Info,
            &format!("Playing {} as {}", self.game.variant(), self.game.nickname()),
        );
        self.redraw(presenter);
        loop {
            if self.possibilities.is_empty() {
                return Ok(self.finish(presenter));
            }
            let action = source.next_action()?;
            if let Some(outcome) = self.handle(action, presenter) {
                return Ok(outcome);
            }
            self.redraw(presenter);
        }
    }

    /// Applies one action; `Some` means the session is over.
    fn handle(&mut self, action: Action, presenter: &mut impl Presenter) -> Option<Outcome> {
        if self.state == TurnState::ConfirmingQuit {
            if action == Action::Affirm {
                return Some(Outcome::Interrupted);
            }
            // Anything else disarms the quit request and is handled normally.
            self.state = TurnState::Idle;
        }
        match action {
            Action::Move(direction) => self.move_cursor(direction),
            Action::Confirm => self.confirm(presenter),
            Action::Cancel => match self.state {
                TurnState::Pending => {
                    self.game.empty_selection();
                    self.state = TurnState::Idle;
                }
                TurnState::Idle | TurnState::ConfirmingQuit => {
                    self.state = TurnState::ConfirmingQuit;
                    presenter.message(Severity::Info, "Quit? The game is saved. (y to confirm)");
                }
            },
            Action::Undo => {
                self.game.empty_selection();
                self.state = TurnState::Idle;
                if let Some(line) = self.game.undo() {
                    log::debug!("undid {line}");
                    self.possibilities = self.game.possibilities();
                    self.autosave(presenter);
                    presenter.message(Severity::Info, &format!("Undid {line}"));
                }
            }
            Action::ToggleHelp => self.game.toggle_help(),
            Action::Affirm => {}
        }
        None
    }

    fn move_cursor(&mut self, direction: MoveDirection) {
        let cursor = self.game.cursor();
        let next = match direction {
            MoveDirection::Up => cursor.up(),
            MoveDirection::Down => cursor.down(),
            MoveDirection::Left => cursor.left(),
            MoveDirection::Right => cursor.right(),
        };
        if let Some(next) = next {
            self.game.set_cursor(next);
        }
    }

    fn confirm(&mut self, presenter: &mut impl Presenter) {
        match self.state {
            TurnState::Idle => {
                self.game.select_case(self.game.cursor());
                if self.game.select().is_some() {
                    self.state = TurnState::Pending;
                }
            }
            TurnState::Pending => {
                let Some(select) = self.game.select() else {
                    self.state = TurnState::Idle;
                    return;
                };
                let cursor = self.game.cursor();
                if select == cursor {
                    // Confirming the selected point again deselects it.
                    self.game.empty_selection();
                    self.state = TurnState::Idle;
                    return;
                }
                // Win or lose, the attempt consumes the selection.
                self.game.empty_selection();
                self.state = TurnState::Idle;
                match self.game.play(select, cursor) {
                    Ok(line) => {
                        log::debug!("played {line}");
                        self.possibilities = self.game.possibilities();
                        self.autosave(presenter);
                        presenter.message(Severity::Success, &format!("Played {line}"));
                    }
                    Err(GameError::Line(err)) => {
                        presenter.message(Severity::Error, &format!("Invalid line: {err}"));
                    }
                    Err(err) => {
                        presenter.message(Severity::Error, &format!("Illegal move: {err}"));
                    }
                }
            }
            TurnState::ConfirmingQuit => unreachable!("quit state is disarmed before dispatch"),
        }
    }

    /// Saves the game if it has a save path. Failures are reported but do
    /// not end the session.
    fn autosave(&mut self, presenter: &mut impl Presenter) {
        if self.game.filepath().is_none() {
            return;
        }
        match self.store.save(&self.game) {
            Ok(()) => self.saved = true,
            Err(err) => {
                self.saved = false;
                log::warn!("autosave failed: {err}");
                presenter.message(Severity::Error, &format!("Autosave failed: {err}"));
            }
        }
    }

    /// No playable line remains: record the score, drop the save file and
    /// report the final standing.
    fn finish(&mut self, presenter: &mut impl Presenter) -> Outcome {
        let lines = self.game.lines_count();
        let rank = match self.store.record_score(&self.game) {
            Ok(rank) => Some(rank),
            Err(err) => {
                log::warn!("failed to record score: {err}");
                None
            }
        };
        if let Err(err) = self.store.remove(&self.game) {
            log::warn!("failed to remove save file: {err}");
        }
        let standing = match rank {
            Some(rank) => format!("Game over: {lines} lines, rank {rank}"),
            None => format!("Game over: {lines} lines"),
        };
        presenter.message(Severity::Success, &standing);
        Outcome::Finished { lines, rank }
    }

    fn redraw(&self, presenter: &mut impl Presenter) {
        presenter.redraw(&View {
            game: &self.game,
            possibilities: &self.possibilities,
            saved: self.saved,
        });
    }
}

fn game_has_save(game: &Game) -> bool {
    game.filepath().is_some_and(std::path::Path::exists)
}
