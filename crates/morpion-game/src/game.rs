//! The game session.

use std::path::{Path, PathBuf};

use morpion_core::{Board, GRID_SIZE, Line, Point};

use crate::{GameError, Variant, rules};

/// A history entry: a played line plus the single point it newly occupied.
///
/// `new_point` is `None` when every point of the line was already occupied
/// at play time (a replay of an undrawn alignment); undoing such a move
/// releases no occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PlayedLine {
    pub(crate) line: Line,
    pub(crate) new_point: Option<Point>,
}

/// A Morpion Solitaire game session.
///
/// Owns the occupancy [`Board`], the ordered history of played lines (a
/// stack, for undo), the rule [`Variant`], the cursor/selection state
/// driven by the UI, and the player metadata (nickname, save path). All
/// mutation goes through [`play`](Self::play) and [`undo`](Self::undo);
/// enumeration never mutates.
///
/// # Example
///
/// ```
/// use morpion_core::Point;
/// use morpion_game::{Game, Variant};
///
/// let seed: Vec<Point> = (0..4).map(|x| Point::new(x, 0)).collect();
/// let mut game = Game::from_parts("ada", Variant::Touching, &seed, &[]).unwrap();
///
/// let line = game.play(Point::new(0, 0), Point::new(4, 0)).unwrap();
/// assert_eq!(game.lines_count(), 1);
/// assert!(game.occupied(Point::new(4, 0)));
///
/// assert_eq!(game.undo(), Some(line));
/// assert!(!game.occupied(Point::new(4, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    seed: Board,
    history: Vec<PlayedLine>,
    variant: Variant,
    cursor: Point,
    select: Option<Point>,
    nickname: String,
    filepath: Option<PathBuf>,
    help_enabled: bool,
}

impl Game {
    /// Starts a new game from the standard 36-point cross.
    #[must_use]
    pub fn new(nickname: impl Into<String>, variant: Variant) -> Self {
        let seed = Board::standard_cross();
        Self {
            board: seed.clone(),
            seed,
            history: Vec::new(),
            variant,
            cursor: Point::new(GRID_SIZE / 2, GRID_SIZE / 2),
            select: None,
            nickname: nickname.into(),
            filepath: None,
            help_enabled: false,
        }
    }

    /// Reconstructs a session from a seed point set and a played-line
    /// history, replaying every line through the normal legality checks.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSave`] if any line of the history is not
    /// playable at its position in the replay.
    pub fn from_parts(
        nickname: impl Into<String>,
        variant: Variant,
        seed: &[Point],
        lines: &[Line],
    ) -> Result<Self, GameError> {
        let mut seed_board = Board::empty();
        for &p in seed {
            seed_board.mark(p);
        }
        let mut game = Self {
            board: seed_board.clone(),
            seed: seed_board,
            history: Vec::new(),
            variant,
            cursor: Point::new(GRID_SIZE / 2, GRID_SIZE / 2),
            select: None,
            nickname: nickname.into(),
            filepath: None,
            help_enabled: false,
        };
        for &line in lines {
            if !rules::is_playable(&game.board, &game.history, line, game.variant) {
                return Err(GameError::InvalidSave);
            }
            game.apply(line);
        }
        Ok(game)
    }

    /// Plays the line joining `a` and `b`.
    ///
    /// On success every point of the line is occupied, the line is appended
    /// to the history, and the played line is returned.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Line`] if the endpoints do not form a 5-point
    /// aligned line, and [`GameError::UnplayableLine`] if the line is
    /// occupancy- or overlap-illegal; in both cases nothing is mutated.
    pub fn play(&mut self, a: Point, b: Point) -> Result<Line, GameError> {
        let line = Line::between(a, b)?;
        if !rules::is_playable(&self.board, &self.history, line, self.variant) {
            return Err(GameError::UnplayableLine);
        }
        self.apply(line);
        Ok(line)
    }

    /// Whether `line` may be played right now.
    #[must_use]
    pub fn is_playable(&self, line: Line) -> bool {
        rules::is_playable(&self.board, &self.history, line, self.variant)
    }

    fn apply(&mut self, line: Line) {
        let mut new_point = None;
        for &p in line.points() {
            if !self.board.is_occupied(p) {
                debug_assert!(new_point.is_none(), "playable line adds at most one point");
                new_point = Some(p);
                self.board.mark(p);
            }
        }
        self.history.push(PlayedLine { line, new_point });
    }

    /// Undoes the most recently played line, returning it.
    ///
    /// The point the move newly occupied is released again, unless another
    /// line of the remaining history still covers it. Seed points are never
    /// released. With an empty history this is a no-op returning `None`.
    pub fn undo(&mut self) -> Option<Line> {
        let entry = self.history.pop()?;
        if let Some(p) = entry.new_point {
            let still_used = self.history.iter().any(|other| other.line.contains(p));
            if !still_used && !self.seed.is_occupied(p) {
                self.board.clear(p);
            }
        }
        Some(entry.line)
    }

    /// Every currently playable line. See [`count_possibilities`](Self::count_possibilities).
    #[must_use]
    pub fn possibilities(&self) -> Vec<Line> {
        rules::possibilities(&self.board, &self.history, self.variant)
    }

    /// Number of currently playable lines; zero means the game is over.
    #[must_use]
    pub fn count_possibilities(&self) -> usize {
        self.possibilities().len()
    }

    /// Whether `p` is occupied.
    #[must_use]
    pub fn occupied(&self, p: Point) -> bool {
        self.board.is_occupied(p)
    }

    /// The occupancy board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of played lines (the score).
    #[must_use]
    pub fn lines_count(&self) -> usize {
        self.history.len()
    }

    /// The played lines, oldest first.
    pub fn played_lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.history.iter().map(|entry| entry.line)
    }

    /// The points occupied before the first move.
    pub fn seed_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.seed.occupied_points()
    }

    /// The rule variant of this session.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The highlighted point.
    #[must_use]
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Moves the highlight; selection is unaffected.
    pub fn set_cursor(&mut self, cursor: Point) {
        self.cursor = cursor;
    }

    /// The pending first endpoint, if one is selected.
    #[must_use]
    pub fn select(&self) -> Option<Point> {
        self.select
    }

    /// Toggles the selection at `p`: selects it when nothing is selected,
    /// deselects on a repeated selection of the same point, and otherwise
    /// leaves the pending endpoint for the caller to pair with the cursor.
    pub fn select_case(&mut self, p: Point) {
        match self.select {
            None => self.select = Some(p),
            Some(selected) if selected == p => self.select = None,
            Some(_) => {}
        }
    }

    /// Clears the selection.
    pub fn empty_selection(&mut self) {
        self.select = None;
    }

    /// Whether hint display is enabled.
    #[must_use]
    pub fn help_enabled(&self) -> bool {
        self.help_enabled
    }

    /// Toggles hint display. Cosmetic; legality is unaffected.
    pub fn toggle_help(&mut self) {
        self.help_enabled = !self.help_enabled;
    }

    /// The player nickname.
    #[must_use]
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Replaces the player nickname.
    pub fn set_nickname(&mut self, nickname: impl Into<String>) {
        self.nickname = nickname.into();
    }

    /// The save path this session persists to, if any.
    #[must_use]
    pub fn filepath(&self) -> Option<&Path> {
        self.filepath.as_deref()
    }

    /// Sets the save path this session persists to.
    pub fn set_filepath(&mut self, filepath: impl Into<PathBuf>) {
        self.filepath = Some(filepath.into());
    }
}
