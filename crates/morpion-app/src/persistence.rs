//! Save files and the high-score table.
//!
//! Games are autosaved as JSON after every successful move or undo and
//! removed when the game finishes naturally; the minimal resume contract is
//! the seed point set plus the played-line history. The score table is a
//! second JSON file kept in ranking order.

use std::{
    fs,
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

use morpion_core::{Line, Point};
use morpion_game::{Game, Variant};
use serde::{Deserialize, Serialize};

/// Longest accepted nickname, matching the save-file naming scheme.
pub const NICKNAME_LENGTH: usize = 32;

const SAVE_EXTENSION: &str = "morpion";
const SCORES_FILE: &str = "highscores.json";

/// Persistence failures. The engine never retries; callers surface these
/// as a "could not start/resume" outcome or log them for autosaves.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum PersistError {
    /// Filesystem error.
    #[display("i/o error: {_0}")]
    Io(std::io::Error),
    /// The file is not valid JSON.
    #[display("malformed save data: {_0}")]
    Json(serde_json::Error),
    /// The file parsed but describes an impossible game.
    #[display("corrupt save file: {detail}")]
    Corrupt {
        /// What made the file unusable.
        detail: &'static str,
    },
    /// The game has no save path attached.
    #[display("game has no save path")]
    MissingPath,
    /// Every candidate save-file name is taken.
    #[display("no available save file name for this nickname")]
    NoAvailablePath,
}

/// Which line count ranks first in the score table.
///
/// The classic reading is that more lines are better, but the ordering is
/// a policy of the score store, not of the rules engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RankingOrder {
    /// Higher played-line counts rank first.
    #[default]
    MoreLinesFirst,
    /// Lower played-line counts rank first.
    FewerLinesFirst,
}

/// One finished game in the score table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub nickname: String,
    pub lines: usize,
    pub variant: String,
}

/// Save-file and score-file storage rooted at one directory.
#[derive(Debug)]
pub struct SaveStore {
    data_dir: PathBuf,
    order: RankingOrder,
}

impl SaveStore {
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self::with_ranking(data_dir, RankingOrder::default())
    }

    #[must_use]
    pub fn with_ranking(data_dir: impl Into<PathBuf>, order: RankingOrder) -> Self {
        Self {
            data_dir: data_dir.into(),
            order,
        }
    }

    /// First unused save path for `nickname`: `<nick>.morpion`,
    /// `<nick>_1.morpion`, ...
    pub fn available_path(&self, nickname: &str) -> Result<PathBuf, PersistError> {
        fs::create_dir_all(&self.data_dir)?;
        for n in 0..10_000u32 {
            let file = if n == 0 {
                format!("{nickname}.{SAVE_EXTENSION}")
            } else {
                format!("{nickname}_{n}.{SAVE_EXTENSION}")
            };
            let path = self.data_dir.join(file);
            if !path.exists() {
                return Ok(path);
            }
        }
        Err(PersistError::NoAvailablePath)
    }

    /// Writes the game to its attached save path.
    pub fn save(&self, game: &Game) -> Result<(), PersistError> {
        let path = game.filepath().ok_or(PersistError::MissingPath)?;
        let file = BufWriter::new(fs::File::create(path)?);
        serde_json::to_writer_pretty(file, &SaveGame::from_game(game))?;
        Ok(())
    }

    /// Loads a game from `path` and attaches the path for later autosaves.
    pub fn load(&self, path: &Path) -> Result<Game, PersistError> {
        let file = BufReader::new(fs::File::open(path)?);
        let save: SaveGame = serde_json::from_reader(file)?;
        let mut game = save.into_game()?;
        game.set_filepath(path);
        Ok(game)
    }

    /// Removes the game's save file, if it has one. Missing files are fine.
    pub fn remove(&self, game: &Game) -> Result<(), PersistError> {
        if let Some(path) = game.filepath()
            && let Err(err) = fs::remove_file(path)
            && err.kind() != std::io::ErrorKind::NotFound
        {
            return Err(err.into());
        }
        Ok(())
    }

    /// Records a finished game and returns its 1-based rank. Earlier
    /// entries with the same line count rank ahead of the new one.
    pub fn record_score(&self, game: &Game) -> Result<usize, PersistError> {
        fs::create_dir_all(&self.data_dir)?;
        let mut scores = self.scores()?;
        let lines = game.lines_count();
        let rank = scores
            .iter()
            .filter(|entry| match self.order {
                RankingOrder::MoreLinesFirst => entry.lines >= lines,
                RankingOrder::FewerLinesFirst => entry.lines <= lines,
            })
            .count()
            + 1;
        scores.insert(
            rank - 1,
            ScoreEntry {
                nickname: game.nickname().to_owned(),
                lines,
                variant: game.variant().to_string(),
            },
        );
        let file = BufWriter::new(fs::File::create(self.scores_path())?);
        serde_json::to_writer_pretty(file, &scores)?;
        Ok(rank)
    }

    /// The score table in ranking order; empty when none was written yet.
    pub fn scores(&self) -> Result<Vec<ScoreEntry>, PersistError> {
        let path = self.scores_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let file = BufReader::new(fs::File::open(path)?);
        Ok(serde_json::from_reader(file)?)
    }

    fn scores_path(&self) -> PathBuf {
        self.data_dir.join(SCORES_FILE)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SaveGame {
    nickname: String,
    variant: String,
    seed: Vec<(u8, u8)>,
    lines: Vec<[(u8, u8); 2]>,
}

impl SaveGame {
    fn from_game(game: &Game) -> Self {
        Self {
            nickname: game.nickname().to_owned(),
            variant: game.variant().to_string(),
            seed: game.seed_points().map(|p| (p.x(), p.y())).collect(),
            lines: game
                .played_lines()
                .map(|line| {
                    let (a, b) = line.endpoints();
                    [(a.x(), a.y()), (b.x(), b.y())]
                })
                .collect(),
        }
    }

    fn into_game(self) -> Result<Game, PersistError> {
        let variant: Variant = self.variant.parse().map_err(|_| PersistError::Corrupt {
            detail: "unknown variant",
        })?;
        let seed = self
            .seed
            .into_iter()
            .map(|(x, y)| {
                Point::try_new(x.into(), y.into()).ok_or(PersistError::Corrupt {
                    detail: "seed point off the board",
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let lines = self
            .lines
            .into_iter()
            .map(|[(ax, ay), (bx, by)]| {
                let a = Point::try_new(ax.into(), ay.into());
                let b = Point::try_new(bx.into(), by.into());
                match (a, b) {
                    (Some(a), Some(b)) => Line::between(a, b).map_err(|_| PersistError::Corrupt {
                        detail: "endpoints do not form a line",
                    }),
                    _ => Err(PersistError::Corrupt {
                        detail: "line endpoint off the board",
                    }),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Game::from_parts(self.nickname, variant, &seed, &lines).map_err(|_| {
            PersistError::Corrupt {
                detail: "history contains an unplayable line",
            }
        })
    }
}
