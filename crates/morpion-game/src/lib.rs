//! Rules engine and game session for Morpion Solitaire.
//!
//! This crate implements the game itself on top of the [`morpion_core`]
//! data model: move legality under both rule variants, move application
//! with undo, exhaustive enumeration of the remaining playable lines (the
//! zero of which is the game-over condition), and the [`Game`] session
//! value owning board, history, selection and player metadata.
//!
//! # Examples
//!
//! ```
//! use morpion_game::{Game, Variant};
//!
//! let game = Game::new("ada", Variant::Touching);
//! assert_eq!(game.lines_count(), 0);
//! assert!(game.count_possibilities() > 0);
//! ```

pub mod error;
pub mod game;
mod rules;
pub mod variant;

pub use self::{
    error::GameError,
    game::Game,
    variant::{ParseVariantError, Variant},
};
