//! Core data model for Morpion Solitaire.
//!
//! This crate provides the board geometry shared by the rules engine and the
//! application: coordinates, the four principal line directions, 5-point
//! lines and their unit segments, and the fixed-size occupancy board.
//!
//! # Overview
//!
//! - [`point`]: [`Point`] coordinates over the fixed `GRID_SIZE`×`GRID_SIZE`
//!   board. "No point" is `Option<Point>`; there is no sentinel value.
//! - [`direction`]: [`Direction`], the four principal axes a line may span.
//! - [`line`]: [`Line`], an ordered run of exactly [`LINE_LENGTH`] collinear
//!   evenly-spaced points, and [`Segment`], the normalized adjacent-point
//!   pairs that give a line its overlap identity.
//! - [`board`]: [`Board`], a dense allocation-free occupancy grid, plus the
//!   standard 36-point starting cross.
//!
//! # Examples
//!
//! ```
//! use morpion_core::{Board, Line, Point};
//!
//! let board = Board::standard_cross();
//! assert_eq!(board.count(), 36);
//!
//! let line = Line::between(Point::new(0, 0), Point::new(4, 4)).unwrap();
//! assert_eq!(board.occupied_count_in(line), 0);
//! ```

pub mod board;
pub mod direction;
pub mod line;
pub mod point;

pub use self::{
    board::Board,
    direction::Direction,
    line::{Line, LineError, Segment},
    point::Point,
};

/// Width and height of the square board, in points.
pub const GRID_SIZE: u8 = 20;

/// Number of points in a playable line.
pub const LINE_LENGTH: usize = 5;
