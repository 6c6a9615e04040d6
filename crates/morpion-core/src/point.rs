//! Board coordinates.

use std::fmt::{self, Display};

use crate::{Direction, GRID_SIZE};

/// A board coordinate, valid over `0..GRID_SIZE` on both axes.
///
/// Validity is a type invariant: every existing `Point` is on the board.
/// An absent point (an empty selection, a step off the edge) is represented
/// as `Option<Point>` rather than a sentinel coordinate.
///
/// # Examples
///
/// ```
/// use morpion_core::{GRID_SIZE, Point};
///
/// let p = Point::new(3, 7);
/// assert_eq!((p.x(), p.y()), (3, 7));
///
/// // Checked construction from signed arithmetic
/// assert_eq!(Point::try_new(-1, 0), None);
/// assert_eq!(Point::try_new(0, i16::from(GRID_SIZE)), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    x: u8,
    y: u8,
}

impl Point {
    /// Creates a point from on-board coordinates.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is `GRID_SIZE` or more.
    #[must_use]
    pub fn new(x: u8, y: u8) -> Self {
        assert!(
            x < GRID_SIZE && y < GRID_SIZE,
            "point out of bounds: ({x}, {y})"
        );
        Self { x, y }
    }

    /// Creates a point if the coordinates are on the board, `None` otherwise.
    #[must_use]
    pub fn try_new(x: i16, y: i16) -> Option<Self> {
        let x = u8::try_from(x).ok()?;
        let y = u8::try_from(y).ok()?;
        (x < GRID_SIZE && y < GRID_SIZE).then_some(Self { x, y })
    }

    /// The x coordinate (0-based, leftmost column is 0).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// The y coordinate (0-based, bottom row is 0).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Iterates over every point of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..GRID_SIZE).flat_map(|y| (0..GRID_SIZE).map(move |x| Self { x, y }))
    }

    /// Moves one grid unit along `direction`, `None` off the board.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        Self::try_new(
            i16::from(self.x) + i16::from(dx),
            i16::from(self.y) + i16::from(dy),
        )
    }

    /// Moves one grid unit against `direction`, `None` off the board.
    #[must_use]
    pub fn step_back(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        Self::try_new(
            i16::from(self.x) - i16::from(dx),
            i16::from(self.y) - i16::from(dy),
        )
    }

    /// The point one row up, `None` at the top edge.
    #[must_use]
    pub fn up(self) -> Option<Self> {
        Self::try_new(i16::from(self.x), i16::from(self.y) + 1)
    }

    /// The point one row down, `None` at the bottom edge.
    #[must_use]
    pub fn down(self) -> Option<Self> {
        Self::try_new(i16::from(self.x), i16::from(self.y) - 1)
    }

    /// The point one column left, `None` at the left edge.
    #[must_use]
    pub fn left(self) -> Option<Self> {
        Self::try_new(i16::from(self.x) - 1, i16::from(self.y))
    }

    /// The point one column right, `None` at the right edge.
    #[must_use]
    pub fn right(self) -> Option<Self> {
        Self::try_new(i16::from(self.x) + 1, i16::from(self.y))
    }

    /// Row-major index into a `GRID_SIZE * GRID_SIZE` backing array.
    pub(crate) fn index(self) -> usize {
        usize::from(self.y) * usize::from(GRID_SIZE) + usize::from(self.x)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(Point::try_new(0, 0), Some(Point::new(0, 0)));
        assert_eq!(
            Point::try_new(i16::from(GRID_SIZE) - 1, 0),
            Some(Point::new(GRID_SIZE - 1, 0))
        );
        assert_eq!(Point::try_new(i16::from(GRID_SIZE), 0), None);
        assert_eq!(Point::try_new(0, -1), None);
    }

    #[test]
    #[should_panic(expected = "point out of bounds")]
    fn test_new_out_of_bounds_panics() {
        let _ = Point::new(GRID_SIZE, 0);
    }

    #[test]
    fn test_all_covers_grid_once() {
        let points: Vec<_> = Point::all().collect();
        assert_eq!(points.len(), usize::from(GRID_SIZE) * usize::from(GRID_SIZE));
        assert_eq!(points[0], Point::new(0, 0));
        assert_eq!(points[usize::from(GRID_SIZE)], Point::new(0, 1));

        let mut indices: Vec<_> = points.iter().map(|p| p.index()).collect();
        indices.dedup();
        assert_eq!(indices.len(), points.len());
    }

    #[test]
    fn test_edge_steps() {
        let origin = Point::new(0, 0);
        assert_eq!(origin.left(), None);
        assert_eq!(origin.down(), None);
        assert_eq!(origin.right(), Some(Point::new(1, 0)));
        assert_eq!(origin.up(), Some(Point::new(0, 1)));
    }

    proptest! {
        #[test]
        fn step_and_step_back_are_inverse(
            x in 0..GRID_SIZE,
            y in 0..GRID_SIZE,
            i in 0usize..4,
        ) {
            let p = Point::new(x, y);
            let direction = Direction::ALL[i];
            if let Some(q) = p.step(direction) {
                prop_assert_eq!(q.step_back(direction), Some(p));
            }
            if let Some(q) = p.step_back(direction) {
                prop_assert_eq!(q.step(direction), Some(p));
            }
        }

        #[test]
        fn try_new_agrees_with_bounds(x in -30i16..30, y in -30i16..30) {
            let in_bounds = (0..i16::from(GRID_SIZE)).contains(&x)
                && (0..i16::from(GRID_SIZE)).contains(&y);
            prop_assert_eq!(Point::try_new(x, y).is_some(), in_bounds);
        }
    }
}
