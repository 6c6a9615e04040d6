//! The four principal axes a line may span.

use crate::Point;

/// One of the four principal directions of the board.
///
/// Each direction is the canonical unit vector of its axis; two points on
/// the same axis have the same `Direction` regardless of their order.
///
/// # Examples
///
/// ```
/// use morpion_core::{Direction, Point};
///
/// let a = Point::new(2, 2);
/// let b = Point::new(6, 6);
/// assert_eq!(Direction::between(a, b), Some(Direction::NorthEast));
/// assert_eq!(Direction::between(b, a), Some(Direction::NorthEast));
/// assert_eq!(Direction::between(a, Point::new(3, 5)), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Horizontal, unit vector (1, 0).
    East,
    /// Vertical, unit vector (0, 1).
    North,
    /// Rising diagonal, unit vector (1, 1).
    NorthEast,
    /// Falling diagonal, unit vector (1, -1).
    SouthEast,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Self; 4] = [Self::East, Self::North, Self::NorthEast, Self::SouthEast];

    /// The unit vector of this direction.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::East => (1, 0),
            Self::North => (0, 1),
            Self::NorthEast => (1, 1),
            Self::SouthEast => (1, -1),
        }
    }

    /// The axis shared by two points, if any.
    ///
    /// Returns `Some` iff `a != b` and the vector `b - a` is a non-zero
    /// integer multiple of one of the four unit vectors.
    #[must_use]
    pub fn between(a: Point, b: Point) -> Option<Self> {
        if a == b {
            return None;
        }
        let dx = i16::from(b.x()) - i16::from(a.x());
        let dy = i16::from(b.y()) - i16::from(a.y());
        Self::ALL.into_iter().find(|direction| {
            let (ux, uy) = direction.delta();
            dx * i16::from(uy) == dy * i16::from(ux)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_principal_axes() {
        let origin = Point::new(5, 5);
        assert_eq!(
            Direction::between(origin, Point::new(9, 5)),
            Some(Direction::East)
        );
        assert_eq!(
            Direction::between(origin, Point::new(5, 1)),
            Some(Direction::North)
        );
        assert_eq!(
            Direction::between(origin, Point::new(2, 2)),
            Some(Direction::NorthEast)
        );
        assert_eq!(
            Direction::between(origin, Point::new(8, 2)),
            Some(Direction::SouthEast)
        );
    }

    #[test]
    fn test_between_rejects_off_axis_and_degenerate() {
        let origin = Point::new(5, 5);
        assert_eq!(Direction::between(origin, origin), None);
        assert_eq!(Direction::between(origin, Point::new(7, 6)), None);
        assert_eq!(Direction::between(origin, Point::new(4, 7)), None);
    }

    #[test]
    fn test_between_is_symmetric() {
        let a = Point::new(1, 2);
        for b in Point::all() {
            assert_eq!(Direction::between(a, b), Direction::between(b, a));
        }
    }
}
