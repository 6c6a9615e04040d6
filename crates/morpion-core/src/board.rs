//! The fixed-size occupancy board.

use crate::{GRID_SIZE, LINE_LENGTH, Line, Point};

const CELLS: usize = GRID_SIZE as usize * GRID_SIZE as usize;

/// Side length of the bounding box of the starting cross.
const CROSS_SPAN: u8 = 10;

/// Occupancy of every point of the board.
///
/// A dense fixed-size boolean field mutated in place; it never grows and
/// never allocates after construction.
///
/// # Examples
///
/// ```
/// use morpion_core::{Board, Point};
///
/// let mut board = Board::empty();
/// assert!(!board.is_occupied(Point::new(0, 0)));
/// board.mark(Point::new(0, 0));
/// assert_eq!(board.count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    occupied: [bool; CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with no occupied point.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            occupied: [false; CELLS],
        }
    }

    /// The standard starting position: a Greek cross of 36 points centered
    /// on the board.
    #[must_use]
    pub fn standard_cross() -> Self {
        let offset = (GRID_SIZE - CROSS_SPAN) / 2;
        let mut board = Self::empty();
        for y in 0..CROSS_SPAN {
            for x in 0..CROSS_SPAN {
                if on_cross_outline(x, y) {
                    board.mark(Point::new(x + offset, y + offset));
                }
            }
        }
        board
    }

    /// Whether `p` is occupied.
    #[must_use]
    pub fn is_occupied(&self, p: Point) -> bool {
        self.occupied[p.index()]
    }

    /// Marks `p` occupied. Marking an occupied point is a no-op.
    pub fn mark(&mut self, p: Point) {
        self.occupied[p.index()] = true;
    }

    /// Marks `p` free.
    pub fn clear(&mut self, p: Point) {
        self.occupied[p.index()] = false;
    }

    /// How many of the line's [`LINE_LENGTH`] points are occupied.
    #[must_use]
    pub fn occupied_count_in(&self, line: Line) -> usize {
        line.points().iter().filter(|&&p| self.is_occupied(p)).count()
    }

    /// Total number of occupied points.
    #[must_use]
    pub fn count(&self) -> usize {
        self.occupied.iter().filter(|&&o| o).count()
    }

    /// Iterates over the occupied points in row-major order.
    pub fn occupied_points(&self) -> impl Iterator<Item = Point> + '_ {
        Point::all().filter(|&p| self.is_occupied(p))
    }
}

/// Whether `(x, y)` lies on the outline of the plus-shaped polygon spanning
/// `0..CROSS_SPAN` in both axes (arms 4 points wide).
fn on_cross_outline(x: u8, y: u8) -> bool {
    let outer = |v: u8| v == 0 || v == CROSS_SPAN - 1;
    let inner = |v: u8| v == 3 || v == CROSS_SPAN - 4;
    let arm = |v: u8| (3..CROSS_SPAN - 3).contains(&v);
    let reaches_edge = |v: u8| v <= 3 || v >= CROSS_SPAN - 4;
    (outer(y) && arm(x))
        || (outer(x) && arm(y))
        || (inner(y) && reaches_edge(x))
        || (inner(x) && reaches_edge(y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_and_clear() {
        let mut board = Board::empty();
        let p = Point::new(4, 7);
        board.mark(p);
        assert!(board.is_occupied(p));
        board.mark(p);
        assert_eq!(board.count(), 1);
        board.clear(p);
        assert!(!board.is_occupied(p));
        assert_eq!(board.count(), 0);
    }

    #[test]
    fn test_standard_cross_has_36_points() {
        let board = Board::standard_cross();
        assert_eq!(board.count(), 36);
        assert_eq!(board.occupied_points().count(), 36);

        // Corners of the cross arms, shifted by the centering offset.
        let offset = (GRID_SIZE - CROSS_SPAN) / 2;
        for (x, y) in [(3, 0), (6, 0), (0, 3), (9, 6), (3, 9), (6, 9)] {
            assert!(board.is_occupied(Point::new(x + offset, y + offset)));
        }
        // The center of the cross is not part of the outline.
        assert!(!board.is_occupied(Point::new(offset + 4, offset + 4)));
    }

    #[test]
    fn test_standard_cross_is_symmetric() {
        let board = Board::standard_cross();
        let offset = (GRID_SIZE - CROSS_SPAN) / 2;
        for p in board.occupied_points() {
            let x = p.x() - offset;
            let y = p.y() - offset;
            let mirrored = Point::new(CROSS_SPAN - 1 - x + offset, y + offset);
            assert!(board.is_occupied(mirrored), "no mirror for {p}");
        }
    }

    #[test]
    fn test_occupied_count_in() {
        let mut board = Board::empty();
        let line = Line::between(Point::new(0, 0), Point::new(4, 0)).unwrap();
        assert_eq!(board.occupied_count_in(line), 0);
        for x in 0..4 {
            board.mark(Point::new(x, 0));
        }
        assert_eq!(board.occupied_count_in(line), LINE_LENGTH - 1);
        board.mark(Point::new(4, 0));
        assert_eq!(board.occupied_count_in(line), LINE_LENGTH);
    }
}
