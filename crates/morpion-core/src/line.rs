//! Lines and their unit segments.

use std::fmt::{self, Display};

use crate::{Direction, LINE_LENGTH, Point};

/// Why a pair of endpoints does not form a playable line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LineError {
    /// The endpoints do not share one of the four principal axes.
    #[display("endpoints are not aligned on a principal axis")]
    NotAligned,
    /// The endpoints are aligned but not exactly `LINE_LENGTH - 1` steps
    /// apart.
    #[display("endpoints span {steps} steps, expected {}", LINE_LENGTH - 1)]
    WrongSpan {
        /// Number of grid steps between the endpoints.
        steps: u16,
    },
}

/// A run of exactly [`LINE_LENGTH`] collinear, evenly-spaced points.
///
/// Every line is stored with its points ordered along the canonical unit
/// vector of its axis, so a geometric line has exactly one representation
/// and lines compare equal iff they cover the same points.
///
/// For overlap purposes a line is identified by the set of unit
/// [`Segment`]s it covers, not by its endpoints alone.
///
/// # Examples
///
/// ```
/// use morpion_core::{Line, LineError, Point};
///
/// let line = Line::between(Point::new(4, 0), Point::new(0, 0)).unwrap();
/// assert_eq!(line.points()[0], Point::new(0, 0));
/// assert_eq!(line.segments().len(), 4);
///
/// // Only spans of exactly 4 steps are accepted (Morpion lines have 5 points).
/// assert_eq!(
///     Line::between(Point::new(0, 0), Point::new(3, 0)),
///     Err(LineError::WrongSpan { steps: 3 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    points: [Point; LINE_LENGTH],
    direction: Direction,
}

impl Line {
    /// Builds the line joining two endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`LineError::NotAligned`] if the endpoints do not share a
    /// principal axis, and [`LineError::WrongSpan`] if they are aligned but
    /// not exactly `LINE_LENGTH - 1` grid steps apart. Shorter or longer
    /// spans are always rejected.
    #[expect(clippy::missing_panics_doc)] // both endpoints are valid points
    pub fn between(a: Point, b: Point) -> Result<Self, LineError> {
        let direction = Direction::between(a, b).ok_or(LineError::NotAligned)?;
        let dx = i16::from(b.x()) - i16::from(a.x());
        let dy = i16::from(b.y()) - i16::from(a.y());
        let steps = dx.unsigned_abs().max(dy.unsigned_abs());
        if usize::from(steps) != LINE_LENGTH - 1 {
            return Err(LineError::WrongSpan { steps });
        }
        let (ux, uy) = direction.delta();
        let start = if (dx.signum(), dy.signum()) == (i16::from(ux).signum(), i16::from(uy).signum())
        {
            a
        } else {
            b
        };
        Ok(Self::from_start(start, direction).expect("both endpoints are on the board"))
    }

    /// Builds the line anchored at `start` and running along `direction`,
    /// `None` if it would leave the board.
    #[must_use]
    pub fn from_start(start: Point, direction: Direction) -> Option<Self> {
        let mut points = [start; LINE_LENGTH];
        for i in 1..LINE_LENGTH {
            points[i] = points[i - 1].step(direction)?;
        }
        Some(Self { points, direction })
    }

    /// The points of the line, ordered along its axis.
    #[must_use]
    pub const fn points(&self) -> &[Point; LINE_LENGTH] {
        &self.points
    }

    /// The axis the line spans.
    #[must_use]
    pub const fn direction(self) -> Direction {
        self.direction
    }

    /// The two extreme points of the line.
    #[must_use]
    pub const fn endpoints(self) -> (Point, Point) {
        (self.points[0], self.points[LINE_LENGTH - 1])
    }

    /// The three non-endpoint points of the line.
    #[must_use]
    pub fn interior(&self) -> &[Point] {
        &self.points[1..LINE_LENGTH - 1]
    }

    /// Whether `p` is one of the line's points.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }

    /// The four unit segments the line covers, in order.
    #[must_use]
    pub fn segments(&self) -> [Segment; LINE_LENGTH - 1] {
        std::array::from_fn(|i| Segment::new(self.points[i], self.points[i + 1]))
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.endpoints();
        write!(f, "{a}-{b}")
    }
}

/// An adjacent-point pair, normalized so the same physical unit segment
/// always compares equal regardless of traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    a: Point,
    b: Point,
}

impl Segment {
    pub(crate) fn new(a: Point, b: Point) -> Self {
        if a <= b { Self { a, b } } else { Self { a: b, b: a } }
    }

    /// The segment's endpoints, in normalized order.
    #[must_use]
    pub const fn endpoints(self) -> (Point, Point) {
        (self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::GRID_SIZE;

    #[test]
    fn test_between_orders_points_canonically() {
        let forward = Line::between(Point::new(0, 0), Point::new(4, 0)).unwrap();
        let backward = Line::between(Point::new(4, 0), Point::new(0, 0)).unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward.points()[0], Point::new(0, 0));
        assert_eq!(forward.direction(), Direction::East);
    }

    #[test]
    fn test_between_rejects_short_and_long_spans() {
        assert_eq!(
            Line::between(Point::new(0, 0), Point::new(3, 0)),
            Err(LineError::WrongSpan { steps: 3 })
        );
        assert_eq!(
            Line::between(Point::new(0, 0), Point::new(5, 0)),
            Err(LineError::WrongSpan { steps: 5 })
        );
        assert_eq!(
            Line::between(Point::new(0, 0), Point::new(1, 2)),
            Err(LineError::NotAligned)
        );
    }

    #[test]
    fn test_from_start_stops_at_the_edge() {
        assert!(Line::from_start(Point::new(GRID_SIZE - 5, 0), Direction::East).is_some());
        assert!(Line::from_start(Point::new(GRID_SIZE - 4, 0), Direction::East).is_none());
        assert!(Line::from_start(Point::new(0, 4), Direction::SouthEast).is_some());
        assert!(Line::from_start(Point::new(0, 3), Direction::SouthEast).is_none());
    }

    #[test]
    fn test_segments_are_orientation_independent() {
        let line = Line::between(Point::new(2, 2), Point::new(6, 6)).unwrap();
        let segments = line.segments();
        assert_eq!(segments.len(), 4);
        assert_eq!(
            Segment::new(Point::new(3, 3), Point::new(2, 2)),
            segments[0]
        );
    }

    #[test]
    fn test_interior_excludes_endpoints() {
        let line = Line::between(Point::new(0, 4), Point::new(4, 0)).unwrap();
        let (a, b) = line.endpoints();
        assert_eq!(line.interior().len(), 3);
        assert!(!line.interior().contains(&a));
        assert!(!line.interior().contains(&b));
        assert!(line.contains(a) && line.contains(b));
    }

    proptest! {
        #[test]
        fn between_yields_evenly_spaced_points(
            x in 0..GRID_SIZE,
            y in 0..GRID_SIZE,
            i in 0usize..4,
            flip in proptest::bool::ANY,
        ) {
            let start = Point::new(x, y);
            let direction = Direction::ALL[i];
            let Some(line) = Line::from_start(start, direction) else {
                return Ok(());
            };
            let (a, b) = line.endpoints();
            let (a, b) = if flip { (b, a) } else { (a, b) };
            let rebuilt = Line::between(a, b).unwrap();
            prop_assert_eq!(rebuilt, line);
            for pair in rebuilt.points().windows(2) {
                let dx = i16::from(pair[1].x()) - i16::from(pair[0].x());
                let dy = i16::from(pair[1].y()) - i16::from(pair[0].y());
                let (ux, uy) = direction.delta();
                prop_assert_eq!((dx, dy), (i16::from(ux), i16::from(uy)));
            }
        }
    }
}
