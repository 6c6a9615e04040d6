//! Move legality and exhaustive enumeration of playable lines.

use morpion_core::{Board, Direction, LINE_LENGTH, Line, Point};

use crate::{Variant, game::PlayedLine};

/// Whether `line` may be played on `board` given the full `played` history.
///
/// A candidate line is legal iff at least `LINE_LENGTH - 1` of its points
/// are already occupied (one point at most is newly placed), none of its
/// unit segments coincides with a segment of any played line, and, under
/// the disjoint variant, none of its points equals an interior point of a
/// played line. The overlap test runs against the whole history; this is
/// the rule that separates Morpion Solitaire from five-in-a-row scanning.
pub(crate) fn is_playable(
    board: &Board,
    played: &[PlayedLine],
    line: Line,
    variant: Variant,
) -> bool {
    if board.occupied_count_in(line) < LINE_LENGTH - 1 {
        return false;
    }
    let segments = line.segments();
    for entry in played {
        if entry
            .line
            .segments()
            .iter()
            .any(|segment| segments.contains(segment))
        {
            return false;
        }
        if variant == Variant::Disjoint && entry.line.interior().iter().any(|&p| line.contains(p)) {
            return false;
        }
    }
    true
}

/// Every currently playable line, each geometric line listed exactly once.
///
/// Scans all points as forward anchors of the four axis directions, so a
/// line is never visited again from its other endpoint. Pure and
/// deterministic; an empty result is the game-over condition.
pub(crate) fn possibilities(board: &Board, played: &[PlayedLine], variant: Variant) -> Vec<Line> {
    let mut lines = Vec::new();
    for start in Point::all() {
        for direction in Direction::ALL {
            let Some(line) = Line::from_start(start, direction) else {
                continue;
            };
            if is_playable(board, played, line, variant) {
                lines.push(line);
            }
        }
    }
    lines
}
