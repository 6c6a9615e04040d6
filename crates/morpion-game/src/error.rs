//! Game errors.

use derive_more::{Display, Error, From};
use morpion_core::LineError;

/// Errors produced by [`Game`](crate::Game) operations.
///
/// Every legality verdict is a pure function of the current game state:
/// re-evaluating the same inputs always yields the same error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// The selected endpoints do not form a 5-point line.
    #[display("invalid line: {_0}")]
    Line(LineError),
    /// The line is geometrically valid but illegal under the current board
    /// state and variant.
    #[display("line is not playable under the current rules")]
    UnplayableLine,
    /// A reconstructed history replays a line that is not playable.
    #[display("saved history contains an unplayable line")]
    InvalidSave,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_error_conversion() {
        let err: GameError = LineError::NotAligned.into();
        assert_eq!(err, GameError::Line(LineError::NotAligned));
        assert_eq!(err.to_string(), "invalid line: endpoints are not aligned on a principal axis");
    }
}
