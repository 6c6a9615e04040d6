//! Discrete player actions delivered by the UI driver.

/// One player input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor one point.
    Move(MoveDirection),
    /// Select the cursor as a line endpoint (or attempt the pending line).
    Confirm,
    /// Clear the selection, or with nothing selected, request to quit.
    Cancel,
    /// Undo the most recently played line.
    Undo,
    /// Toggle hint display.
    ToggleHelp,
    /// Confirm a pending quit request.
    Affirm,
}

/// Cursor movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}
