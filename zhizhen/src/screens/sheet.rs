//! Bottom-sheet lifecycle
//!
//! The filter and sort overlays each run this four-state machine instead
//! of loose open/animating booleans. Transitions return whether they were
//! accepted; illegal ones leave the state unchanged.

use serde::Serialize;

/// Overlay lifecycle state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SheetState {
    #[default]
    Closed,
    /// Slide-in animation running
    Opening,
    /// Fully visible, accepting staged edits
    Open,
    /// Slide-out animation running
    Closing,
}

impl SheetState {
    /// Closed → Opening
    pub fn open(&mut self) -> bool {
        self.transition(SheetState::Closed, SheetState::Opening)
    }

    /// Opening → Open (animation finished)
    pub fn finish_open(&mut self) -> bool {
        self.transition(SheetState::Opening, SheetState::Open)
    }

    /// Open or Opening → Closing
    pub fn close(&mut self) -> bool {
        match *self {
            SheetState::Open | SheetState::Opening => {
                *self = SheetState::Closing;
                true
            }
            _ => false,
        }
    }

    /// Closing → Closed (animation finished)
    pub fn finish_close(&mut self) -> bool {
        self.transition(SheetState::Closing, SheetState::Closed)
    }

    /// Fully visible and interactive
    pub fn is_open(&self) -> bool {
        *self == SheetState::Open
    }

    fn transition(&mut self, from: SheetState, to: SheetState) -> bool {
        if *self == from {
            *self = to;
            true
        } else {
            false
        }
    }
}
