//! Pair resolution scheduling.
//!
//! When the second tile of a turn is revealed, the outcome is already
//! decided; applying it is delayed so the player sees both faces. The
//! delay is a logical-clock deadline, not a wall-clock timer, and it is
//! keyed to the round that scheduled it: a resolution left over from a
//! previous round never fires against rebuilt tiles.

use serde::{Deserialize, Serialize};

use crate::tiles::TileId;

/// What a call to [`Board::flip`](super::Board::flip) did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// The flip was rejected (disabled, hidden, already face-up, or an
    /// unknown tile). No state changed.
    Ignored,

    /// The tile turned face-up; the turn is still open.
    Opened,

    /// A second tile turned face-up; resolution is scheduled.
    PairPending {
        /// Whether the open pair matches. The outcome applies when the
        /// delay elapses, not now.
        matched: bool,
    },
}

/// A scheduled pair resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingResolution {
    /// The earlier-flipped tile of the open pair.
    pub first: TileId,

    /// The later-flipped tile of the open pair.
    pub second: TileId,

    /// Decided at scheduling time from the two face images.
    pub matched: bool,

    /// Logical-clock time at which the resolution applies.
    pub due_at_ms: u64,

    /// The round that scheduled this resolution. A mismatch with the
    /// board's current round means the board was re-initialized while
    /// the resolution was pending; the resolution is discarded unfired.
    pub round: u32,
}

impl PendingResolution {
    /// Has the delay elapsed at logical time `now_ms`?
    #[must_use]
    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms >= self.due_at_ms
    }

    /// Was this scheduled in the given round?
    #[must_use]
    pub fn is_current(&self, round: u32) -> bool {
        self.round == round
    }
}
