//! Game events.
//!
//! The board does not call back into its host. It pushes events onto an
//! internal queue as turns resolve; the host drains the queue after
//! driving the board (flip, advance) and reacts - updating a score
//! display, playing a sound, starting a new round UI.
//!
//! This replaces an event-bubbling notification chain with an explicit
//! message queue while preserving the three notifications and their
//! payloads.

use serde::{Deserialize, Serialize};

use crate::tiles::TileId;

/// A notification emitted by the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Two face-up tiles matched and were removed from play.
    TilesMatched {
        /// The earlier-flipped tile of the pair.
        first: TileId,
        /// The later-flipped tile of the pair.
        second: TileId,
    },

    /// Two face-up tiles did not match and flipped back down.
    TilesMismatched {
        /// The earlier-flipped tile of the pair.
        first: TileId,
        /// The later-flipped tile of the pair.
        second: TileId,
    },

    /// Every tile is hidden; the round is over.
    ///
    /// The attempt count for the finished round is available from
    /// [`Board::score_summary`](crate::board::Board::score_summary),
    /// since the live counter resets when the next round starts.
    GameOver,
}

/// FIFO queue of board events, drained by the host.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event.
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all queued events, oldest first, leaving the queue empty.
    #[must_use]
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of queued events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Is the queue empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Peek at queued events without draining.
    #[must_use]
    pub fn peek(&self) -> &[GameEvent] {
        &self.events
    }
}
