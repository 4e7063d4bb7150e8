//! The board - grid of tiles plus turn and game logic.
//!
//! The board owns the tile collection, the sizing policy, the
//! shuffle/pairing algorithm, the turn-resolution state machine, the
//! attempt counter, and game-over detection.
//!
//! ## Driving the board
//!
//! The board is host-driven and single-threaded. A host loop:
//!
//! 1. calls [`Board::flip`] when the player clicks a tile,
//! 2. calls [`Board::advance`] with elapsed time so pending pair
//!    resolutions come due,
//! 3. drains [`Board::drain_events`] and reacts.
//!
//! ```
//! use concentration::board::Board;
//! use concentration::core::{BoardSize, GameConfig};
//! use concentration::tiles::TileId;
//!
//! let config = GameConfig::new().with_size(BoardSize::Small);
//! let mut board = Board::new(config, 42).unwrap();
//!
//! assert_eq!(board.tile_count(), 4);
//! board.flip(TileId::new(0));
//! board.flip(TileId::new(1));
//! board.advance(1500);
//! let _events = board.drain_events();
//! ```

mod resolution;
mod state;

pub use resolution::{FlipOutcome, PendingResolution};
pub use state::{Board, BoardSnapshot};
