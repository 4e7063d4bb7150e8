//! # concentration
//!
//! A memory-matching (concentration) game engine.
//!
//! ## Design Principles
//!
//! 1. **Pure library**: No rendering, no DOM, no timers. The host owns
//!    the UI and the clock; the engine owns the rules.
//!
//! 2. **Explicit state**: Tiles are plain values with typed
//!    face-up/disabled/hidden fields, partitioned by predicate filters.
//!    No attribute round-tripping.
//!
//! 3. **Host-driven time**: Pair resolutions are logical-clock
//!    deadlines applied by [`Board::advance`], keyed to the round that
//!    scheduled them. Re-initializing the board cancels them; a stale
//!    resolution never fires against rebuilt tiles.
//!
//! ## Gameplay
//!
//! The board shuffles an even number of tiles into pairs sharing a
//! face image. The player flips tiles two at a time; once a pair is
//! open the rest of the board locks. After a short delay a match hides
//! both tiles, a mismatch flips them back, and either way the attempt
//! counter ticks. When every tile is hidden the board emits
//! [`GameEvent::GameOver`] and reshuffles for the next round.
//!
//! ## Modules
//!
//! - `core`: Configuration, image resources, errors, RNG
//! - `tiles`: Tile values and their local flip contract
//! - `events`: Board notifications and the host-drained queue
//! - `board`: Board sizing, shuffle/pairing, turn resolution

pub mod board;
pub mod core;
pub mod events;
pub mod tiles;

// Re-export commonly used types
pub use crate::core::{
    BoardSize, GameConfig, GameError, GameRng, GameRngState, ImageId, ImageSet,
    DEFAULT_IMAGE_COUNT,
};

pub use crate::tiles::{Tile, TileId};

pub use crate::events::{EventQueue, GameEvent};

pub use crate::board::{Board, BoardSnapshot, FlipOutcome, PendingResolution};
