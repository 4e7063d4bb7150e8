//! Tiles - the flippable cards on the board.
//!
//! A [`Tile`] owns its own face-up/disabled/hidden state and enforces
//! the flip contract locally: flip requests against a disabled, hidden,
//! or already-face-up tile are rejected before the board ever observes
//! them. The board only handles legal flips.

mod tile;

pub use tile::{Tile, TileId};
