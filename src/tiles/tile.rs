//! Tile instances - runtime tile state.

use serde::{Deserialize, Serialize};

use crate::core::ImageId;

/// Unique identifier for a tile on the board.
///
/// Stable across a round; tile IDs are reassigned when the board is
/// rebuilt for a different size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// A single card with a hidden back and a face image.
///
/// ## State
///
/// - `face_up`: front showing, pending resolution
/// - `disabled`: flips blocked (orthogonal to the other flags)
/// - `hidden`: matched and removed from play
///
/// A tile that is neither face-up, disabled, nor hidden is playable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Unique ID for this tile.
    pub id: TileId,

    /// The front face image. Never the reserved back image.
    pub image: ImageId,

    /// Is the front face showing?
    pub face_up: bool,

    /// Are flips blocked?
    pub disabled: bool,

    /// Matched and removed from play?
    pub hidden: bool,
}

impl Tile {
    /// Create a face-down, enabled, visible tile.
    #[must_use]
    pub fn new(id: TileId, image: ImageId) -> Self {
        Self {
            id,
            image,
            face_up: false,
            disabled: false,
            hidden: false,
        }
    }

    /// Can the player flip this tile right now?
    #[must_use]
    pub fn is_playable(&self) -> bool {
        !self.face_up && !self.disabled && !self.hidden
    }

    /// Is this tile showing its front face and still in play?
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.face_up && !self.hidden
    }

    /// Do two tiles form a pair?
    ///
    /// Equality is by front face image, the same check the visual tile
    /// exposes as `isEqual`.
    #[must_use]
    pub fn is_match(&self, other: &Tile) -> bool {
        self.image == other.image
    }

    /// Attempt a user flip.
    ///
    /// Returns `true` and turns the tile face-up when the tile is
    /// playable; returns `false` with no state change when the tile is
    /// disabled, hidden, or already face-up.
    pub fn flip_up(&mut self) -> bool {
        if !self.is_playable() {
            return false;
        }
        self.face_up = true;
        true
    }

    /// Return the tile to face-down (mismatch outcome).
    pub fn turn_down(&mut self) {
        self.face_up = false;
    }

    /// Reset to the initial face-down, enabled, visible state.
    pub fn reset(&mut self) {
        self.face_up = false;
        self.disabled = false;
        self.hidden = false;
    }
}
