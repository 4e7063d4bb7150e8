//! Board sizing and game configuration.
//!
//! Hosts configure the engine at startup by providing a `GameConfig`:
//! board size, image resource set, and resolution delays. The engine
//! never reads host attributes or the environment - configuration is
//! explicit, typed state.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::images::ImageSet;

/// Board size presets.
///
/// Each size maps to fixed grid dimensions:
///
/// | Size   | Grid | Tiles | Pairs |
/// |--------|------|-------|-------|
/// | Small  | 2x2  | 4     | 2     |
/// | Medium | 4x2  | 8     | 4     |
/// | Large  | 4x4  | 16    | 8     |
///
/// The tile count is always even, so every board splits cleanly
/// into pairs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardSize {
    /// 2x2 grid, 2 pairs.
    Small,
    /// 4x2 grid, 4 pairs.
    Medium,
    /// 4x4 grid, 8 pairs.
    #[default]
    Large,
}

impl BoardSize {
    /// Grid dimensions as `(width, height)`.
    #[must_use]
    pub const fn dimensions(self) -> (usize, usize) {
        match self {
            Self::Small => (2, 2),
            Self::Medium => (4, 2),
            Self::Large => (4, 4),
        }
    }

    /// Total number of tiles on a board of this size.
    #[must_use]
    pub const fn tile_count(self) -> usize {
        let (w, h) = self.dimensions();
        w * h
    }

    /// Number of tile pairs (`tile_count / 2`).
    #[must_use]
    pub const fn pair_count(self) -> usize {
        self.tile_count() / 2
    }

    /// Layout hint: a 2-column board renders better in a narrow grid.
    #[must_use]
    pub const fn is_narrow(self) -> bool {
        self.dimensions().0 == 2
    }

    /// Lenient parse: unrecognized input falls back to [`BoardSize::Large`].
    ///
    /// Matches the behavior of attribute-backed hosts where any stray
    /// value means "use the default board". Use the strict [`FromStr`]
    /// impl to surface bad input as an error instead.
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl std::str::FromStr for BoardSize {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            other => Err(GameError::UnknownSize(other.to_string())),
        }
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        };
        write!(f, "{}", name)
    }
}

/// Game configuration.
///
/// Combines the initial board size, the image resource set, and the
/// pair-resolution delays. Delays are logical milliseconds consumed by
/// [`Board::advance`](crate::board::Board::advance); the mismatch delay
/// is longer so the player can study the revealed pair before it flips
/// back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Initial board size.
    pub size: BoardSize,

    /// Image resources for tile faces (index 0 is the tile back).
    pub images: ImageSet,

    /// Delay before a matched pair is hidden, in logical ms.
    pub match_delay_ms: u64,

    /// Delay before a mismatched pair flips back, in logical ms.
    pub mismatch_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: BoardSize::default(),
            images: ImageSet::default(),
            match_delay_ms: 1000,
            mismatch_delay_ms: 1500,
        }
    }
}

impl GameConfig {
    /// Create a configuration with defaults (large board, stock image set).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial board size (builder pattern).
    #[must_use]
    pub fn with_size(mut self, size: BoardSize) -> Self {
        self.size = size;
        self
    }

    /// Set the image resource set (builder pattern).
    #[must_use]
    pub fn with_images(mut self, images: ImageSet) -> Self {
        self.images = images;
        self
    }

    /// Set the match/mismatch resolution delays (builder pattern).
    #[must_use]
    pub fn with_delays(mut self, match_delay_ms: u64, mismatch_delay_ms: u64) -> Self {
        self.match_delay_ms = match_delay_ms;
        self.mismatch_delay_ms = mismatch_delay_ms;
        self
    }

    /// Check that the image set can cover a board of the given size.
    ///
    /// Fails fast with [`GameError::InsufficientImages`] instead of
    /// silently wrapping face indices.
    pub fn validate_for(&self, size: BoardSize) -> Result<(), GameError> {
        self.images.require_faces(size.pair_count())
    }
}
