//! Image resource set.
//!
//! Tiles draw their faces from a fixed, ordered collection of images.
//! Index 0 is reserved for the tile back artwork and is never assigned
//! as a front face; indices `1..count` are the usable pair faces. The
//! reservation is intentional, not an off-by-one - the pairing formula
//! in the board depends on it.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Number of images in the stock resource set (one back + eight faces),
/// enough for the largest board.
pub const DEFAULT_IMAGE_COUNT: u32 = 9;

/// Index into the image resource set.
///
/// `ImageId(0)` is the tile back; faces start at 1. Two tiles form a
/// pair exactly when their face `ImageId`s are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageId(pub u32);

impl ImageId {
    /// The reserved tile-back image.
    pub const BACK: Self = Self(0);

    /// Create a new image ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Is this a usable front face (anything but the reserved back)?
    #[must_use]
    pub const fn is_face(self) -> bool {
        self.0 != 0
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Image({})", self.0)
    }
}

/// An ordered image resource set.
///
/// The engine only cares about how many resources exist; hosts map
/// indices to actual artwork (files, URLs, sprites).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSet {
    count: u32,
}

impl Default for ImageSet {
    fn default() -> Self {
        Self {
            count: DEFAULT_IMAGE_COUNT,
        }
    }
}

impl ImageSet {
    /// Create an image set with `count` resources (back included).
    #[must_use]
    pub const fn new(count: u32) -> Self {
        Self { count }
    }

    /// Total resource count, tile back included.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Number of usable front faces (everything but the back).
    #[must_use]
    pub const fn face_count(&self) -> u32 {
        self.count.saturating_sub(1)
    }

    /// The reserved tile-back image.
    #[must_use]
    pub const fn back(&self) -> ImageId {
        ImageId::BACK
    }

    /// Check that at least `pairs` distinct front faces are available.
    pub fn require_faces(&self, pairs: usize) -> Result<(), GameError> {
        if (self.face_count() as usize) < pairs {
            return Err(GameError::InsufficientImages {
                required: pairs,
                available: self.face_count() as usize,
            });
        }
        Ok(())
    }
}
