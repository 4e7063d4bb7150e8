//! Error taxonomy.
//!
//! The engine is defensive at runtime (illegal flips are ignored, stale
//! timers are discarded), so errors only surface from configuration:
//! building or resizing a board against an image set that cannot cover
//! it, or strict-parsing a size string.

use thiserror::Error;

/// Errors produced by board construction and configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The image set has fewer front faces than the board has pairs.
    #[error("insufficient face images for board size: need {required}, have {available}")]
    InsufficientImages {
        /// Distinct faces the board needs (one per pair).
        required: usize,
        /// Usable faces the image set provides.
        available: usize,
    },

    /// Strict size parsing rejected the input.
    #[error("unknown board size {0:?} (expected small, medium, or large)")]
    UnknownSize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_images_message() {
        let err = GameError::InsufficientImages {
            required: 8,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "insufficient face images for board size: need 8, have 3"
        );
    }

    #[test]
    fn test_unknown_size_message() {
        let err = GameError::UnknownSize("huge".to_string());
        assert!(err.to_string().contains("huge"));
    }
}
